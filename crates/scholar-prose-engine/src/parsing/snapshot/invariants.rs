use std::borrow::Cow;

use crate::parsing::{blocks::Block, normalize::repair_artifacts, thresholds::Thresholds};

/// Validates pipeline output invariants for a whole document.
///
/// Asserts that:
/// - No block is empty or whitespace-only
/// - The first block is a callout
/// - The non-whitespace characters of all spans, in block order, form a
///   subsequence of the (artifact-repaired) input, so nothing is invented and
///   nothing is reordered
///
/// # Panics
/// Panics with a descriptive message if any invariant is violated.
pub fn check(raw: &str, thresholds: &Thresholds, blocks: &[Block]) {
    for (i, block) in blocks.iter().enumerate() {
        assert!(
            !block.display_text().trim().is_empty(),
            "block {i} ({}) has no text",
            block.kind.name()
        );
    }

    if let Some(first) = blocks.first() {
        assert!(
            first.is_callout,
            "first block ({}) is not a callout",
            first.kind.name()
        );
    }

    let source = if thresholds.repair_artifacts {
        repair_artifacts(raw)
    } else {
        Cow::Borrowed(raw)
    };
    let mut source_chars = source.chars().filter(|c| !c.is_whitespace());
    for (i, block) in blocks.iter().enumerate() {
        for span in block.spans() {
            for c in span.text.chars().filter(|c| !c.is_whitespace()) {
                assert!(
                    source_chars.any(|s| s == c),
                    "block {i} ({}): {c:?} from {:?} not found in order in the input",
                    block.kind.name(),
                    span.text
                );
            }
        }
    }
}
