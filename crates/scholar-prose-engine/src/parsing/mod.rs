//! # Prose Classification Pipeline
//!
//! raw text → [`split`] → [`normalize`] (per candidate) → [`blocks::classify`]
//! (inline emphasis applied to every field) → [`callout::flag_callouts`].
//!
//! Every stage is a pure function of its input. Nothing is cached between
//! documents apart from the compiled regexes in [`patterns`].
//!
//! ## Modules
//!
//! - **`split`**: Section candidates from blank lines or punctuation fallbacks
//! - **`normalize`**: Cleaned lines with canonical `LineMarker`s
//! - **`blocks`**: Rule table that turns one candidate into one `Block`
//! - **`inline`**: `**bold**` / `*italic*` spans
//! - **`callout`**: Intro/conclusion flags
//! - **`thresholds`**: Tuning values for the heuristics
//! - **`snapshot`**: Outline dumps and invariant checks for tests
//!
//! ## Failure Mode
//!
//! There is no error path. Any input, including the empty string, resolves to
//! a (possibly empty) `Vec<Block>`.

pub mod blocks;
pub mod callout;
pub mod inline;
pub mod normalize;
pub(crate) mod patterns;
pub mod snapshot;
pub mod split;
pub mod thresholds;

#[cfg(test)]
mod tests;

use std::borrow::Cow;

use serde::Serialize;

use blocks::{Block, classify};
use normalize::{normalize, repair_artifacts};
use split::split;
use thresholds::Thresholds;

/// The ordered blocks produced for one input string.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ClassificationResult {
    pub blocks: Vec<Block>,
}

impl ClassificationResult {
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.blocks.is_empty()
    }
}

/// Classifies a whole document with the default thresholds.
pub fn classify_document(raw: &str) -> ClassificationResult {
    classify_document_with(raw, &Thresholds::default())
}

/// Classifies a whole document, callout flags included.
pub fn classify_document_with(raw: &str, thresholds: &Thresholds) -> ClassificationResult {
    ClassificationResult {
        blocks: callout::flag_callouts(parse_blocks(raw, thresholds)),
    }
}

/// Splits, normalizes and classifies, without keyword callout detection.
///
/// Only the structural first-candidate flag is set on the blocks. Requirement
/// items use this directly since they carry no callouts.
pub fn parse_blocks(raw: &str, thresholds: &Thresholds) -> Vec<Block> {
    // "stop" tokens become paragraph breaks, so repair before splitting.
    let text = if thresholds.repair_artifacts {
        repair_artifacts(raw)
    } else {
        Cow::Borrowed(raw)
    };

    split(&text, thresholds)
        .iter()
        .filter_map(|candidate| {
            let lines = normalize(candidate, thresholds);
            if lines.is_empty() {
                log::trace!("pipeline: candidate {} normalized to nothing", candidate.index);
                return None;
            }
            Some(classify(&lines, candidate.is_first(), thresholds))
        })
        .collect()
}
