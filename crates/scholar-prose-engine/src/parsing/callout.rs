//! Intro/conclusion detection.
//!
//! Callouts are a flag on top of the structural kind: a heading, a list or a
//! paragraph can each be a callout.

use super::blocks::Block;

/// Phrases that mark a summary or closing block, matched case-insensitively.
pub const CALLOUT_KEYWORDS: &[&str] = &[
    "conclusion",
    "in summary",
    "to conclude",
    "start your journey",
    "transform your",
];

/// Fixed call-to-action appended after a callout that mentions "conclusion".
pub const FOLLOW_UP: &str =
    "Ready to take the next step? Browse open scholarships and start your application today.";

const FOLLOW_UP_KEYWORD: &str = "conclusion";

/// Sets `is_callout` on the first block and on every keyword block.
///
/// Flags already set are kept.
pub fn flag_callouts(blocks: Vec<Block>) -> Vec<Block> {
    blocks
        .into_iter()
        .enumerate()
        .map(|(i, block)| {
            let is_callout = block.is_callout || i == 0 || has_callout_keyword(&block);
            if is_callout && !block.is_callout {
                log::debug!("callout: {} block {i}", block.kind.name());
            }
            Block { is_callout, ..block }
        })
        .collect()
}

/// True for a callout whose text mentions "conclusion".
#[must_use]
pub fn wants_follow_up(block: &Block) -> bool {
    block.is_callout && lowercase_text(block).contains(FOLLOW_UP_KEYWORD)
}

fn has_callout_keyword(block: &Block) -> bool {
    let text = lowercase_text(block);
    CALLOUT_KEYWORDS.iter().any(|k| text.contains(k))
}

fn lowercase_text(block: &Block) -> String {
    block.display_text().to_lowercase()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parsing::{
        blocks::{BlockKind, TextLine},
        inline::Span,
    };
    use rstest::rstest;

    fn paragraph(text: &str) -> Block {
        Block::new(BlockKind::Paragraph {
            lines: vec![TextLine {
                spans: vec![Span::plain(text)],
                is_step: false,
            }],
        })
    }

    fn flags(blocks: Vec<Block>) -> Vec<bool> {
        flag_callouts(blocks).iter().map(|b| b.is_callout).collect()
    }

    #[test]
    fn first_block_is_always_a_callout() {
        let heading = Block::new(BlockKind::Heading {
            level: 1,
            text: vec![Span::plain("Plain title")],
        });
        assert_eq!(flags(vec![heading, paragraph("Nothing special")]), vec![true, false]);
    }

    #[rstest]
    #[case("In conclusion, apply early.")]
    #[case("In Summary: three things matter")]
    #[case("To conclude, keep your grades up")]
    #[case("Start your journey with a plan")]
    #[case("Transform your essay with feedback")]
    fn keyword_blocks_are_callouts(#[case] text: &str) {
        assert_eq!(flags(vec![paragraph("Intro text"), paragraph(text)]), vec![true, true]);
    }

    #[test]
    fn keywords_in_emphasis_still_count() {
        let block = Block::new(BlockKind::Paragraph {
            lines: vec![TextLine {
                spans: vec![Span::bold("In summary"), Span::plain(", be early")],
                is_step: false,
            }],
        });
        assert_eq!(flags(vec![paragraph("Intro text"), block]), vec![true, true]);
    }

    #[test]
    fn empty_input_stays_empty() {
        assert!(flag_callouts(vec![]).is_empty());
    }

    #[test]
    fn follow_up_only_for_conclusion_callouts() {
        let blocks = flag_callouts(vec![
            paragraph("Opening paragraph"),
            paragraph("In conclusion, apply early"),
            paragraph("In summary, apply early"),
        ]);
        let follow: Vec<bool> = blocks.iter().map(wants_follow_up).collect();
        assert_eq!(follow, vec![false, true, false]);

        // Unflagged blocks never get the follow-up, whatever their text.
        assert!(!wants_follow_up(&paragraph("conclusion")));
    }
}
