//! Requirement mode: one free-text criterion → one badged list item.
//!
//! Items run through the same pipeline as articles. Only the outcome differs:
//! a lone one-line paragraph renders as a plain numbered line, anything else
//! as a structured item with its blocks in an inset panel.

use serde::Serialize;

use crate::parsing::{
    blocks::{Block, BlockKind},
    inline::{Span, parse_inline},
    parse_blocks,
    patterns::re_step_keyword,
    thresholds::Thresholds,
};

/// Visual style of a structured item's inset panel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Inset {
    Standard,
    StepByStep,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum RequirementBody {
    Plain { spans: Vec<Span> },
    Structured { blocks: Vec<Block>, inset: Inset },
}

/// One rendered requirement line.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RequirementItem {
    /// 1-based number shown in the badge.
    pub badge: usize,
    pub body: RequirementBody,
}

impl RequirementItem {
    #[must_use]
    pub fn is_structured(&self) -> bool {
        matches!(self.body, RequirementBody::Structured { .. })
    }
}

/// Renders a single requirement with the given badge number.
pub fn render_requirement(text: &str, badge: usize, thresholds: &Thresholds) -> RequirementItem {
    let mut blocks = parse_blocks(text, thresholds);
    for block in &mut blocks {
        block.is_callout = false;
    }

    let body = if blocks.is_empty() {
        // Everything was noise: still show what the author wrote.
        RequirementBody::Plain {
            spans: parse_inline(text.trim()),
        }
    } else if let Some(spans) = single_line_paragraph(&blocks) {
        RequirementBody::Plain { spans }
    } else {
        let inset = if is_step_by_step(text, &blocks, thresholds) {
            Inset::StepByStep
        } else {
            Inset::Standard
        };
        log::debug!(
            "requirement {badge}: structured, {} blocks, {inset:?}",
            blocks.len()
        );
        RequirementBody::Structured { blocks, inset }
    };
    RequirementItem { badge, body }
}

/// Renders a whole list; badges follow list position starting at 1.
pub fn render_requirements<S: AsRef<str>>(
    items: &[S],
    thresholds: &Thresholds,
) -> Vec<RequirementItem> {
    items
        .iter()
        .enumerate()
        .map(|(i, text)| render_requirement(text.as_ref(), i + 1, thresholds))
        .collect()
}

fn single_line_paragraph(blocks: &[Block]) -> Option<Vec<Span>> {
    match blocks {
        [Block {
            kind: BlockKind::Paragraph { lines },
            ..
        }] => match lines.as_slice() {
            [line] => Some(line.spans.clone()),
            _ => None,
        },
        _ => None,
    }
}

/// Keyword match on the item text and more than `step_min_lines` lines.
///
/// Lines are counted after splitting, so a one-line item cut into sentences
/// counts each sentence. Block kinds play no part.
fn is_step_by_step(text: &str, blocks: &[Block], thresholds: &Thresholds) -> bool {
    let lines: usize = blocks.iter().map(Block::line_count).sum();
    lines > thresholds.step_min_lines && re_step_keyword().is_match(text)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn render(text: &str) -> RequirementItem {
        render_requirement(text, 1, &Thresholds::default())
    }

    #[test]
    fn one_line_is_plain() {
        assert_eq!(
            render("Minimum GPA of **3.0** on a 4.0 scale"),
            RequirementItem {
                badge: 1,
                body: RequirementBody::Plain {
                    spans: vec![
                        Span::plain("Minimum GPA of "),
                        Span::bold("3.0"),
                        Span::plain(" on a 4.0 scale"),
                    ],
                },
            }
        );
    }

    #[test]
    fn short_text_stays_plain() {
        let item = render("US citizen");
        assert_eq!(
            item.body,
            RequirementBody::Plain {
                spans: vec![Span::plain("US citizen")],
            }
        );
    }

    #[test]
    fn list_is_structured_without_callouts() {
        let item = render("Required documents:\n- Transcript\n- Passport photo");
        let RequirementBody::Structured { blocks, inset } = item.body else {
            panic!("expected a structured item");
        };
        assert_eq!(inset, Inset::Standard);
        assert_eq!(blocks.len(), 1);
        assert_eq!(blocks[0].kind.name(), "document-list");
        assert!(!blocks[0].is_callout);
    }

    #[test]
    fn step_by_step_inset() {
        let item = render("Visit the portal\nCreate a profile\nUpload the essay\nWait for results");
        assert!(matches!(
            item.body,
            RequirementBody::Structured {
                inset: Inset::StepByStep,
                ..
            }
        ));
    }

    #[test]
    fn one_line_instructions_are_step_by_step() {
        let item = render("Visit the portal. Create a profile. Upload your essay. Submit by May 1.");
        let RequirementBody::Structured { blocks, inset } = item.body else {
            panic!("expected a structured item");
        };
        assert_eq!(blocks.len(), 4);
        assert_eq!(inset, Inset::StepByStep);
    }

    #[test]
    fn step_keyword_alone_is_not_step_by_step() {
        let item = render("Submit two letters\n- From a professor\n- From an employer");
        assert!(matches!(
            item.body,
            RequirementBody::Structured {
                inset: Inset::Standard,
                ..
            }
        ));
    }

    #[test]
    fn badges_follow_position() {
        let items = render_requirements(
            &["Full-time enrollment", "Essay of 500 words or more"],
            &Thresholds::default(),
        );
        let badges: Vec<usize> = items.iter().map(|i| i.badge).collect();
        assert_eq!(badges, vec![1, 2]);
        assert!(items.iter().all(|i| !i.is_structured()));
    }
}
