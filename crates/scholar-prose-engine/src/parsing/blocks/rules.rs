//! The classification rule table.
//!
//! Rules are `(name, predicate, constructor)` triples evaluated top to bottom;
//! the first predicate that holds picks the constructor. A candidate never
//! falls back to a lower rule after a higher one matched, even when the
//! result is degenerate (a one-item numbered list stays a numbered list).

use crate::parsing::{
    inline::{Span, parse_inline},
    normalize::{LineMarker, NormalizedLine},
    patterns::{re_document_header, re_step_keyword},
    thresholds::Thresholds,
};

use super::{
    fold::{collect_numbered, group_lines, split_title},
    kinds::Heading,
    types::{Block, BlockKind, Group, NumberedItem, TextLine},
};

/// Everything a rule may look at for one candidate.
#[derive(Debug, Clone, Copy)]
pub struct RuleInput<'a> {
    pub lines: &'a [NormalizedLine],
    pub thresholds: &'a Thresholds,
}

impl RuleInput<'_> {
    /// All line texts joined with newlines.
    fn combined_text(&self) -> String {
        self.lines
            .iter()
            .map(|l| l.text.as_str())
            .collect::<Vec<_>>()
            .join("\n")
    }
}

/// One entry of the rule table.
pub struct Rule {
    pub name: &'static str,
    pub applies: fn(&RuleInput<'_>) -> bool,
    pub build: fn(&RuleInput<'_>) -> BlockKind,
}

/// Rules in priority order. `paragraph` always applies and must stay last.
pub const RULES: &[Rule] = &[
    Rule {
        name: "heading",
        applies: is_heading,
        build: build_heading,
    },
    Rule {
        name: "colon-header-list",
        applies: is_colon_header_list,
        build: build_colon_header_list,
    },
    Rule {
        name: "grouped-list",
        applies: is_grouped_list,
        build: build_grouped_list,
    },
    Rule {
        name: "numbered-list",
        applies: is_numbered_list,
        build: build_numbered_list,
    },
    Rule {
        name: "step-list",
        applies: is_step_list,
        build: build_step_list,
    },
    Rule {
        name: "bullet-list",
        applies: is_bullet_list,
        build: build_bullet_list,
    },
    Rule {
        name: "paragraph",
        applies: always,
        build: build_paragraph,
    },
];

/// Classifies one candidate's lines into exactly one block.
///
/// `is_first` seeds the callout flag; the callout detector adds the keyword
/// based flags later.
pub fn classify(lines: &[NormalizedLine], is_first: bool, thresholds: &Thresholds) -> Block {
    let input = RuleInput { lines, thresholds };
    let kind = match RULES.iter().find(|rule| (rule.applies)(&input)) {
        Some(rule) => {
            log::debug!("classifier: {} ({} lines)", rule.name, lines.len());
            (rule.build)(&input)
        }
        None => build_paragraph(&input),
    };
    Block {
        kind,
        is_callout: is_first,
    }
}

fn inline_all<'a>(texts: impl IntoIterator<Item = &'a str>) -> Vec<Vec<Span>> {
    texts.into_iter().map(parse_inline).collect()
}

// Predicates

fn is_heading(input: &RuleInput<'_>) -> bool {
    matches!(input.lines, [only] if Heading::parse(&only.text).is_some())
}

fn is_colon_header_list(input: &RuleInput<'_>) -> bool {
    input.lines.len() > 1 && input.lines[0].marker == LineMarker::ColonHeader
}

fn is_grouped_list(input: &RuleInput<'_>) -> bool {
    group_lines(input.lines).is_some_and(|groups| groups.len() >= 2)
}

fn is_numbered_list(input: &RuleInput<'_>) -> bool {
    input.lines.iter().any(|l| l.number().is_some())
}

fn is_step_list(input: &RuleInput<'_>) -> bool {
    input.lines.len() > input.thresholds.step_min_lines
        && re_step_keyword().is_match(&input.combined_text())
}

fn is_bullet_list(input: &RuleInput<'_>) -> bool {
    input.lines.iter().any(NormalizedLine::is_bullet)
}

fn always(_: &RuleInput<'_>) -> bool {
    true
}

// Constructors

fn build_heading(input: &RuleInput<'_>) -> BlockKind {
    let line = input.lines.first().map(|l| l.text.as_str()).unwrap_or_default();
    match Heading::parse(line) {
        Some((level, text)) => BlockKind::Heading {
            level,
            text: parse_inline(text),
        },
        None => build_paragraph(input),
    }
}

fn build_colon_header_list(input: &RuleInput<'_>) -> BlockKind {
    let Some((first, rest)) = input.lines.split_first() else {
        return build_paragraph(input);
    };
    let header = parse_inline(&first.text);
    let items = inline_all(rest.iter().map(|l| l.text.as_str()));
    if re_document_header().is_match(&first.text) {
        BlockKind::DocumentList { header, items }
    } else {
        BlockKind::BulletList {
            header: Some(header),
            items,
        }
    }
}

fn build_grouped_list(input: &RuleInput<'_>) -> BlockKind {
    let groups = group_lines(input.lines)
        .unwrap_or_default()
        .into_iter()
        .map(|g| Group {
            title: parse_inline(g.title),
            items: inline_all(g.items),
        })
        .collect();
    BlockKind::GroupedList { groups }
}

fn build_numbered_list(input: &RuleInput<'_>) -> BlockKind {
    let raw = collect_numbered(input.lines);
    let header = (!raw.header.is_empty()).then(|| parse_inline(&raw.header.join(" ")));
    let items = raw
        .items
        .into_iter()
        .map(|item| {
            let (title, body) = split_title(item.text, input.thresholds);
            let body = std::iter::once(body.as_str())
                .chain(item.continuation)
                .filter(|part| !part.is_empty())
                .collect::<Vec<_>>()
                .join(" ");
            NumberedItem {
                index: item.index,
                title: parse_inline(&title),
                body: if body.is_empty() {
                    vec![]
                } else {
                    parse_inline(&body)
                },
            }
        })
        .collect();
    BlockKind::NumberedList { header, items }
}

fn build_step_list(input: &RuleInput<'_>) -> BlockKind {
    BlockKind::StepList {
        items: inline_all(input.lines.iter().map(|l| l.text.as_str())),
    }
}

fn build_bullet_list(input: &RuleInput<'_>) -> BlockKind {
    match input.lines.split_first() {
        Some((first, rest)) if !first.is_bullet() => BlockKind::BulletList {
            header: Some(parse_inline(&first.text)),
            items: inline_all(rest.iter().map(|l| l.text.as_str())),
        },
        _ => BlockKind::BulletList {
            header: None,
            items: inline_all(input.lines.iter().map(|l| l.text.as_str())),
        },
    }
}

fn build_paragraph(input: &RuleInput<'_>) -> BlockKind {
    let multi_line = input.lines.len() > 1;
    let lines = input
        .lines
        .iter()
        .map(|l| TextLine {
            spans: parse_inline(&l.text),
            is_step: multi_line && re_step_keyword().is_match(&l.text),
        })
        .collect();
    BlockKind::Paragraph { lines }
}
