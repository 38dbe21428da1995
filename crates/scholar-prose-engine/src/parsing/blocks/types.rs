use serde::Serialize;

use crate::parsing::inline::Span;

/// One line of a paragraph, kept as a soft break when rendered.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TextLine {
    pub spans: Vec<Span>,
    /// Rendering hint: the line reads like an instruction and gets indented.
    pub is_step: bool,
}

/// An entry of a numbered list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NumberedItem {
    /// The number written in the source, not the position.
    pub index: u32,
    pub title: Vec<Span>,
    /// Empty when the item was not split.
    pub body: Vec<Span>,
}

/// A titled group of a grouped list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Group {
    pub title: Vec<Span>,
    pub items: Vec<Vec<Span>>,
}

/// The structural kind assigned to a candidate.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum BlockKind {
    Heading {
        level: u8,
        text: Vec<Span>,
    },
    Paragraph {
        lines: Vec<TextLine>,
    },
    BulletList {
        header: Option<Vec<Span>>,
        items: Vec<Vec<Span>>,
    },
    NumberedList {
        header: Option<Vec<Span>>,
        items: Vec<NumberedItem>,
    },
    GroupedList {
        groups: Vec<Group>,
    },
    StepList {
        items: Vec<Vec<Span>>,
    },
    DocumentList {
        header: Vec<Span>,
        items: Vec<Vec<Span>>,
    },
}

impl BlockKind {
    /// Short stable name, used in logs and outline dumps.
    pub fn name(&self) -> &'static str {
        match self {
            BlockKind::Heading { .. } => "heading",
            BlockKind::Paragraph { .. } => "paragraph",
            BlockKind::BulletList { .. } => "bullet-list",
            BlockKind::NumberedList { .. } => "numbered-list",
            BlockKind::GroupedList { .. } => "grouped-list",
            BlockKind::StepList { .. } => "step-list",
            BlockKind::DocumentList { .. } => "document-list",
        }
    }
}

/// The canonical output unit: one classified candidate.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Block {
    pub kind: BlockKind,
    /// Intro/summary/conclusion flag, independent of `kind`.
    pub is_callout: bool,
}

impl Block {
    pub fn new(kind: BlockKind) -> Self {
        Self {
            kind,
            is_callout: false,
        }
    }

    /// Every textual span of the block in display order.
    pub fn spans(&self) -> Vec<&Span> {
        fn push_run<'a>(out: &mut Vec<&'a Span>, run: &'a [Span]) {
            out.extend(run.iter());
        }

        let mut out = vec![];
        match &self.kind {
            BlockKind::Heading { text, .. } => push_run(&mut out, text),
            BlockKind::Paragraph { lines } => {
                for line in lines {
                    push_run(&mut out, &line.spans);
                }
            }
            BlockKind::BulletList { header, items } => {
                if let Some(header) = header {
                    push_run(&mut out, header);
                }
                for item in items {
                    push_run(&mut out, item);
                }
            }
            BlockKind::NumberedList { header, items } => {
                if let Some(header) = header {
                    push_run(&mut out, header);
                }
                for item in items {
                    push_run(&mut out, &item.title);
                    push_run(&mut out, &item.body);
                }
            }
            BlockKind::GroupedList { groups } => {
                for group in groups {
                    push_run(&mut out, &group.title);
                    for item in &group.items {
                        push_run(&mut out, item);
                    }
                }
            }
            BlockKind::StepList { items } => {
                for item in items {
                    push_run(&mut out, item);
                }
            }
            BlockKind::DocumentList { header, items } => {
                push_run(&mut out, header);
                for item in items {
                    push_run(&mut out, item);
                }
            }
        }
        out
    }

    /// Visible text of the whole block, one line per span run boundary.
    ///
    /// Each textual field (header, item, line, title, body) ends up on its own
    /// line so keyword checks never match across two fields.
    pub fn display_text(&self) -> String {
        fn join(run: &[Span]) -> String {
            run.iter().map(|s| s.text.as_str()).collect()
        }

        let fields: Vec<String> = match &self.kind {
            BlockKind::Heading { text, .. } => vec![join(text)],
            BlockKind::Paragraph { lines } => lines.iter().map(|l| join(&l.spans)).collect(),
            BlockKind::BulletList { header, items } => header
                .iter()
                .map(|h| join(h))
                .chain(items.iter().map(|i| join(i)))
                .collect(),
            BlockKind::NumberedList { header, items } => header
                .iter()
                .map(|h| join(h))
                .chain(items.iter().flat_map(|i| [join(&i.title), join(&i.body)]))
                .filter(|f| !f.is_empty())
                .collect(),
            BlockKind::GroupedList { groups } => groups
                .iter()
                .flat_map(|g| std::iter::once(join(&g.title)).chain(g.items.iter().map(|i| join(i))))
                .collect(),
            BlockKind::StepList { items } => items.iter().map(|i| join(i)).collect(),
            BlockKind::DocumentList { header, items } => std::iter::once(join(header))
                .chain(items.iter().map(|i| join(i)))
                .collect(),
        };
        fields.join("\n")
    }

    /// Number of visual lines the block occupies, used for callout icons and
    /// the step-by-step inset.
    pub fn line_count(&self) -> usize {
        match &self.kind {
            BlockKind::Heading { .. } => 1,
            BlockKind::Paragraph { lines } => lines.len(),
            BlockKind::BulletList { header, items } => usize::from(header.is_some()) + items.len(),
            BlockKind::NumberedList { header, items } => usize::from(header.is_some()) + items.len(),
            BlockKind::GroupedList { groups } => groups.iter().map(|g| 1 + g.items.len()).sum(),
            BlockKind::StepList { items } => items.len(),
            BlockKind::DocumentList { items, .. } => 1 + items.len(),
        }
    }
}
