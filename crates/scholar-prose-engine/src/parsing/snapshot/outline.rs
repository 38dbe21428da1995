use crate::parsing::{
    blocks::{Block, BlockKind},
    inline::{Emphasis, Span},
};

/// Dumps blocks as indented text, one block header per block.
///
/// ```text
/// numbered-list (callout)
///   1. [Financial Stability] Working for a year...
/// ```
///
/// Emphasis is shown with its original delimiters so the dump reads like the
/// source. Blocks are separated by a single newline; there is no trailing one.
pub fn outline(blocks: &[Block]) -> String {
    blocks.iter().map(outline_block).collect::<Vec<_>>().join("\n")
}

fn outline_block(block: &Block) -> String {
    let mut head = block.kind.name().to_string();
    if let BlockKind::Heading { level, .. } = &block.kind {
        head.push_str(&format!(" h{level}"));
    }
    if block.is_callout {
        head.push_str(" (callout)");
    }

    let mut out = vec![head];
    match &block.kind {
        BlockKind::Heading { text, .. } => out.push(format!("  {}", run(text))),
        BlockKind::Paragraph { lines } => {
            for line in lines {
                let mark = if line.is_step { ">" } else { "|" };
                out.push(format!("  {mark} {}", run(&line.spans)));
            }
        }
        BlockKind::BulletList { header, items } => {
            if let Some(header) = header {
                out.push(format!("  header: {}", run(header)));
            }
            out.extend(items.iter().map(|i| format!("  - {}", run(i))));
        }
        BlockKind::NumberedList { header, items } => {
            if let Some(header) = header {
                out.push(format!("  header: {}", run(header)));
            }
            for item in items {
                let mut line = format!("  {}. [{}]", item.index, run(&item.title));
                if !item.body.is_empty() {
                    line.push(' ');
                    line.push_str(&run(&item.body));
                }
                out.push(line);
            }
        }
        BlockKind::GroupedList { groups } => {
            for group in groups {
                out.push(format!("  {}", run(&group.title)));
                out.extend(group.items.iter().map(|i| format!("    - {}", run(i))));
            }
        }
        BlockKind::StepList { items } => {
            out.extend(items.iter().map(|i| format!("  -> {}", run(i))));
        }
        BlockKind::DocumentList { header, items } => {
            out.push(format!("  header: {}", run(header)));
            out.extend(items.iter().map(|i| format!("  - {}", run(i))));
        }
    }
    out.join("\n")
}

fn run(spans: &[Span]) -> String {
    spans
        .iter()
        .map(|s| match s.emphasis {
            Emphasis::Plain => s.text.clone(),
            Emphasis::Bold => format!("**{}**", s.text),
            Emphasis::Italic => format!("*{}*", s.text),
        })
        .collect()
}
