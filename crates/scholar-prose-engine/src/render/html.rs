//! HTML markup for articles and requirement lists.
//!
//! Output is a fragment, not a page. Class names carry the visual treatment;
//! styling is left to the host page. All text goes through `html_escape`.

use html_escape::encode_text;

use crate::parsing::{
    blocks::{Block, BlockKind},
    inline::{Emphasis, Span},
};

use super::{
    article::{Article, ArticleNode, Container, Marker, Treatment},
    requirement::{Inset, RequirementBody, RequirementItem},
};

/// Renders an article as an `<article>` fragment, one node per line.
pub fn article_to_html(article: &Article) -> String {
    let mut out = String::from("<article class=\"prose\">\n");
    for node in &article.nodes {
        match node {
            ArticleNode::Block { block, treatment } => {
                out.push_str(&block_to_html(block, treatment));
            }
            ArticleNode::FollowUp { text } => {
                out.push_str(&format!("<p class=\"follow-up\">{}</p>", encode_text(text)));
            }
        }
        out.push('\n');
    }
    out.push_str("</article>");
    out
}

/// Renders requirement items as an ordered list with badges.
pub fn requirements_to_html(items: &[RequirementItem]) -> String {
    let mut out = String::from("<ol class=\"requirements\">\n");
    for item in items {
        let badge = format!("<span class=\"badge\">{}</span>", item.badge);
        match &item.body {
            RequirementBody::Plain { spans } => {
                out.push_str(&format!(
                    "<li class=\"requirement plain\">{badge} {}</li>",
                    spans_to_html(spans)
                ));
            }
            RequirementBody::Structured { blocks, inset } => {
                let inset_class = match inset {
                    Inset::Standard => "inset standard",
                    Inset::StepByStep => "inset step-by-step",
                };
                let inner: String = blocks
                    .iter()
                    .map(|b| block_to_html(b, &Treatment::for_block(b)))
                    .collect();
                out.push_str(&format!(
                    "<li class=\"requirement structured\">{badge}<div class=\"{inset_class}\">{inner}</div></li>"
                ));
            }
        }
        out.push('\n');
    }
    out.push_str("</ol>");
    out
}

/// Renders one block, wrapped in an `<aside>` when it is a callout.
pub fn block_to_html(block: &Block, treatment: &Treatment) -> String {
    let body = match &block.kind {
        BlockKind::Heading { level, text } => {
            let weight = treatment
                .weight
                .map(|w| format!(" style=\"font-weight: {w}\""))
                .unwrap_or_default();
            format!(
                "<h{level} class=\"heading level-{level}\"{weight}>{}</h{level}>",
                spans_to_html(text)
            )
        }
        BlockKind::Paragraph { lines } => {
            let lines: Vec<String> = lines
                .iter()
                .map(|l| {
                    let html = spans_to_html(&l.spans);
                    if l.is_step {
                        format!("<span class=\"step-line\">{html}</span>")
                    } else {
                        html
                    }
                })
                .collect();
            format!("<p>{}</p>", lines.join("<br>"))
        }
        BlockKind::BulletList { header, items } => {
            let header = header.as_deref().map(list_header).unwrap_or_default();
            format!("{header}{}", list("ul", "bullet-list", treatment.marker, items))
        }
        BlockKind::DocumentList { header, items } => {
            format!(
                "{}{}",
                list_header(header),
                list("ul", "document-list", treatment.marker, items)
            )
        }
        BlockKind::StepList { items } => list("ul", "step-list", treatment.marker, items),
        BlockKind::NumberedList { header, items } => {
            let header = header.as_deref().map(list_header).unwrap_or_default();
            let items: String = items
                .iter()
                .map(|item| {
                    let body = if item.body.is_empty() {
                        String::new()
                    } else {
                        format!(" <span class=\"item-body\">{}</span>", spans_to_html(&item.body))
                    };
                    format!(
                        "<li value=\"{}\"><span class=\"item-title\">{}</span>{body}</li>",
                        item.index,
                        spans_to_html(&item.title)
                    )
                })
                .collect();
            format!("{header}<ol class=\"numbered-list\">{items}</ol>")
        }
        BlockKind::GroupedList { groups } => {
            let groups: String = groups
                .iter()
                .map(|g| {
                    format!(
                        "<section class=\"group\"><h4 class=\"group-title\">{}</h4>{}</section>",
                        spans_to_html(&g.title),
                        list("ul", "group-items", treatment.marker, &g.items)
                    )
                })
                .collect();
            format!("<div class=\"grouped-list\">{groups}</div>")
        }
    };

    match treatment.container {
        Container::Plain => body,
        Container::Callout { icon } => {
            let icon = if icon {
                "<span class=\"callout-icon\" aria-hidden=\"true\">💡</span>"
            } else {
                ""
            };
            format!("<aside class=\"callout\">{icon}{body}</aside>")
        }
    }
}

fn list_header(spans: &[Span]) -> String {
    format!("<p class=\"list-header\">{}</p>", spans_to_html(spans))
}

fn list(tag: &str, class: &str, marker: Marker, items: &[Vec<Span>]) -> String {
    let marker = marker
        .glyph()
        .map(|g| format!("<span class=\"marker\">{g}</span> "))
        .unwrap_or_default();
    let items: String = items
        .iter()
        .map(|i| format!("<li>{marker}{}</li>", spans_to_html(i)))
        .collect();
    format!("<{tag} class=\"{class}\">{items}</{tag}>")
}

fn spans_to_html(spans: &[Span]) -> String {
    spans
        .iter()
        .map(|s| {
            let text = encode_text(&s.text);
            match s.emphasis {
                Emphasis::Plain => text.into_owned(),
                Emphasis::Bold => format!("<strong>{text}</strong>"),
                Emphasis::Italic => format!("<em>{text}</em>"),
            }
        })
        .collect()
}
