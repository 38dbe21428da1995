//! Article mode: every block becomes a node carrying its visual treatment.

use serde::Serialize;

use crate::parsing::{
    ClassificationResult,
    blocks::{Block, BlockKind},
    callout::{FOLLOW_UP, wants_follow_up},
};

/// Box around a block.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Container {
    Plain,
    /// Highlighted box with a left accent; `icon` only for multi-line blocks.
    Callout { icon: bool },
}

/// Glyph placed before each list item.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Marker {
    None,
    Bullet,
    Document,
    Arrow,
    Number,
}

impl Marker {
    /// Visible glyph, if the marker has one. Numbers come from the items.
    pub fn glyph(self) -> Option<&'static str> {
        match self {
            Marker::Bullet => Some("•"),
            Marker::Document => Some("📄"),
            Marker::Arrow => Some("→"),
            Marker::None | Marker::Number => None,
        }
    }
}

/// How a block is drawn, derived from its kind and callout flag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Treatment {
    pub container: Container,
    pub marker: Marker,
    /// Font weight for headings; deeper levels get less emphasis.
    pub weight: Option<u16>,
}

impl Treatment {
    pub fn for_block(block: &Block) -> Self {
        let container = if block.is_callout {
            Container::Callout {
                icon: block.line_count() > 1,
            }
        } else {
            Container::Plain
        };
        let (marker, weight) = match &block.kind {
            BlockKind::Heading { level, .. } => (Marker::None, Some(heading_weight(*level))),
            BlockKind::Paragraph { .. } => (Marker::None, None),
            BlockKind::BulletList { .. } | BlockKind::GroupedList { .. } => (Marker::Bullet, None),
            BlockKind::NumberedList { .. } => (Marker::Number, None),
            BlockKind::StepList { .. } => (Marker::Arrow, None),
            BlockKind::DocumentList { .. } => (Marker::Document, None),
        };
        Self {
            container,
            marker,
            weight,
        }
    }
}

fn heading_weight(level: u8) -> u16 {
    match level {
        1 => 800,
        2 => 700,
        _ => 600,
    }
}

/// One render-ready entry of an article.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "node", rename_all = "snake_case")]
pub enum ArticleNode {
    Block { block: Block, treatment: Treatment },
    /// The fixed call-to-action shown after a conclusion callout.
    FollowUp { text: &'static str },
}

/// A whole document ready for a presentation layer.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Article {
    pub nodes: Vec<ArticleNode>,
}

impl Article {
    /// Iterates the block nodes, skipping follow-ups.
    pub fn blocks(&self) -> impl Iterator<Item = &Block> {
        self.nodes.iter().filter_map(|n| match n {
            ArticleNode::Block { block, .. } => Some(block),
            ArticleNode::FollowUp { .. } => None,
        })
    }
}

/// Maps classified blocks to article nodes, in order.
///
/// An empty classification gives an empty article.
pub fn render_article(result: ClassificationResult) -> Article {
    let mut nodes = Vec::with_capacity(result.blocks.len());
    for block in result.blocks {
        let follow_up = wants_follow_up(&block);
        let treatment = Treatment::for_block(&block);
        nodes.push(ArticleNode::Block { block, treatment });
        if follow_up {
            nodes.push(ArticleNode::FollowUp { text: FOLLOW_UP });
        }
    }
    Article { nodes }
}
