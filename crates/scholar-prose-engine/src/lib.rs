pub mod parsing;
pub mod render;

// Re-export key types for easier usage
pub use parsing::{
    ClassificationResult,
    blocks::{Block, BlockKind, Group, NumberedItem, TextLine},
    classify_document, classify_document_with,
    inline::{Emphasis, Span, parse_inline},
    parse_blocks,
    thresholds::Thresholds,
};
pub use render::{
    Article, ArticleNode, RenderMode, RequirementBody, RequirementItem, render_article,
    render_requirement, render_requirements,
};
