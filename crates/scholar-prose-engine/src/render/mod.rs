//! # Rendering
//!
//! The only stage that knows about the two consumption modes. Both modes run
//! the same parsing pipeline and differ only in what they build from the
//! resulting blocks.
//!
//! ## Modules
//!
//! - **`article`**: Whole documents → `Article` nodes with visual treatments
//! - **`requirement`**: One eligibility/requirement line → `RequirementItem`
//! - **`html`**: Markup for both, with all text escaped

pub mod article;
pub mod html;
pub mod requirement;

use serde::{Deserialize, Serialize};

pub use article::{Article, ArticleNode, Container, Marker, Treatment, render_article};
pub use requirement::{
    Inset, RequirementBody, RequirementItem, render_requirement, render_requirements,
};

/// Which renderer consumes the pipeline output.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RenderMode {
    /// A full blog post or scholarship description.
    #[default]
    Article,
    /// A list where each line is one eligibility criterion or requirement.
    Requirement,
}
