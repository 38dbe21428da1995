//! # Block Classification
//!
//! Turns the normalized lines of one candidate into exactly one [`Block`].
//!
//! ## Modules
//!
//! - **`types`**: Output types (`Block`, `BlockKind`, `NumberedItem`, `Group`, `TextLine`)
//! - **`kinds`**: Line-level syntax owners (Heading, Bullet, Numbered, ColonHeader)
//! - **`fold`**: Single-pass folds for grouped and numbered lists, plus title splitting
//! - **`rules`**: The ordered rule table and `classify()`
//!
//! ## Rule Order
//!
//! heading, colon-header list, grouped list, numbered list, step list,
//! bullet list, paragraph. The first matching rule wins; there is no
//! backtracking.
//!
//! ## Key Invariants
//!
//! - Every candidate yields one block, never zero and never several
//! - Item order always follows source line order

pub mod fold;
pub mod kinds;
pub mod rules;
pub mod types;

pub use rules::classify;
pub use types::{Block, BlockKind, Group, NumberedItem, TextLine};
