//! # Emphasis Inlining
//!
//! Cursor-based scan that turns `**bold**` and `*italic*` delimiter pairs into
//! [`Span`]s. Runs on every textual field of every block kind (headers, list
//! items, group titles, paragraph lines), independent of the block's kind.
//!
//! ## Modules
//!
//! - **`types`**: `Span` and `Emphasis`
//! - **`kinds`**: Delimiter owners (`Strong`, `Emph`)
//! - **`cursor`**: `Cursor` for byte-by-byte scanning
//! - **`parser`**: `parse_inline()` entry point with `try_parse_*` helpers
//!
//! ## Failure Mode
//!
//! There is none: unmatched delimiters are literal text.

pub mod cursor;
pub mod kinds;
pub mod parser;
pub mod types;

pub use parser::parse_inline;
pub use types::{Emphasis, Span, spans_text};
