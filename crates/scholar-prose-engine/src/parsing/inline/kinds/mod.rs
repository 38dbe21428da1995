//! # Inline Kinds
//!
//! Inline-specific types that own their syntax delimiters.
//!
//! ## Types
//!
//! - **`Strong`**: `DELIM = b"**"` - bold run, checked before italic
//! - **`Emph`**: `DELIM = b'*'` - italic run
//!
//! ## Design Principle
//!
//! All delimiter constants live here, not scattered in parser code.
//! The parser calls these constants; it never hardcodes `**` or `*`.

pub mod emphasis;

pub use emphasis::{Emph, Strong};
