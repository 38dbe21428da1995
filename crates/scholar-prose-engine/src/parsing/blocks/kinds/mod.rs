//! # Block Kinds
//!
//! Line-level syntax owners. Each type here owns the glyphs and patterns that
//! introduce it, so the normalizer and the rule table never hardcode `#`, `-`
//! or `1.` themselves.
//!
//! ## Types
//!
//! - **`Heading`**: `#` repeated up to `MAX_LEVEL` times
//! - **`Bullet`**: `•`, `-`, `*` glyphs; `CANONICAL = '•'`
//! - **`Numbered`**: `<digits>.` prefix
//! - **`ColonHeader`**: a whole line ending in its only `:`

pub mod bullet;
pub mod colon_header;
pub mod heading;
pub mod numbered;

pub use bullet::Bullet;
pub use colon_header::ColonHeader;
pub use heading::Heading;
pub use numbered::Numbered;
