//! # Snapshot Testing Support
//!
//! Utilities for testing the pipeline via snapshot assertions and invariant
//! checks.
//!
//! ## Modules
//!
//! - **`outline`**: Renders classified blocks as a stable indented text dump,
//!   compared with `insta::assert_snapshot!`
//! - **`invariants`**: Runtime checks for pipeline correctness (text coverage
//!   and order, first-block callout, no empty blocks)
//!
//! ## Testing Strategy
//!
//! Behaviour on real-world prose is pinned by outline snapshots rather than a
//! formal grammar. A snapshot shows each block's kind, callout flag and every
//! textual field with its emphasis.

pub mod invariants;
pub mod outline;

pub use invariants::check as invariants;
pub use outline::outline;
