//! # Snapshot Testing Support
//!
//! Utilities for testing the parser via snapshot assertions and invariant checks.
//!
//! ## Modules
//!
//! - **`normalize`**: Reduces a block tree to its list `Shape` (kinds, item
//!   counts, nesting) so trees can be compared while ignoring text
//! - **`invariants`**: Runtime checks for parser correctness (lists are never
//!   empty, ordered lists carry a start, consumed length is in bounds)
//!
//! Text snapshots of whole trees use [`outline`](crate::parsing::render::outline).

pub mod invariants;
pub mod normalize;

pub use invariants::check as invariants;
pub use normalize::{Shape, max_list_depth, shape};
