//! # Block Parsing
//!
//! Line-driven block parsing with a recursive list core.
//!
//! ## Parsing Phases
//!
//! 1. **Line Classification** (`classify`): `LineScanner` turns each line into a
//!    `LineKind` holding local facts only (blank, list marker, indentation)
//!
//! 2. **Block Construction** (`builder`): `parse_blocks` walks the text, lets
//!    `BlockBuilder` open and close leaf blocks, and hands list-shaped input to
//!    the list rule (`lists::try_parse`)
//!
//! 3. **List Nesting** (`lists`): `ListBlockBuilder` keeps a `NestingStack` of
//!    open levels and collects each item's text. Closed items are parsed by
//!    calling back into `parse_blocks`
//!
//! ## Modules
//!
//! - **`types`**: Tree types (`Block`, `ListBlock`, `ListItemBlock`, `ListKind`)
//! - **`kinds`**: Block-specific syntax with owned delimiters (CodeFence, Heading, ListMarker, ...)
//! - **`classify`**: `LineScanner` produces `LineKind` for each line
//! - **`containers`**: `NestingStack` of open list levels
//! - **`content`**: `ItemAccumulator` and `OpenItem` for item text
//! - **`open`**: `try_open_leaf` dispatch for single-line openers
//! - **`lists`**: `ListBlockBuilder` state machine and the `try_parse` rule
//! - **`builder`**: `BlockBuilder` and the `parse_blocks` entry point
//!
//! ## Key Invariants
//!
//! - Nesting indents strictly increase down the stack
//! - Nesting depth is bounded by `ParseOptions::max_depth` across recursion
//! - Fenced code blocks are raw zones: no block parsing inside, even in items
//! - A list is never empty

pub mod builder;
pub mod classify;
pub mod containers;
pub mod content;
pub mod kinds;
pub mod lists;
pub mod open;
pub mod types;

#[cfg(test)]
pub(crate) mod test_support;

pub use builder::{BlockBuilder, parse_blocks};
pub use classify::{LineKind, LineScanner, Marker};
pub use containers::{NestingLevel, NestingStack};
pub use content::{ItemAccumulator, OpenItem};
pub use lists::{ListBlockBuilder, try_parse};
pub use types::{Block, ListBlock, ListItemBlock, ListKind, OrderedDelimiter};
