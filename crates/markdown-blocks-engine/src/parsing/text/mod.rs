//! Line and column primitives shared by every block rule.

pub mod indent;
pub mod lines;
pub mod span;

pub use indent::{leading_indent, strip_columns};
pub use lines::{LineRef, lines_with_spans};
pub use span::Span;
