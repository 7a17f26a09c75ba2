pub mod parsing;

// Re-export key types for easier usage
pub use parsing::{
    ParsedDoc,
    blocks::{Block, ListBlock, ListItemBlock, ListKind, OrderedDelimiter, kinds::FenceKind},
    context::CancelToken,
    options::{BlankLinePolicy, OptionsError, ParseOptions},
    parse_document, parse_document_with_cancel,
    render::{outline, to_markdown},
};
