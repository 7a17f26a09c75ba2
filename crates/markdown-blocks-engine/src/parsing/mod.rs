pub mod blocks;
pub mod context;
pub mod options;
pub mod render;
pub mod snapshot;
pub mod text;

#[cfg(test)]
mod tests;

use blocks::{Block, parse_blocks};
use context::{CancelToken, ParseContext};
use options::ParseOptions;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedDoc {
    pub blocks: Vec<Block>,
    /// Bytes of the input that were parsed. Equal to the input length unless
    /// the parse was cancelled.
    pub consumed: usize,
}

pub fn parse_document(text: &str, options: &ParseOptions) -> ParsedDoc {
    run(text, &ParseContext::new(options))
}

/// Parses `text`, stopping before the next block once `cancel` is set.
pub fn parse_document_with_cancel(
    text: &str,
    options: &ParseOptions,
    cancel: &CancelToken,
) -> ParsedDoc {
    run(text, &ParseContext::new(options).with_cancel(cancel))
}

fn run(text: &str, ctx: &ParseContext<'_>) -> ParsedDoc {
    let (blocks, consumed) = parse_blocks(text, ctx);
    log::debug!(
        "parsed {} top-level block(s) from {consumed} of {} byte(s)",
        blocks.len(),
        text.len()
    );
    ParsedDoc { blocks, consumed }
}
