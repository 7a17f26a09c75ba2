//! Item content accumulation.
//!
//! A list item's text arrives one line at a time, still carrying the
//! indentation that places it inside the list. [`ItemAccumulator`] strips that
//! indentation so the recursive block parse sees the item's content as if it
//! were top-level text.

use crate::parsing::{
    context::ParseContext,
    text::{leading_indent, strip_columns},
};

use super::{
    builder::parse_blocks,
    kinds::{CodeFence, FenceKind},
    types::{Block, ListItemBlock},
};

/// Indentation beyond which a line cannot open or close a fence.
const MAX_FENCE_INDENT: usize = 3;

/// Growable text buffer for the item currently being built.
///
/// # Invariants
///
/// - Every line in `buf` ends with `\n`
/// - `fence` reflects the fenced code state of `buf` as it stands
#[derive(Debug, Clone)]
pub struct ItemAccumulator {
    buf: String,
    content_column: usize,
    tab_width: usize,
    fence: Option<FenceKind>,
}

impl ItemAccumulator {
    /// Opens an item whose content begins at `content_column`, seeded with the
    /// text that followed the marker on the marker line.
    pub fn open(content_column: usize, tab_width: usize, first_line: &str) -> Self {
        let mut acc = Self {
            buf: String::new(),
            content_column,
            tab_width,
            fence: None,
        };
        acc.push_line(first_line);
        acc
    }

    pub fn content_column(&self) -> usize {
        self.content_column
    }

    /// True while the accumulated text has an unclosed fenced code block.
    pub fn in_fence(&self) -> bool {
        self.fence.is_some()
    }

    pub fn is_empty(&self) -> bool {
        self.buf.is_empty()
    }

    /// Appends a continuation line, stripping up to `content_column` columns
    /// of the list's indentation.
    pub fn append(&mut self, line: &str) {
        let stripped = strip_columns(line, self.content_column, self.tab_width);
        self.push_line(&stripped);
    }

    /// Appends a paragraph break.
    pub fn append_blank(&mut self) {
        self.buf.push('\n');
    }

    /// Returns the accumulated text and resets the buffer for more content.
    ///
    /// At most one trailing blank line is dropped.
    pub fn close(&mut self) -> String {
        if self.buf.ends_with("\n\n") {
            self.buf.pop();
        }
        self.fence = None;
        std::mem::take(&mut self.buf)
    }

    fn push_line(&mut self, line: &str) {
        self.track_fence(line);
        self.buf.push_str(line);
        self.buf.push('\n');
    }

    fn track_fence(&mut self, line: &str) {
        let (indent, offset) = leading_indent(line, self.tab_width);
        if indent > MAX_FENCE_INDENT {
            return;
        }
        let rest = &line[offset..];
        self.fence = match self.fence {
            Some(kind) if CodeFence::closes(kind, rest) => None,
            Some(kind) => Some(kind),
            None => CodeFence::sig(rest).map(CodeFence::kind),
        };
    }
}

/// An item that is still receiving content.
///
/// Text accumulates in `acc`. Blocks already produced (parsed text that came
/// before a nested list, and the nested lists themselves) sit in `blocks`.
#[derive(Debug, Clone)]
pub struct OpenItem {
    acc: ItemAccumulator,
    blocks: Vec<Block>,
}

impl OpenItem {
    pub fn new(acc: ItemAccumulator) -> Self {
        Self {
            acc,
            blocks: vec![],
        }
    }

    pub fn accumulator(&self) -> &ItemAccumulator {
        &self.acc
    }

    pub fn accumulator_mut(&mut self) -> &mut ItemAccumulator {
        &mut self.acc
    }

    /// Parses the pending text into blocks while keeping the item open.
    ///
    /// `ctx` must already be nested to this item's depth.
    pub fn flush(&mut self, ctx: &ParseContext<'_>) {
        let text = self.acc.close();
        if text.trim().is_empty() {
            return;
        }
        let (blocks, _) = parse_blocks(&text, ctx);
        self.blocks.extend(blocks);
    }

    /// Appends a finished block (a closed nested list) after the content so far.
    pub fn attach(&mut self, block: Block) {
        debug_assert!(self.acc.is_empty(), "pending text must be flushed first");
        self.blocks.push(block);
    }

    /// Flushes any pending text and seals the item.
    pub fn finish(mut self, ctx: &ParseContext<'_>) -> ListItemBlock {
        self.flush(ctx);
        ListItemBlock {
            blocks: self.blocks,
        }
    }
}
