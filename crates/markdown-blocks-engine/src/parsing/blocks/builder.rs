use crate::parsing::{
    context::ParseContext,
    text::{LineRef, lines_with_spans, strip_columns},
};

use super::{
    classify::LineScanner,
    kinds::{CodeFence, FenceKind, Paragraph},
    lists::try_parse,
    open::{BlockOpen, try_open_leaf},
    types::Block,
};

/// Indentation beyond which a line cannot open a leaf block.
const MAX_OPENER_INDENT: usize = 3;

#[derive(Debug, Clone)]
enum LeafState<'t> {
    None,
    Paragraph {
        lines: Vec<&'t str>,
    },
    Fence {
        kind: FenceKind,
        /// Columns of indentation on the opening fence, removed from code lines.
        indent: usize,
        info: &'t str,
        code: String,
    },
}

/// Line-at-a-time leaf block builder.
///
/// Handles paragraphs, fences, headings and thematic breaks. Lists are
/// multi-line rules driven by [`parse_blocks`], which hands finished lists in
/// through [`push_block`](Self::push_block).
pub struct BlockBuilder<'t> {
    scanner: LineScanner,
    leaf: LeafState<'t>,
    out: Vec<Block>,
}

impl<'t> BlockBuilder<'t> {
    pub fn new(scanner: LineScanner) -> Self {
        Self {
            scanner,
            leaf: LeafState::None,
            out: vec![],
        }
    }

    /// True when no leaf is open, so a multi-line rule may start here.
    ///
    /// Lists cannot interrupt a paragraph.
    pub fn accepts_block_rule(&self) -> bool {
        matches!(self.leaf, LeafState::None)
    }

    pub fn push(&mut self, line: &LineRef<'t>) {
        if self.in_fence() {
            self.consume_fence_line(line.text);
            return;
        }

        if line.is_blank() {
            self.flush_paragraph();
            return;
        }

        let (indent, offset) = self.scanner.indent_of(line.text);
        if indent <= MAX_OPENER_INDENT
            && let Some(open) = try_open_leaf(&line.text[offset..])
        {
            self.flush_paragraph();
            self.open_leaf(open, indent);
            return;
        }

        self.extend_paragraph(line.text);
    }

    /// Appends a block produced by another rule.
    pub fn push_block(&mut self, block: Block) {
        self.flush_paragraph();
        self.out.push(block);
    }

    pub fn finish(mut self) -> Vec<Block> {
        // EOF flush
        self.flush_paragraph();
        self.flush_fence();
        self.out
    }

    fn in_fence(&self) -> bool {
        matches!(self.leaf, LeafState::Fence { .. })
    }

    fn open_leaf(&mut self, open: BlockOpen<'t>, indent: usize) {
        match open {
            BlockOpen::FencedCode { kind, info } => {
                self.leaf = LeafState::Fence {
                    kind,
                    indent,
                    info,
                    code: String::new(),
                }
            }
            BlockOpen::ThematicBreak => self.out.push(Block::ThematicBreak),
            BlockOpen::Heading { level, text } => self.out.push(Block::Heading {
                level,
                text: text.to_owned(),
            }),
        }
    }

    fn consume_fence_line(&mut self, text: &'t str) {
        let tab_width = self.scanner.tab_width();
        let (indent, offset) = self.scanner.indent_of(text);
        let LeafState::Fence {
            kind,
            indent: fence_indent,
            code,
            ..
        } = &mut self.leaf
        else {
            return;
        };

        // Close if this line "looks like fence" with same sig.
        if indent <= MAX_OPENER_INDENT && CodeFence::closes(*kind, &text[offset..]) {
            self.flush_fence();
            return;
        }

        code.push_str(&strip_columns(text, *fence_indent, tab_width));
        code.push('\n');
    }

    fn extend_paragraph(&mut self, text: &'t str) {
        match &mut self.leaf {
            LeafState::Paragraph { lines } => lines.push(text),
            _ => self.leaf = LeafState::Paragraph { lines: vec![text] },
        }
    }

    fn flush_paragraph(&mut self) {
        let prev = std::mem::replace(&mut self.leaf, LeafState::None);
        if let LeafState::Paragraph { lines } = prev {
            self.out.push(Block::Paragraph {
                text: Paragraph::join(lines),
            });
        } else {
            self.leaf = prev; // put back non-paragraph leaf (e.g. fence)
        }
    }

    fn flush_fence(&mut self) {
        let prev = std::mem::replace(&mut self.leaf, LeafState::None);
        if let LeafState::Fence {
            kind, info, code, ..
        } = prev
        {
            // Unterminated fences run to the end of their text.
            self.out.push(Block::FencedCode {
                kind,
                info: info.to_owned(),
                code,
            });
        } else {
            self.leaf = prev;
        }
    }
}

/// Generic block parser entry point.
///
/// Parses `text` into blocks and returns them with the number of bytes
/// consumed. The count is shorter than `text` only when the context is
/// cancelled part way through. List items re-enter here with their own text
/// and a context nested to their depth.
pub fn parse_blocks(text: &str, ctx: &ParseContext<'_>) -> (Vec<Block>, usize) {
    let mut builder = BlockBuilder::new(ctx.scanner());
    let mut pos = 0usize;

    while pos < text.len() {
        if ctx.is_cancelled() {
            log::debug!("parse cancelled at byte {pos} of {}", text.len());
            break;
        }

        let rest = &text[pos..];
        if builder.accepts_block_rule()
            && let Some((list, used)) = try_parse(rest, ctx)
        {
            builder.push_block(Block::List(list));
            pos += used;
            continue;
        }

        let Some(line) = lines_with_spans(rest).next() else {
            break;
        };
        builder.push(&line);
        pos += line.span.end;
    }

    (builder.finish(), pos)
}
