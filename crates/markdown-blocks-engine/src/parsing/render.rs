//! Text output for block trees.
//!
//! [`to_markdown`] writes a tree back out as markup that parses to the same
//! list structure. [`outline`] writes a stable, indented description of the
//! tree for tests and the command line.

use std::fmt::Write;

use super::blocks::{
    Block, ListBlock, ListKind,
    kinds::{CodeFence, Heading, ListMarker},
};

/// Columns of indentation per list nesting level in [`to_markdown`] output.
pub const NESTING_UNIT: usize = 4;

const OUTLINE_UNIT: usize = 2;

/// Re-serializes `blocks` as markup.
///
/// Blocks are separated by a blank line. Every list item gets one marker.
/// Item content sits [`NESTING_UNIT`] columns in from its marker.
pub fn to_markdown(blocks: &[Block]) -> String {
    let mut out = String::new();
    for (i, block) in blocks.iter().enumerate() {
        if i > 0 {
            out.push('\n');
        }
        write_block(&mut out, block);
    }
    out
}

fn write_block(out: &mut String, block: &Block) {
    match block {
        Block::Paragraph { text } => {
            for line in text.lines() {
                out.push_str(line);
                out.push('\n');
            }
        }
        Block::Heading { level, text } => {
            out.extend(std::iter::repeat_n(Heading::PREFIX, usize::from(*level)));
            if !text.is_empty() {
                out.push(' ');
                out.push_str(text);
            }
            out.push('\n');
        }
        Block::FencedCode { kind, info, code } => {
            let delimiter = CodeFence::delimiter(*kind);
            let _ = writeln!(out, "{delimiter}{info}");
            out.push_str(code);
            if !code.is_empty() && !code.ends_with('\n') {
                out.push('\n');
            }
            out.push_str(delimiter);
            out.push('\n');
        }
        Block::ThematicBreak => out.push_str("***\n"),
        Block::List(list) => write_list(out, list),
    }
}

fn write_list(out: &mut String, list: &ListBlock) {
    let pad = " ".repeat(NESTING_UNIT);
    for (n, item) in list.items.iter().enumerate() {
        let marker = marker_for(list, n);
        let body = to_markdown(&item.blocks);

        // A nested list cannot share the marker line: its markers would
        // become siblings of later nested content.
        let inline_first = !matches!(item.blocks.first(), None | Some(Block::List(_)));
        let mut lines = body.lines();

        out.push_str(&marker);
        out.push(' ');
        if inline_first && let Some(first) = lines.next() {
            out.push_str(first);
        }
        out.push('\n');

        for line in lines {
            if !line.is_empty() {
                out.push_str(&pad);
                out.push_str(line);
            }
            out.push('\n');
        }
    }
}

fn marker_for(list: &ListBlock, n: usize) -> String {
    match list.kind {
        ListKind::Unordered => "-".to_string(),
        ListKind::Ordered(delimiter) => {
            let ordinal = list
                .start
                .unwrap_or(1)
                .saturating_add(u64::try_from(n).unwrap_or(u64::MAX));
            format!("{ordinal}{}", ListMarker::delimiter_char(delimiter))
        }
    }
}

/// Writes an indented description of `blocks`, one node per line.
///
/// ```text
/// List(Unordered)
///   Item
///     Paragraph "a"
/// ```
pub fn outline(blocks: &[Block]) -> String {
    let mut out = String::new();
    outline_into(&mut out, blocks, 0);
    out
}

fn outline_into(out: &mut String, blocks: &[Block], depth: usize) {
    let pad = " ".repeat(depth * OUTLINE_UNIT);
    for block in blocks {
        out.push_str(&pad);
        let _ = match block {
            Block::Paragraph { text } => writeln!(out, "Paragraph {text:?}"),
            Block::Heading { level, text } => writeln!(out, "Heading({level}) {text:?}"),
            Block::FencedCode { kind, info, code } => {
                writeln!(out, "FencedCode({kind:?}) info={info:?} {code:?}")
            }
            Block::ThematicBreak => writeln!(out, "ThematicBreak"),
            Block::List(list) => match (list.kind, list.start) {
                (ListKind::Ordered(delimiter), Some(start)) => {
                    writeln!(out, "List(Ordered({delimiter:?}), start={start})")
                }
                (kind, _) => writeln!(out, "List({kind:?})"),
            },
        };

        if let Block::List(list) = block {
            for item in &list.items {
                out.push_str(&pad);
                out.push_str(&" ".repeat(OUTLINE_UNIT));
                out.push_str("Item\n");
                outline_into(out, &item.blocks, depth + 2);
            }
        }
    }
}
