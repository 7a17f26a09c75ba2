//! Tree constructors for tests.

use super::{
    kinds::FenceKind,
    types::{Block, ListBlock, ListItemBlock, ListKind, OrderedDelimiter},
};

pub fn para(text: &str) -> Block {
    Block::Paragraph { text: text.into() }
}

pub fn fence(info: &str, code: &str) -> Block {
    Block::FencedCode {
        kind: FenceKind::Backticks,
        info: info.into(),
        code: code.into(),
    }
}

pub fn item(blocks: Vec<Block>) -> ListItemBlock {
    ListItemBlock { blocks }
}

pub fn bullets(items: Vec<ListItemBlock>) -> ListBlock {
    ListBlock {
        kind: ListKind::Unordered,
        start: None,
        items,
    }
}

pub fn ordered(start: u64, items: Vec<ListItemBlock>) -> ListBlock {
    ListBlock {
        kind: ListKind::Ordered(OrderedDelimiter::Period),
        start: Some(start),
        items,
    }
}
