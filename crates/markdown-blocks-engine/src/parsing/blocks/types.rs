use serde::Serialize;

use super::kinds::FenceKind;

/// Delimiter following the digits of an ordered list marker.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum OrderedDelimiter {
    /// `1.`
    Period,
    /// `1)`
    Paren,
}

/// The kind of a list.
///
/// Two lists of different kinds never merge, even when they are contiguous and
/// equally indented. The bullet symbol (`-`, `*`, `+`) is not part of the kind.
/// The ordered delimiter is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum ListKind {
    Unordered,
    Ordered(OrderedDelimiter),
}

impl ListKind {
    pub fn is_ordered(self) -> bool {
        matches!(self, ListKind::Ordered(_))
    }
}

/// One list item: the blocks parsed from its accumulated text.
///
/// Nested lists appear here as `Block::List`, after the text that preceded
/// them in the item.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ListItemBlock {
    pub blocks: Vec<Block>,
}

/// A list at one nesting level.
///
/// # Invariants
///
/// - `items` is never empty
/// - `start` is `Some` exactly when `kind` is ordered
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ListBlock {
    pub kind: ListKind,
    /// Ordinal of the first item (ordered lists only).
    pub start: Option<u64>,
    pub items: Vec<ListItemBlock>,
}

/// A parsed block node.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Block {
    /// Default leaf block: lines no other rule claimed.
    Paragraph { text: String },
    /// ATX heading.
    Heading { level: u8, text: String },
    /// A fenced code block (``` or ~~~). Unterminated fences run to the end of
    /// their text.
    FencedCode {
        /// Whether backticks or tildes were used.
        kind: FenceKind,
        info: String,
        code: String,
    },
    ThematicBreak,
    List(ListBlock),
}

impl Block {
    pub fn as_list(&self) -> Option<&ListBlock> {
        match self {
            Block::List(list) => Some(list),
            _ => None,
        }
    }
}
