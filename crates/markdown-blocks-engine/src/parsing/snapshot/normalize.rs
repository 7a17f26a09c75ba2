use serde::Serialize;

use crate::parsing::blocks::{Block, ListKind};

/// The list structure of a block tree with all text dropped.
///
/// Two trees with equal shapes have the same list kinds, the same item count
/// at every level and the same nesting.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Shape {
    pub kind: ListKind,
    /// Nested list shapes of each item, in order.
    pub items: Vec<Vec<Shape>>,
}

/// Shapes of the lists in `blocks`, in document order.
pub fn shape(blocks: &[Block]) -> Vec<Shape> {
    blocks
        .iter()
        .filter_map(Block::as_list)
        .map(|list| Shape {
            kind: list.kind,
            items: list.items.iter().map(|item| shape(&item.blocks)).collect(),
        })
        .collect()
}

/// Deepest list nesting in `blocks` (0 when there are no lists).
pub fn max_list_depth(blocks: &[Block]) -> usize {
    blocks
        .iter()
        .filter_map(Block::as_list)
        .map(|list| {
            1 + list
                .items
                .iter()
                .map(|item| max_list_depth(&item.blocks))
                .max()
                .unwrap_or(0)
        })
        .max()
        .unwrap_or(0)
}
