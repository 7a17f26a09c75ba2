use crate::parsing::{
    ParsedDoc,
    blocks::{Block, ListBlock},
};

/// Validates parser output invariants.
///
/// Asserts that:
/// - The consumed length is within the input
/// - Every list has at least one item
/// - A list has a start ordinal exactly when it is ordered
///
/// # Panics
/// Panics with a descriptive message if any invariant is violated.
pub fn check(text: &str, doc: &ParsedDoc) {
    assert!(
        doc.consumed <= text.len(),
        "consumed {} bytes of a {} byte input",
        doc.consumed,
        text.len()
    );
    check_blocks(&doc.blocks);
}

fn check_blocks(blocks: &[Block]) {
    for block in blocks {
        if let Block::List(list) = block {
            check_list(list);
        }
    }
}

fn check_list(list: &ListBlock) {
    assert!(!list.items.is_empty(), "empty list: {list:?}");
    assert_eq!(
        list.kind.is_ordered(),
        list.start.is_some(),
        "start ordinal does not match list kind: {:?} start={:?}",
        list.kind,
        list.start
    );
    for item in &list.items {
        check_blocks(&item.blocks);
    }
}
