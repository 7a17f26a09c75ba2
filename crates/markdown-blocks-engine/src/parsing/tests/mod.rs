//! Whole-document tests for the parsing module.
//!
//! Fixture snapshots live in the crate's `tests/` directory. These tests cover
//! the documented list behaviors end to end, plus property tests for nesting
//! depth and re-serialization.

use pretty_assertions::assert_eq;
use proptest::prelude::*;

use crate::parsing::{
    ParsedDoc,
    blocks::{
        Block, ListBlock, ListKind, OrderedDelimiter,
        test_support::{bullets, item, ordered, para},
    },
    context::CancelToken,
    options::{BlankLinePolicy, ParseOptions},
    parse_document, parse_document_with_cancel,
    render::to_markdown,
    snapshot::{self, max_list_depth, shape},
};

fn parse(text: &str) -> ParsedDoc {
    let doc = parse_document(text, &ParseOptions::default());
    snapshot::invariants(text, &doc);
    doc
}

#[test]
fn nested_items_attach_to_their_parent() {
    let doc = parse("- a\n  - b\n  - c\n- d\n");
    assert_eq!(
        doc.blocks,
        vec![Block::List(bullets(vec![
            item(vec![
                para("a"),
                Block::List(bullets(vec![item(vec![para("b")]), item(vec![para("c")])])),
            ]),
            item(vec![para("d")]),
        ]))]
    );
}

#[test]
fn ordered_list_keeps_document_order() {
    let doc = parse("1. x\n5. y\n");
    assert_eq!(
        doc.blocks,
        vec![Block::List(ordered(
            1,
            vec![item(vec![para("x")]), item(vec![para("y")])]
        ))]
    );
}

#[test]
fn plain_text_is_a_paragraph() {
    let doc = parse("plain text\n");
    assert_eq!(doc.blocks, vec![para("plain text")]);
    assert_eq!(doc.consumed, 11);
}

#[test]
fn one_blank_line_does_not_split_a_list() {
    let doc = parse("- a\n\n- b\n");
    assert_eq!(doc.blocks.len(), 1);
    assert_eq!(doc.blocks[0].as_list().map(|l| l.items.len()), Some(2));
}

#[test]
fn two_blank_lines_and_plain_text_close_a_list() {
    let doc = parse("- a\n\n\nafter\n");
    assert_eq!(
        doc.blocks,
        vec![Block::List(bullets(vec![item(vec![para("a")])])), para("after")]
    );
}

#[test]
fn kind_switch_gives_sibling_lists() {
    let doc = parse("- item\n1. item\n");
    assert_eq!(
        doc.blocks,
        vec![
            Block::List(bullets(vec![item(vec![para("item")])])),
            Block::List(ordered(1, vec![item(vec![para("item")])])),
        ]
    );

    let doc = parse("1. a\n2) b\n");
    let kinds: Vec<_> = doc
        .blocks
        .iter()
        .filter_map(Block::as_list)
        .map(|l| l.kind)
        .collect();
    assert_eq!(
        kinds,
        vec![
            ListKind::Ordered(OrderedDelimiter::Period),
            ListKind::Ordered(OrderedDelimiter::Paren),
        ]
    );
}

#[test]
fn terminate_policy_splits_at_blank_lines() {
    let opts = ParseOptions {
        blank_lines: BlankLinePolicy::Terminate,
        ..ParseOptions::default()
    };
    let doc = parse_document("- a\n\n- b\n", &opts);
    assert_eq!(
        doc.blocks,
        vec![
            Block::List(bullets(vec![item(vec![para("a")])])),
            Block::List(bullets(vec![item(vec![para("b")])])),
        ]
    );
}

#[test]
fn item_holds_mixed_blocks() {
    let doc = parse("- # Title\n\n  ```sh\n  ls\n  ```\n\n  ***\n");
    let list = doc.blocks[0].as_list().unwrap();
    assert_eq!(
        list.items[0].blocks,
        vec![
            Block::Heading {
                level: 1,
                text: "Title".into()
            },
            Block::FencedCode {
                kind: crate::parsing::blocks::kinds::FenceKind::Backticks,
                info: "sh".into(),
                code: "ls\n".into(),
            },
            Block::ThematicBreak,
        ]
    );
}

fn nested_bullets(levels: usize) -> String {
    (0..levels)
        .map(|n| format!("{}- level {n}\n", " ".repeat(n * 2)))
        .collect()
}

#[test]
fn depth_past_bound_becomes_content() {
    let opts = ParseOptions {
        max_depth: 8,
        ..ParseOptions::default()
    };
    let doc = parse_document(&nested_bullets(9), &opts);
    assert_eq!(max_list_depth(&doc.blocks), 8);

    // The ninth marker stays in the deepest item's text.
    assert_eq!(deepest_item(&doc.blocks), [para("level 7\n- level 8")]);
}

/// Blocks of the last item of the most deeply nested list.
fn deepest_item(blocks: &[Block]) -> &[Block] {
    match blocks.iter().rev().find_map(Block::as_list) {
        Some(list) => list
            .items
            .last()
            .map_or(blocks, |item| deepest_item(&item.blocks)),
        None => blocks,
    }
}

#[test]
fn pathological_depth_does_not_overflow() {
    let text = nested_bullets(300);
    let doc = parse(&text);
    assert_eq!(max_list_depth(&doc.blocks), ParseOptions::default().max_depth);
    assert_eq!(doc.consumed, text.len());
}

#[test]
fn cancelled_parse_yields_nothing() {
    let token = CancelToken::new();
    token.cancel();
    let doc = parse_document_with_cancel("- a\n\ntext\n", &ParseOptions::default(), &token);
    assert!(doc.blocks.is_empty());
    assert_eq!(doc.consumed, 0);
}

#[test]
fn documents_parse_independently_across_threads() {
    fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<ParseOptions>();
    assert_send_sync::<CancelToken>();
    assert_send_sync::<ParsedDoc>();

    let text = "- a\n  1. b\n  2. c\n- d\n\n```\ncode\n```\n";
    let expected = parse(text);
    let handles: Vec<_> = (0..4)
        .map(|_| std::thread::spawn(move || parse_document(text, &ParseOptions::default())))
        .collect();
    for handle in handles {
        assert_eq!(handle.join().unwrap(), expected);
    }
}

#[test]
fn empty_document() {
    let doc = parse("");
    assert!(doc.blocks.is_empty());
    assert_eq!(doc.consumed, 0);
}

#[test]
fn blank_lines_only() {
    let doc = parse("\n\n\n");
    assert!(doc.blocks.is_empty());
    assert_eq!(doc.consumed, 3);
}

// Property tests

fn kind_strategy() -> impl Strategy<Value = ListKind> {
    prop_oneof![
        Just(ListKind::Unordered),
        Just(ListKind::Ordered(OrderedDelimiter::Period)),
        Just(ListKind::Ordered(OrderedDelimiter::Paren)),
    ]
}

fn list_of(kind: ListKind, items: Vec<Vec<Block>>) -> ListBlock {
    ListBlock {
        kind,
        start: kind.is_ordered().then_some(1),
        items: items.into_iter().map(item).collect(),
    }
}

/// Lists whose items hold a word and at most one nested list after it.
fn list_strategy() -> impl Strategy<Value = ListBlock> {
    let leaf = (kind_strategy(), prop::collection::vec("[a-z]{1,8}", 1..4)).prop_map(
        |(kind, words)| list_of(kind, words.iter().map(|w| vec![para(w)]).collect()),
    );
    leaf.prop_recursive(4, 48, 4, |inner| {
        (
            kind_strategy(),
            prop::collection::vec(("[a-z]{1,8}", prop::option::of(inner)), 1..4),
        )
            .prop_map(|(kind, items)| {
                let items = items
                    .into_iter()
                    .map(|(word, nested)| {
                        let mut blocks = vec![para(&word)];
                        blocks.extend(nested.map(Block::List));
                        blocks
                    })
                    .collect();
                list_of(kind, items)
            })
    })
}

fn document_strategy() -> impl Strategy<Value = Vec<Block>> {
    prop::collection::vec(list_strategy(), 1..3).prop_map(|lists| {
        let mut blocks = vec![];
        for list in lists {
            blocks.push(para("between"));
            blocks.push(Block::List(list));
        }
        blocks
    })
}

proptest! {
    #[test]
    fn depth_counts_strict_indent_increases(steps in prop::collection::vec(0usize..=3, 0..24)) {
        let mut indent = 0;
        let mut text = String::from("- first\n");
        for step in &steps {
            indent += step;
            text.push_str(&format!("{}- item\n", " ".repeat(indent)));
        }
        let increases = steps.iter().filter(|s| **s > 0).count();

        let doc = parse(&text);
        prop_assert_eq!(doc.blocks.len(), 1);
        prop_assert_eq!(max_list_depth(&doc.blocks), increases + 1);
    }

    #[test]
    fn rendering_preserves_list_shape(blocks in document_strategy()) {
        let text = to_markdown(&blocks);
        let reparsed = parse(&text);
        prop_assert_eq!(shape(&reparsed.blocks), shape(&blocks), "rendered:\n{}", text);
    }

    #[test]
    fn render_parse_is_idempotent(blocks in document_strategy()) {
        let once = parse(&to_markdown(&blocks)).blocks;
        let twice = parse(&to_markdown(&once)).blocks;
        prop_assert_eq!(once, twice);
    }

    #[test]
    fn arbitrary_input_parses_completely(text in "[-*+1.)#`~ a\t\n]{0,160}") {
        let doc = parse(&text);
        prop_assert_eq!(doc.consumed, text.len());
    }
}
