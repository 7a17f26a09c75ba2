//! List block recognition.
//!
//! [`ListBlockBuilder`] consumes lines one at a time and decides where a list
//! begins, how its levels nest and where it ends. Each item's text is handed
//! back to [`parse_blocks`](super::builder::parse_blocks) when the item closes,
//! so item content can hold any block, including further lists.

use crate::parsing::{
    context::ParseContext,
    options::BlankLinePolicy,
    text::{LineRef, lines_with_spans},
};

use super::{
    classify::{LineKind, LineScanner, Marker},
    containers::{NestingLevel, NestingStack},
    content::{ItemAccumulator, OpenItem},
    types::ListBlock,
};

/// Deepest marker indent that can open a list.
const MAX_ENTRY_INDENT: usize = 3;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum BuilderState {
    /// No list open yet.
    Idle,
    /// Accumulating the current item's text.
    InItem,
    /// Terminal: the result (if any) is ready.
    Closed,
}

/// Line-driven list state machine.
///
/// Feed lines with [`push_line`](Self::push_line) and
/// [`push_blank`](Self::push_blank) until one is rejected or input runs out,
/// then call [`finish`](Self::finish).
#[derive(Debug)]
pub struct ListBlockBuilder<'a> {
    ctx: ParseContext<'a>,
    scanner: LineScanner,
    state: BuilderState,
    stack: NestingStack,
    /// Blank lines seen since the last accepted line. They only become item
    /// content once a following line continues an item.
    pending_blanks: usize,
    consumed: usize,
    result: Option<ListBlock>,
}

impl<'a> ListBlockBuilder<'a> {
    pub fn new(ctx: &ParseContext<'a>) -> Self {
        Self {
            ctx: *ctx,
            scanner: ctx.scanner(),
            state: BuilderState::Idle,
            stack: NestingStack::new(),
            pending_blanks: 0,
            consumed: 0,
            result: None,
        }
    }

    pub fn is_closed(&self) -> bool {
        self.state == BuilderState::Closed
    }

    /// Bytes taken by the list so far.
    pub fn consumed(&self) -> usize {
        self.consumed
    }

    /// Feeds a non-blank line. Returns `false` if the line is not part of the
    /// list; the builder is closed from then on and the line is left for the
    /// next block rule.
    pub fn push_line(&mut self, line: &LineRef<'_>) -> bool {
        let kind = self.scanner.classify(line.text);
        let accepted = match self.state {
            BuilderState::Idle => self.enter(line.text, kind),
            BuilderState::InItem => self.place(line.text, kind),
            BuilderState::Closed => false,
        };

        if accepted {
            self.consumed = line.span.end;
            self.pending_blanks = 0;
        } else {
            self.close();
        }
        accepted
    }

    /// Feeds a blank line. `next` yields the text of the next non-blank line,
    /// if any; it is only called when the blank starts a run.
    pub fn push_blank<'t, F>(&mut self, next: F) -> bool
    where
        F: FnOnce() -> Option<&'t str>,
    {
        if self.state != BuilderState::InItem {
            self.close();
            return false;
        }
        if self.pending_blanks == 0 {
            let next = next().map(|text| self.scanner.classify(text));
            if !self.blank_continues(next) {
                log::trace!("blank line ends list");
                self.close();
                return false;
            }
        }
        self.pending_blanks += 1;
        true
    }

    /// Closes every open level and returns the list with the number of bytes
    /// it consumed, or `None` if no list was recognized.
    pub fn finish(mut self) -> Option<(ListBlock, usize)> {
        self.close();
        let list = self.result?;
        log::debug!(
            "list closed: {:?} with {} item(s), {} byte(s) consumed",
            list.kind,
            list.items.len(),
            self.consumed
        );
        Some((list, self.consumed))
    }

    fn enter(&mut self, text: &str, kind: LineKind) -> bool {
        let LineKind::Marker(marker) = kind else {
            return false;
        };
        if marker.indent > MAX_ENTRY_INDENT {
            return false;
        }
        log::trace!("list opens: {:?} at indent {}", marker.kind, marker.indent);
        let item = self.open_item(&marker, text);
        self.stack.push(NestingLevel::open(&marker, item));
        self.state = BuilderState::InItem;
        true
    }

    fn place(&mut self, text: &str, kind: LineKind) -> bool {
        if let Some(top) = self.stack.top()
            && top.item().accumulator().in_fence()
            && kind.indent() > top.indent
        {
            self.append_content(text);
            return true;
        }

        match kind {
            LineKind::Marker(marker) => self.place_marker(&marker, text),
            LineKind::Indented { indent } => self.continue_item(indent, text),
            LineKind::Plain | LineKind::Blank => false,
        }
    }

    fn place_marker(&mut self, marker: &Marker, text: &str) -> bool {
        loop {
            let Some(top) = self.stack.top() else {
                return false;
            };

            if marker.indent > top.indent {
                if self.ctx.depth_exhausted(self.stack.depth()) {
                    log::debug!(
                        "nesting bound {} reached, marker kept as item content",
                        self.ctx.options.max_depth
                    );
                    self.append_content(text);
                } else {
                    self.nest(marker, text);
                }
                return true;
            }

            if top.accepts_sibling(marker) {
                self.sibling(marker, text);
                return true;
            }

            // Dedent, or a different kind at the same indent: close levels and
            // look at the line again against what remains.
            let root = if marker.indent == top.indent {
                log::trace!("list kind changes at indent {}", marker.indent);
                self.stack.pop_from(marker.indent, &self.ctx)
            } else {
                log::trace!("dedent to indent {}", marker.indent);
                self.stack.pop_to(marker.indent, &self.ctx)
            };
            if let Some(list) = root {
                self.result = Some(list);
                return false;
            }
        }
    }

    fn continue_item(&mut self, indent: usize, text: &str) -> bool {
        let Some(owner) = self.stack.owner_of(indent) else {
            return false;
        };
        if owner + 1 < self.stack.depth()
            && let Some(owner_indent) = self.stack.indent_at(owner)
        {
            log::trace!("continuation at indent {indent} closes nested levels");
            self.stack.pop_to(owner_indent, &self.ctx);
        }
        self.append_content(text);
        true
    }

    fn nest(&mut self, marker: &Marker, text: &str) {
        log::trace!("nested {:?} at indent {}", marker.kind, marker.indent);
        let ctx = self.stack.top_context(&self.ctx);
        if let Some(top) = self.stack.top_mut() {
            top.item_mut().flush(&ctx);
        }
        let item = self.open_item(marker, text);
        self.stack.push(NestingLevel::open(marker, item));
    }

    fn sibling(&mut self, marker: &Marker, text: &str) {
        log::trace!("sibling item at indent {}", marker.indent);
        let ctx = self.stack.top_context(&self.ctx);
        let item = self.open_item(marker, text);
        if let Some(top) = self.stack.top_mut() {
            top.next_item(item, &ctx);
        }
    }

    /// Appends `text` to the item open at the top level, after any blank
    /// lines that preceded it.
    fn append_content(&mut self, text: &str) {
        let blanks = self.pending_blanks;
        if let Some(top) = self.stack.top_mut() {
            let acc = top.item_mut().accumulator_mut();
            for _ in 0..blanks {
                acc.append_blank();
            }
            acc.append(text);
        }
    }

    fn open_item(&self, marker: &Marker, text: &str) -> OpenItem {
        OpenItem::new(ItemAccumulator::open(
            marker.content_column,
            self.scanner.tab_width(),
            &text[marker.content_offset..],
        ))
    }

    /// The single decision point for blank lines inside a list.
    ///
    /// An open fence keeps the list going whenever the following line could
    /// still belong to it, whatever the policy.
    fn blank_continues(&self, next: Option<LineKind>) -> bool {
        let in_fence = self
            .stack
            .top()
            .is_some_and(|top| top.item().accumulator().in_fence());
        match self.ctx.options.blank_lines {
            BlankLinePolicy::Terminate if !in_fence => false,
            BlankLinePolicy::Terminate | BlankLinePolicy::LookAhead => self.continues_list(next),
        }
    }

    /// True if `next` would be taken by the list: a marker or indented line
    /// that the outermost level still owns.
    fn continues_list(&self, next: Option<LineKind>) -> bool {
        let Some(base) = self.stack.base() else {
            return false;
        };
        match next {
            Some(LineKind::Marker(marker)) => {
                marker.indent > base.indent || base.accepts_sibling(&marker)
            }
            Some(LineKind::Indented { indent }) => indent > base.indent,
            Some(LineKind::Plain | LineKind::Blank) | None => false,
        }
    }

    fn close(&mut self) {
        if self.state == BuilderState::Closed {
            return;
        }
        if let Some(list) = self.stack.close_all(&self.ctx) {
            self.result = Some(list);
        }
        self.state = BuilderState::Closed;
    }
}

/// List block rule.
///
/// Returns the list starting at the first line of `text` and the number of
/// bytes it consumed, or `None` (consuming nothing) if `text` does not start
/// with a list marker.
pub fn try_parse(text: &str, ctx: &ParseContext<'_>) -> Option<(ListBlock, usize)> {
    if ctx.is_cancelled() || ctx.depth_exhausted(0) {
        return None;
    }

    let mut builder = ListBlockBuilder::new(ctx);
    let mut lines = lines_with_spans(text);
    while let Some(line) = lines.next() {
        let accepted = if line.is_blank() {
            let mut ahead = lines.clone();
            builder.push_blank(move || ahead.find(|l| !l.is_blank()).map(|l| l.text))
        } else {
            builder.push_line(&line)
        };
        if !accepted {
            break;
        }
    }
    builder.finish()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parsing::{
        blocks::{
            test_support::{bullets, fence, item, ordered, para},
            types::{Block, ListItemBlock, ListKind, OrderedDelimiter},
        },
        context::CancelToken,
        options::ParseOptions,
    };
    use pretty_assertions::assert_eq;

    fn parse(text: &str) -> Option<(ListBlock, usize)> {
        let opts = ParseOptions::default();
        try_parse(text, &ParseContext::new(&opts))
    }

    fn parse_with(text: &str, opts: &ParseOptions) -> Option<(ListBlock, usize)> {
        try_parse(text, &ParseContext::new(opts))
    }

    #[test]
    fn nested_bullets() {
        let text = "- a\n  - b\n  - c\n- d\n";
        let (list, consumed) = parse(text).unwrap();
        assert_eq!(consumed, text.len());
        assert_eq!(
            list,
            bullets(vec![
                item(vec![
                    para("a"),
                    Block::List(bullets(vec![item(vec![para("b")]), item(vec![para("c")])])),
                ]),
                item(vec![para("d")]),
            ])
        );
    }

    #[test]
    fn ordered_list_starts_at_first_ordinal() {
        let (list, _) = parse("1. x\n2. y\n").unwrap();
        assert_eq!(
            list,
            ordered(1, vec![item(vec![para("x")]), item(vec![para("y")])])
        );
    }

    #[test]
    fn ordinals_need_not_be_consecutive() {
        let (list, _) = parse("1. x\n5. y\n").unwrap();
        assert_eq!(list.items.len(), 2);
        assert_eq!(list.items[1].blocks, vec![para("y")]);
    }

    #[test]
    fn overflowing_ordinal_starts_at_one() {
        let (list, _) = parse("99999999999999999999999. big\n").unwrap();
        assert_eq!(list.start, Some(1));
        assert_eq!(list.items[0].blocks, vec![para("big")]);
    }

    #[test]
    fn plain_text_is_not_a_list() {
        assert_eq!(parse("plain text\n"), None);
    }

    #[test]
    fn deeply_indented_marker_is_not_a_list() {
        assert_eq!(parse("    - code\n"), None);
        assert!(parse("   - a\n").is_some());
    }

    #[test]
    fn single_blank_between_items_keeps_one_list() {
        let text = "- a\n\n- b\n";
        let (list, consumed) = parse(text).unwrap();
        assert_eq!(consumed, text.len());
        assert_eq!(list.items.len(), 2);
    }

    #[test]
    fn two_blanks_then_plain_text_close_the_list() {
        let (list, consumed) = parse("- a\n- b\n\n\nafter\n").unwrap();
        assert_eq!(list.items.len(), 2);
        assert_eq!(consumed, "- a\n- b\n".len());
    }

    #[test]
    fn trailing_blank_is_not_consumed() {
        let (_, consumed) = parse("- a\n\n").unwrap();
        assert_eq!(consumed, 4);
    }

    #[test]
    fn kind_switch_ends_the_list() {
        let (list, consumed) = parse("- item\n1. item\n").unwrap();
        assert_eq!(list.kind, ListKind::Unordered);
        assert_eq!(consumed, "- item\n".len());

        let (list, consumed) = parse("1. a\n1) b\n").unwrap();
        assert_eq!(list.kind, ListKind::Ordered(OrderedDelimiter::Period));
        assert_eq!(consumed, "1. a\n".len());
    }

    #[test]
    fn bullet_symbols_share_a_list() {
        let (list, _) = parse("- a\n* b\n+ c\n").unwrap();
        assert_eq!(list.items.len(), 3);
    }

    #[test]
    fn kind_switch_inside_nested_level_gives_two_lists() {
        let (list, _) = parse("- a\n  - b\n  1. c\n").unwrap();
        assert_eq!(
            list.items[0].blocks,
            vec![
                para("a"),
                Block::List(bullets(vec![item(vec![para("b")])])),
                Block::List(ordered(1, vec![item(vec![para("c")])])),
            ]
        );
    }

    #[test]
    fn paragraph_break_inside_item() {
        let (list, _) = parse("- a\n\n  more\n").unwrap();
        assert_eq!(list.items[0].blocks, vec![para("a"), para("more")]);
    }

    #[test]
    fn dedented_continuation_returns_to_parent_item() {
        let (list, _) = parse("- a\n  - b\n  c\n").unwrap();
        assert_eq!(
            list.items[0].blocks,
            vec![
                para("a"),
                Block::List(bullets(vec![item(vec![para("b")])])),
                para("c"),
            ]
        );
    }

    #[test]
    fn plain_line_after_nesting_ends_everything() {
        let text = "- a\n  - b\nplain\n";
        let (list, consumed) = parse(text).unwrap();
        assert_eq!(consumed, "- a\n  - b\n".len());
        assert_eq!(list.items.len(), 1);
    }

    #[test]
    fn fence_hides_marker_lines() {
        let (list, _) = parse("- ```\n  - not an item\n\n  ```\n- b\n").unwrap();
        assert_eq!(
            list,
            bullets(vec![
                item(vec![fence("", "- not an item\n\n")]),
                item(vec![para("b")]),
            ])
        );
    }

    #[test]
    fn empty_item() {
        let (list, _) = parse("- \n- b\n").unwrap();
        assert_eq!(list.items[0], ListItemBlock::default());
    }

    #[test]
    fn terminate_policy_ends_at_blank() {
        let opts = ParseOptions {
            blank_lines: BlankLinePolicy::Terminate,
            ..ParseOptions::default()
        };
        let (list, consumed) = parse_with("- a\n\n- b\n", &opts).unwrap();
        assert_eq!(list.items.len(), 1);
        assert_eq!(consumed, 4);
    }

    #[test]
    fn depth_bound_keeps_extra_marker_as_content() {
        let opts = ParseOptions {
            max_depth: 2,
            ..ParseOptions::default()
        };
        let (list, _) = parse_with("- a\n  - b\n    - c\n", &opts).unwrap();
        assert_eq!(
            list,
            bullets(vec![item(vec![
                para("a"),
                Block::List(bullets(vec![item(vec![para("b\n- c")])])),
            ])])
        );
    }

    #[test]
    fn no_match_at_depth_bound() {
        let opts = ParseOptions::default();
        let ctx = ParseContext::new(&opts).nested(opts.max_depth);
        assert_eq!(try_parse("- a\n", &ctx), None);
    }

    #[test]
    fn no_match_when_cancelled() {
        let opts = ParseOptions::default();
        let token = CancelToken::new();
        token.cancel();
        let ctx = ParseContext::new(&opts).with_cancel(&token);
        assert_eq!(try_parse("- a\n", &ctx), None);
    }

    #[test]
    fn rejected_line_closes_builder() {
        let opts = ParseOptions::default();
        let ctx = ParseContext::new(&opts);
        let mut builder = ListBlockBuilder::new(&ctx);
        let mut lines = lines_with_spans("- a\nplain\n- b\n");
        assert!(builder.push_line(&lines.next().unwrap()));
        assert!(!builder.push_line(&lines.next().unwrap()));
        assert!(builder.is_closed());
        assert!(!builder.push_line(&lines.next().unwrap()));
        assert_eq!(builder.consumed(), 4);
        assert_eq!(builder.finish().unwrap().0.items.len(), 1);
    }
}
