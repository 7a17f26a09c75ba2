use crate::parsing::context::ParseContext;

use super::{
    classify::Marker,
    content::OpenItem,
    types::{Block, ListBlock, ListKind},
};

/// One open list level.
///
/// The level owns the list it is building and the item currently receiving
/// content. Both move out of the stack together when the level closes.
#[derive(Debug)]
pub struct NestingLevel {
    /// Leading columns of the markers that opened this level.
    pub indent: usize,
    pub kind: ListKind,
    list: ListBlock,
    item: OpenItem,
}

impl NestingLevel {
    /// Opens a level for `marker` with `item` as its first item.
    pub fn open(marker: &Marker, item: OpenItem) -> Self {
        let start = marker.kind.is_ordered().then(|| marker.ordinal.unwrap_or(1));
        Self {
            indent: marker.indent,
            kind: marker.kind,
            list: ListBlock {
                kind: marker.kind,
                start,
                items: vec![],
            },
            item,
        }
    }

    /// True if `marker` opens a sibling item at this level rather than closing
    /// it or nesting below it.
    pub fn accepts_sibling(&self, marker: &Marker) -> bool {
        marker.indent == self.indent && marker.kind == self.kind
    }

    pub fn item(&self) -> &OpenItem {
        &self.item
    }

    pub fn item_mut(&mut self) -> &mut OpenItem {
        &mut self.item
    }

    /// Seals the open item into the list and makes `next` the open item.
    pub fn next_item(&mut self, next: OpenItem, ctx: &ParseContext<'_>) {
        let done = std::mem::replace(&mut self.item, next);
        self.list.items.push(done.finish(ctx));
    }

    /// Seals the open item and returns the finished list.
    fn finish(mut self, ctx: &ParseContext<'_>) -> ListBlock {
        self.list.items.push(self.item.finish(ctx));
        self.list
    }
}

/// Stack of open list levels, shallowest at the bottom.
///
/// # Invariants
///
/// - Level indents strictly increase from bottom to top
/// - Every level has exactly one open item
#[derive(Debug, Default)]
pub struct NestingStack {
    levels: Vec<NestingLevel>,
}

impl NestingStack {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.levels.is_empty()
    }

    /// Number of open levels.
    pub fn depth(&self) -> usize {
        self.levels.len()
    }

    /// Marker indent of the deepest open level.
    pub fn current_threshold(&self) -> Option<usize> {
        self.levels.last().map(|l| l.indent)
    }

    /// Marker indent of the shallowest open level.
    pub fn base_threshold(&self) -> Option<usize> {
        self.levels.first().map(|l| l.indent)
    }

    pub fn top(&self) -> Option<&NestingLevel> {
        self.levels.last()
    }

    pub fn top_mut(&mut self) -> Option<&mut NestingLevel> {
        self.levels.last_mut()
    }

    /// Marker indent of the level at `index` (0 is the bottom).
    pub fn indent_at(&self, index: usize) -> Option<usize> {
        self.levels.get(index).map(|l| l.indent)
    }

    pub fn base(&self) -> Option<&NestingLevel> {
        self.levels.first()
    }

    /// The list being built at the deepest level.
    pub fn top_list(&self) -> Option<&ListBlock> {
        self.levels.last().map(|l| &l.list)
    }

    /// Context for parsing content of the item open at the top level.
    pub fn top_context<'a>(&self, ctx: &ParseContext<'a>) -> ParseContext<'a> {
        ctx.nested(self.levels.len())
    }

    pub fn push(&mut self, level: NestingLevel) {
        debug_assert!(
            self.current_threshold().is_none_or(|t| t < level.indent),
            "nesting indents must strictly increase"
        );
        self.levels.push(level);
    }

    /// Index of the deepest level whose open item a non-marker line at
    /// `indent` continues: the deepest level with a marker indent below it.
    pub fn owner_of(&self, indent: usize) -> Option<usize> {
        self.levels.iter().rposition(|l| l.indent < indent)
    }

    /// Pops every level whose indent is strictly greater than `indent`.
    ///
    /// Each popped list is attached as the last block of the open item one
    /// level up. If the stack empties, the bottom list is returned instead.
    pub fn pop_to(&mut self, indent: usize, ctx: &ParseContext<'_>) -> Option<ListBlock> {
        self.pop_while(ctx, |l| l.indent > indent)
    }

    /// Pops every level whose indent is greater than or equal to `indent`.
    pub fn pop_from(&mut self, indent: usize, ctx: &ParseContext<'_>) -> Option<ListBlock> {
        self.pop_while(ctx, |l| l.indent >= indent)
    }

    /// Pops every level, returning the outermost list.
    pub fn close_all(&mut self, ctx: &ParseContext<'_>) -> Option<ListBlock> {
        self.pop_while(ctx, |_| true)
    }

    fn pop_while<F>(&mut self, ctx: &ParseContext<'_>, pred: F) -> Option<ListBlock>
    where
        F: Fn(&NestingLevel) -> bool,
    {
        while self.levels.last().is_some_and(&pred) {
            let item_ctx = self.top_context(ctx);
            let level = self.levels.pop()?;
            let indent = level.indent;
            let list = level.finish(&item_ctx);
            log::trace!(
                "closed list level at indent {indent} with {} item(s)",
                list.items.len()
            );
            match self.levels.last_mut() {
                Some(parent) => parent.item.attach(Block::List(list)),
                None => return Some(list),
            }
        }
        None
    }
}
