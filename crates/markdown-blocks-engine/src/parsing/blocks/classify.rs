use crate::parsing::{options::DEFAULT_TAB_WIDTH, text::leading_indent};

use super::{
    kinds::{ListMarker, ThematicBreak},
    types::ListKind,
};

/// Whitespace after a marker that is wider than this is not part of the
/// marker: the item's content starts one column after the symbol.
const MAX_MARKER_SPACING: usize = 4;

/// A recognized list marker on a line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Marker {
    pub kind: ListKind,
    /// Ordinal for ordered markers (`None` for bullets or on overflow).
    pub ordinal: Option<u64>,
    /// Leading columns before the marker symbol.
    pub indent: usize,
    /// Column at which the item's own content begins.
    pub content_column: usize,
    /// Byte offset in the line at which the item's content begins.
    pub content_offset: usize,
}

/// Classification of a single line containing only local facts.
///
/// Whether an `Indented` line is indented *enough* depends on which list
/// levels are open. The list builder decides that, not the scanner.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineKind {
    /// Empty or whitespace only.
    Blank,
    /// Starts with a list marker after its indentation.
    Marker(Marker),
    /// Indented (at least one column) and no marker.
    Indented { indent: usize },
    /// Unindented, no marker.
    Plain,
}

impl LineKind {
    /// Leading columns of the line (0 for blank and plain lines).
    pub fn indent(&self) -> usize {
        match self {
            LineKind::Marker(m) => m.indent,
            LineKind::Indented { indent } => *indent,
            LineKind::Blank | LineKind::Plain => 0,
        }
    }
}

/// Classifies individual lines for list recognition.
///
/// Pure: the same line always yields the same [`LineKind`].
#[derive(Debug, Clone, Copy)]
pub struct LineScanner {
    tab_width: usize,
}

impl Default for LineScanner {
    fn default() -> Self {
        Self::new(DEFAULT_TAB_WIDTH)
    }
}

impl LineScanner {
    pub fn new(tab_width: usize) -> Self {
        Self {
            tab_width: tab_width.max(1),
        }
    }

    pub fn tab_width(&self) -> usize {
        self.tab_width
    }

    /// Leading columns and the byte offset where the line's text starts.
    pub fn indent_of(&self, line: &str) -> (usize, usize) {
        leading_indent(line, self.tab_width)
    }

    /// Classifies a line into a [`LineKind`].
    pub fn classify(&self, line: &str) -> LineKind {
        let (indent, offset) = self.indent_of(line);
        let rest = &line[offset..];
        if rest.is_empty() {
            return LineKind::Blank;
        }

        if let Some(marker) = self.marker(rest, indent, offset) {
            return LineKind::Marker(marker);
        }

        if indent > 0 {
            LineKind::Indented { indent }
        } else {
            LineKind::Plain
        }
    }

    fn marker(&self, rest: &str, indent: usize, offset: usize) -> Option<Marker> {
        // `- - -` is a thematic break, never an item.
        if ThematicBreak::matches(rest) {
            return None;
        }
        let sig = ListMarker::sig(rest)?;

        let after = &rest[sig.width..];
        if !after.starts_with([' ', '\t']) {
            return None;
        }

        // Measure the spacing run in columns from the symbol's end column.
        let symbol_end = indent + sig.width;
        let mut col = symbol_end;
        let mut spacing_bytes = 0usize;
        for b in after.bytes() {
            match b {
                b' ' => col += 1,
                b'\t' => col += self.tab_width - col % self.tab_width,
                _ => break,
            }
            spacing_bytes += 1;
        }

        let content_empty = spacing_bytes == after.len();
        let (spacing_cols, spacing_bytes) =
            if content_empty || col - symbol_end > MAX_MARKER_SPACING {
                (1, 1)
            } else {
                (col - symbol_end, spacing_bytes)
            };

        Some(Marker {
            kind: sig.kind,
            ordinal: sig.ordinal,
            indent,
            content_column: symbol_end + spacing_cols,
            content_offset: offset + sig.width + spacing_bytes,
        })
    }
}
