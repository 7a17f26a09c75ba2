use std::borrow::Cow;

/// Measures the leading whitespace of `s` in columns.
///
/// Tabs advance to the next multiple of `tab_width`. Returns the column count
/// and the byte offset of the first character that is not a space or tab.
pub fn leading_indent(s: &str, tab_width: usize) -> (usize, usize) {
    let tab_width = tab_width.max(1);
    let mut col = 0usize;
    for (i, b) in s.bytes().enumerate() {
        match b {
            b' ' => col += 1,
            b'\t' => col += tab_width - col % tab_width,
            _ => return (col, i),
        }
    }
    (col, s.len())
}

/// Removes up to `columns` columns of leading whitespace from `s`.
///
/// Whitespace beyond `columns` is kept, re-expanded to plain spaces when the
/// original run contained tabs. A line shorter than `columns` loses all of its
/// leading whitespace.
pub fn strip_columns(s: &str, columns: usize, tab_width: usize) -> Cow<'_, str> {
    let (indent, offset) = leading_indent(s, tab_width);
    let keep = indent.saturating_sub(columns);
    let rest = &s[offset..];
    if keep == 0 {
        return Cow::Borrowed(rest);
    }
    if !s[..offset].contains('\t') {
        return Cow::Borrowed(&s[offset - keep..]);
    }
    Cow::Owned(format!("{}{rest}", " ".repeat(keep)))
}
