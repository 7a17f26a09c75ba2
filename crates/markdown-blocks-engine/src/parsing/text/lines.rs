use super::span::Span;

/// A reference to a single line of the input with its byte span.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LineRef<'a> {
    /// Byte span of this line in the input (includes the line terminator if present).
    pub span: Span,
    /// The line text without its `\n` / `\r\n` terminator.
    pub text: &'a str,
}

impl LineRef<'_> {
    /// Returns true if the line holds nothing but spaces and tabs.
    pub fn is_blank(&self) -> bool {
        self.text.bytes().all(|b| b == b' ' || b == b'\t')
    }
}

/// Returns an iterator over lines with their byte spans.
///
/// Spans keep the line terminator so that the end of the last span a rule
/// consumed is exactly the number of bytes it used.
pub fn lines_with_spans(s: &str) -> impl Iterator<Item = LineRef<'_>> + Clone + '_ {
    let mut offset = 0usize;
    s.split_inclusive('\n').map(move |raw| {
        let start = offset;
        offset += raw.len();
        LineRef {
            span: Span { start, end: offset },
            text: raw.trim_end_matches(['\r', '\n']),
        }
    })
}
