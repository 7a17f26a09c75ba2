/// Paragraph block type (marker struct).
///
/// Paragraphs have no delimiters - they are the default leaf block
/// when no other block opener matches.
pub struct Paragraph;

impl Paragraph {
    /// Joins paragraph lines into the block's text. Each line has its
    /// indentation and trailing whitespace removed.
    pub fn join<'a>(lines: impl IntoIterator<Item = &'a str>) -> String {
        lines
            .into_iter()
            .map(str::trim)
            .collect::<Vec<_>>()
            .join("\n")
    }
}
