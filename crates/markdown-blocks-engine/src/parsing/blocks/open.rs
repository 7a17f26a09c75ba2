use super::kinds::{CodeFence, FenceKind, Heading, ThematicBreak};

/// A leaf block opened by a single line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BlockOpen<'a> {
    FencedCode { kind: FenceKind, info: &'a str },
    ThematicBreak,
    Heading { level: u8, text: &'a str },
}

/// Detects a leaf block opener in `remainder` (indentation already stripped).
///
/// Lists are not leaves: the dispatcher tries them after this returns `None`.
pub fn try_open_leaf(remainder: &str) -> Option<BlockOpen<'_>> {
    // Precedence: fence, then thematic break, then heading.
    if let Some(sig) = CodeFence::sig(remainder) {
        return Some(BlockOpen::FencedCode {
            kind: CodeFence::kind(sig),
            info: CodeFence::info(remainder),
        });
    }
    if ThematicBreak::matches(remainder) {
        return Some(BlockOpen::ThematicBreak);
    }
    Heading::parse(remainder).map(|(level, text)| BlockOpen::Heading { level, text })
}
