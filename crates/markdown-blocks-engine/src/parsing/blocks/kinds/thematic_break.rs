/// Thematic break (`***`, `- - -`, `___`).
///
/// Recognized before lists so that `- - -` never opens a list item.
pub struct ThematicBreak;

impl ThematicBreak {
    pub const CHARS: [u8; 3] = [b'*', b'-', b'_'];
    pub const MIN_COUNT: usize = 3;

    /// True if `remainder` (indentation already stripped) is a thematic break:
    /// three or more of the same break character, optionally space-separated.
    pub fn matches(remainder: &str) -> bool {
        let mut ch = None;
        let mut count = 0usize;
        for b in remainder.bytes() {
            match b {
                b' ' | b'\t' => {}
                c if Self::CHARS.contains(&c) => {
                    if ch.is_some_and(|prev| prev != c) {
                        return false;
                    }
                    ch = Some(c);
                    count += 1;
                }
                _ => return false,
            }
        }
        count >= Self::MIN_COUNT
    }
}
