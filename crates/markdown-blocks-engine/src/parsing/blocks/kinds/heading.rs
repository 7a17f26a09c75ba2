use std::sync::OnceLock;

use regex::Regex;

/// ATX heading (`#` through `######`).
pub struct Heading;

impl Heading {
    pub const PREFIX: char = '#';
    pub const MAX_LEVEL: u8 = 6;

    fn pattern() -> &'static Regex {
        static ATX_REGEX: OnceLock<Regex> = OnceLock::new();
        ATX_REGEX.get_or_init(|| {
            Regex::new(r"^(#{1,6})(?:[ \t]+(.*?))?(?:[ \t]+#+)?[ \t]*$")
                .expect("Invalid ATX heading regex")
        })
    }

    /// Parses `remainder` (indentation already stripped) as an ATX heading,
    /// returning its level and text without the optional closing hashes.
    pub fn parse(remainder: &str) -> Option<(u8, &str)> {
        if !remainder.starts_with(Self::PREFIX) {
            return None;
        }
        let caps = Self::pattern().captures(remainder)?;
        let level = u8::try_from(caps.get(1)?.as_str().len()).ok()?;
        let text = caps.get(2).map_or("", |m| m.as_str());
        Some((level, text))
    }
}
