use crate::parsing::blocks::types::{ListKind, OrderedDelimiter};

/// The symbol part of a list marker, before any following whitespace.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MarkerSig {
    pub kind: ListKind,
    /// Parsed ordinal for ordered markers. `None` for bullets and for
    /// ordinals too large to represent.
    pub ordinal: Option<u64>,
    /// Width of the symbol in bytes (and columns: markers are ASCII).
    pub width: usize,
}

/// List item marker syntax: `-`, `*`, `+`, or digits followed by `.` or `)`.
pub struct ListMarker;

impl ListMarker {
    pub const BULLETS: [u8; 3] = [b'-', b'*', b'+'];
    pub const PERIOD: u8 = b'.';
    pub const PAREN: u8 = b')';

    /// Reads a marker symbol at the start of `remainder` (indentation already
    /// stripped). Does not check the whitespace that must follow it.
    pub fn sig(remainder: &str) -> Option<MarkerSig> {
        let b = remainder.as_bytes();
        let first = *b.first()?;

        if Self::BULLETS.contains(&first) {
            return Some(MarkerSig {
                kind: ListKind::Unordered,
                ordinal: None,
                width: 1,
            });
        }

        let digits = b.iter().take_while(|c| c.is_ascii_digit()).count();
        if digits == 0 {
            return None;
        }
        let delimiter = match b.get(digits).copied() {
            Some(Self::PERIOD) => OrderedDelimiter::Period,
            Some(Self::PAREN) => OrderedDelimiter::Paren,
            _ => return None,
        };
        Some(MarkerSig {
            kind: ListKind::Ordered(delimiter),
            ordinal: remainder[..digits].parse().ok(),
            width: digits + 1,
        })
    }

    /// The delimiter character for an ordered list.
    pub fn delimiter_char(delimiter: OrderedDelimiter) -> char {
        match delimiter {
            OrderedDelimiter::Period => Self::PERIOD as char,
            OrderedDelimiter::Paren => Self::PAREN as char,
        }
    }
}
