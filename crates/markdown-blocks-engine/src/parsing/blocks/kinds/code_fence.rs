use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FenceSig {
    Backticks,
    Tildes,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum FenceKind {
    Backticks,
    Tildes,
}

pub struct CodeFence;

impl CodeFence {
    pub const BACKTICKS: &'static str = "```";
    pub const TILDES: &'static str = "~~~";

    /// Returns the fence signature if `remainder` (indentation already
    /// stripped) opens or closes a fence.
    pub fn sig(remainder: &str) -> Option<FenceSig> {
        let t = remainder.trim_end_matches(['\r', '\n']);
        if t.starts_with(Self::BACKTICKS) {
            Some(FenceSig::Backticks)
        } else if t.starts_with(Self::TILDES) {
            Some(FenceSig::Tildes)
        } else {
            None
        }
    }

    pub fn kind(sig: FenceSig) -> FenceKind {
        match sig {
            FenceSig::Backticks => FenceKind::Backticks,
            FenceSig::Tildes => FenceKind::Tildes,
        }
    }

    /// The opening delimiter for a fence of this kind.
    pub fn delimiter(kind: FenceKind) -> &'static str {
        match kind {
            FenceKind::Backticks => Self::BACKTICKS,
            FenceKind::Tildes => Self::TILDES,
        }
    }

    /// The info string following an opening fence (`rust` in ```` ```rust ````).
    pub fn info(remainder: &str) -> &str {
        remainder
            .trim_start_matches(['`', '~'])
            .trim()
    }

    /// True if `remainder` is a bare closing fence for a block of `kind`.
    pub fn closes(kind: FenceKind, remainder: &str) -> bool {
        let matching = matches!(
            (kind, Self::sig(remainder)),
            (FenceKind::Backticks, Some(FenceSig::Backticks))
                | (FenceKind::Tildes, Some(FenceSig::Tildes))
        );
        matching && Self::info(remainder).is_empty()
    }
}
