use serde::{Deserialize, Serialize};

/// Default tab stop width used when expanding leading tabs.
pub const DEFAULT_TAB_WIDTH: usize = 4;

/// Default bound on list nesting, counted across recursive item parses.
pub const DEFAULT_MAX_DEPTH: usize = 64;

/// What a blank line inside a list means.
///
/// Every blank line seen while a list item is open goes through exactly one
/// decision point (`ListBlockBuilder::blank_continues`), driven by this value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum BlankLinePolicy {
    /// Peek at the next non-blank line: the list goes on if that line is a
    /// marker or indented enough to continue an open item.
    #[default]
    LookAhead,
    /// Any blank line ends the list.
    Terminate,
}

/// Tunables for block parsing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ParseOptions {
    /// Column stop width for tab expansion in leading indentation.
    pub tab_width: usize,
    /// Maximum number of nested list levels. Markers past this bound are
    /// treated as content of the deepest open item.
    pub max_depth: usize,
    /// Blank-line handling inside lists.
    pub blank_lines: BlankLinePolicy,
}

impl Default for ParseOptions {
    fn default() -> Self {
        Self {
            tab_width: DEFAULT_TAB_WIDTH,
            max_depth: DEFAULT_MAX_DEPTH,
            blank_lines: BlankLinePolicy::default(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum OptionsError {
    #[error("tab width must be at least 1")]
    ZeroTabWidth,
    #[error("maximum nesting depth must be at least 1")]
    ZeroMaxDepth,
}

impl ParseOptions {
    /// Checks that the options describe a usable parser.
    pub fn validate(&self) -> Result<(), OptionsError> {
        if self.tab_width == 0 {
            return Err(OptionsError::ZeroTabWidth);
        }
        if self.max_depth == 0 {
            return Err(OptionsError::ZeroMaxDepth);
        }
        Ok(())
    }
}
