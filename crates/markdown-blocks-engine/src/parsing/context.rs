use std::sync::{
    Arc,
    atomic::{AtomicBool, Ordering},
};

use super::{blocks::LineScanner, options::ParseOptions};

/// Cooperative cancellation flag shared between a caller and a running parse.
///
/// Block rules check it before they start. A rule that has already started
/// runs to completion.
#[derive(Debug, Clone, Default)]
pub struct CancelToken(Arc<AtomicBool>);

impl CancelToken {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn cancel(&self) {
        self.0.store(true, Ordering::Relaxed);
    }

    pub fn is_cancelled(&self) -> bool {
        self.0.load(Ordering::Relaxed)
    }
}

/// Per-call parsing state threaded through recursive block parses.
///
/// `depth` counts the list levels enclosing the text being parsed, across
/// every re-entrant call made for item content.
#[derive(Debug, Clone, Copy)]
pub struct ParseContext<'a> {
    pub options: &'a ParseOptions,
    pub depth: usize,
    cancel: Option<&'a CancelToken>,
}

impl<'a> ParseContext<'a> {
    pub fn new(options: &'a ParseOptions) -> Self {
        Self {
            options,
            depth: 0,
            cancel: None,
        }
    }

    #[must_use]
    pub fn with_cancel(self, token: &'a CancelToken) -> Self {
        Self {
            cancel: Some(token),
            ..self
        }
    }

    /// Context for text nested `levels` list levels below this one.
    #[must_use]
    pub fn nested(&self, levels: usize) -> Self {
        Self {
            depth: self.depth + levels,
            ..*self
        }
    }

    pub fn is_cancelled(&self) -> bool {
        self.cancel.is_some_and(CancelToken::is_cancelled)
    }

    /// True once `levels` more list levels would exceed `max_depth`.
    pub fn depth_exhausted(&self, levels: usize) -> bool {
        self.depth + levels >= self.options.max_depth
    }

    pub fn scanner(&self) -> LineScanner {
        LineScanner::new(self.options.tab_width)
    }
}
