//! In-memory output sink.

use std::cell::RefCell;

use super::{Ui, UiLevel};

/// Records every line it is given.
///
/// # Examples
///
/// ```
/// use bundlecfg::output::{CapturedUi, Ui, UiLevel};
///
/// let ui = CapturedUi::new();
/// ui.warn("`path` is already configured, so it will be unset.");
/// assert_eq!(ui.lines_at(UiLevel::Warn).len(), 1);
/// ```
#[derive(Debug, Default)]
pub struct CapturedUi {
    lines: RefCell<Vec<(UiLevel, String)>>,
}

impl CapturedUi {
    /// Creates an empty capture.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// All recorded lines in order.
    #[must_use]
    pub fn lines(&self) -> Vec<(UiLevel, String)> {
        self.lines.borrow().clone()
    }

    /// Recorded lines at one level.
    #[must_use]
    pub fn lines_at(&self, level: UiLevel) -> Vec<String> {
        self.lines
            .borrow()
            .iter()
            .filter(|(l, _)| *l == level)
            .map(|(_, line)| line.clone())
            .collect()
    }

    /// Whether any line at any level contains `needle`.
    #[must_use]
    pub fn contains(&self, needle: &str) -> bool {
        self.lines.borrow().iter().any(|(_, line)| line.contains(needle))
    }

    /// Full transcript, one line per entry.
    #[must_use]
    pub fn transcript(&self) -> String {
        self.lines
            .borrow()
            .iter()
            .map(|(_, line)| line.as_str())
            .collect::<Vec<_>>()
            .join("\n")
    }
}

impl Ui for CapturedUi {
    fn line(&self, level: UiLevel, message: &str) {
        self.lines.borrow_mut().push((level, message.to_string()));
    }
}
