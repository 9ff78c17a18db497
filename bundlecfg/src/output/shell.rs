//! Terminal implementation of the output sink.

use crate::logging::LogLevel;

use super::{Ui, UiLevel};

/// Writes confirmations and info to stdout, warnings and errors to stderr.
///
/// At [`LogLevel::Quiet`] only errors are shown.
///
/// # Examples
///
/// ```
/// use bundlecfg::output::{Shell, Ui};
/// use bundlecfg::LogLevel;
///
/// let shell = Shell::new(LogLevel::Quiet);
/// shell.info("suppressed");
/// shell.error("always shown");
/// ```
#[derive(Debug, Clone, Copy)]
pub struct Shell {
    level: LogLevel,
}

impl Shell {
    /// Creates a shell with the given verbosity.
    #[must_use]
    pub const fn new(level: LogLevel) -> Self {
        Self { level }
    }

    /// Whether a line at `level` is printed.
    #[must_use]
    pub fn shows(&self, level: UiLevel) -> bool {
        level == UiLevel::Error || self.level > LogLevel::Quiet
    }
}

impl Default for Shell {
    fn default() -> Self {
        Self::new(LogLevel::Normal)
    }
}

impl Ui for Shell {
    fn line(&self, level: UiLevel, message: &str) {
        if !self.shows(level) {
            return;
        }
        match level {
            UiLevel::Confirm | UiLevel::Info => println!("{message}"),
            UiLevel::Warn | UiLevel::Error => eprintln!("{message}"),
        }
    }
}
