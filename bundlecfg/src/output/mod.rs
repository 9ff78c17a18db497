//! User-facing output for settings commands.
//!
//! Commands never print directly; they talk to a [`Ui`] sink so the same
//! logic can drive a terminal ([`Shell`]) or be inspected in tests
//! ([`CapturedUi`]).

mod capture;
mod shell;

use std::fmt;

pub use capture::CapturedUi;
pub use shell::Shell;

/// Indentation used for lines nested under a heading.
pub const PADDING: &str = "  ";

/// Severity of a line written to a [`Ui`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UiLevel {
    /// Confirmation or heading.
    Confirm,
    /// Informational detail.
    Info,
    /// Something the user should know about but that does not stop the command.
    Warn,
    /// A failure.
    Error,
}

impl fmt::Display for UiLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Confirm => write!(f, "confirm"),
            Self::Info => write!(f, "info"),
            Self::Warn => write!(f, "warn"),
            Self::Error => write!(f, "error"),
        }
    }
}

/// Line-oriented output sink.
pub trait Ui {
    /// Write a single line at the given level.
    fn line(&self, level: UiLevel, message: &str);

    /// Confirmation or heading line.
    fn confirm(&self, message: &str) {
        self.line(UiLevel::Confirm, message);
    }

    /// Informational line.
    fn info(&self, message: &str) {
        self.line(UiLevel::Info, message);
    }

    /// Warning line.
    fn warn(&self, message: &str) {
        self.line(UiLevel::Warn, message);
    }

    /// Error line.
    fn error(&self, message: &str) {
        self.line(UiLevel::Error, message);
    }
}
