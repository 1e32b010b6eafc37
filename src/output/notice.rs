//! User-visible notices
//!
//! Notices are the short success/failure messages shown to the person at the
//! terminal, separate from the `tracing` log stream. The library raises them
//! through the `Notifier` trait so that callers decide where they go.

use colored::Colorize;
use std::cell::RefCell;

/// Whether a notice reports a success or a failure
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeStyle {
    Success,
    Failure,
}

/// A titled message for the user
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub style: NoticeStyle,
    pub title: String,
    pub message: String,
}

impl Notice {
    /// Create a success notice
    #[must_use]
    pub fn success(title: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            style: NoticeStyle::Success,
            title: title.into(),
            message: message.into(),
        }
    }

    /// Create a failure notice
    #[must_use]
    pub fn failure(title: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            style: NoticeStyle::Failure,
            title: title.into(),
            message: message.into(),
        }
    }
}

/// Sink for user-visible notices
pub trait Notifier {
    /// Show a notice to the user
    fn notify(&self, notice: Notice);
}

/// Prints notices to the terminal
///
/// Failures always go to stderr. Successes go to stdout unless quiet.
#[derive(Debug, Clone, Copy, Default)]
pub struct ConsoleNotifier {
    quiet: bool,
}

impl ConsoleNotifier {
    #[must_use]
    pub const fn new(quiet: bool) -> Self {
        Self { quiet }
    }
}

impl Notifier for ConsoleNotifier {
    fn notify(&self, notice: Notice) {
        match notice.style {
            NoticeStyle::Success => {
                if !self.quiet {
                    println!("{} {}: {}", "✓".green(), notice.title.bold(), notice.message);
                }
            }
            NoticeStyle::Failure => {
                eprintln!("{} {}: {}", "✗".red(), notice.title.bold(), notice.message);
            }
        }
    }
}

/// Collects notices instead of printing them
#[derive(Debug, Default)]
pub struct RecordingNotifier {
    notices: RefCell<Vec<Notice>>,
}

impl RecordingNotifier {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// All notices received so far, oldest first
    #[must_use]
    pub fn notices(&self) -> Vec<Notice> {
        self.notices.borrow().clone()
    }

    /// Number of failure notices received
    #[must_use]
    pub fn failures(&self) -> usize {
        self.notices
            .borrow()
            .iter()
            .filter(|n| n.style == NoticeStyle::Failure)
            .count()
    }
}

impl Notifier for RecordingNotifier {
    fn notify(&self, notice: Notice) {
        self.notices.borrow_mut().push(notice);
    }
}
