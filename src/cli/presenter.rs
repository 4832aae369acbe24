//! CLI presenter for output formatting

use colored::*;

/// Presenter for CLI output formatting.
///
/// The wrapped tool's own output is mirrored by the runner; the presenter
/// only formats the wrapper's error reporting.
pub struct Presenter;

impl Presenter {
    /// Create a new presenter
    pub fn new() -> Self {
        Self
    }

    /// Print error message to stderr
    pub fn error(&self, message: &str) {
        eprintln!("{} {}", "✗".red(), message);
    }
}

impl Default for Presenter {
    fn default() -> Self {
        Self::new()
    }
}
