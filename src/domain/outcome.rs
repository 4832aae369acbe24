//! Captured result of a ruff invocation and its failure classification

/// Marker substrings that signal a failure regardless of exit code.
///
/// `ruff format` exits 0 even when it rewrites files, so the streams are
/// scanned for "reformatted". Matching is case-sensitive substring search.
pub const FAILURE_MARKERS: &[&str] = &["reformatted", "error"];

/// Captured output of a single ruff run.
///
/// The streams are held as (lossily decoded) text for marker scanning; the
/// runner has already re-emitted the exact captured bytes to the real
/// stdout/stderr by the time an outcome exists.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunOutcome {
    /// Captured standard output
    pub stdout: String,
    /// Captured standard error
    pub stderr: String,
    /// Exit code of the wrapped tool (1 if it was killed by a signal)
    pub code: i32,
}

impl RunOutcome {
    /// Whether either captured stream contains a failure marker
    pub fn has_marker(&self) -> bool {
        FAILURE_MARKERS
            .iter()
            .any(|marker| self.stdout.contains(marker) || self.stderr.contains(marker))
    }

    /// Whether this run should trigger an audible notification.
    ///
    /// True on a non-zero exit code or when a marker appears in either
    /// stream.
    pub fn should_notify(&self) -> bool {
        self.code != 0 || self.has_marker()
    }
}
