//! Check use case: run ruff, classify the outcome, bark on failure

use std::ffi::OsString;

use super::ports::{RunnerError, SoundLibrary, SoundPlayer, ToolRunner};

/// Output from the check use case
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CheckOutput {
    /// Exit code of the wrapped tool, to be propagated unchanged
    pub exit_code: i32,
    /// Whether a notification sound was played successfully
    pub notified: bool,
}

/// One-shot check use case.
///
/// Runs the wrapped tool once, then plays at most one notification sound
/// when the outcome classifies as a failure. The notification path is
/// best-effort: a missing asset or a playback error never surfaces and
/// never changes the propagated exit code.
pub struct CheckUseCase<R, L, P>
where
    R: ToolRunner,
    L: SoundLibrary,
    P: SoundPlayer,
{
    runner: R,
    library: L,
    player: P,
}

impl<R, L, P> CheckUseCase<R, L, P>
where
    R: ToolRunner,
    L: SoundLibrary,
    P: SoundPlayer,
{
    /// Create a new use case instance
    pub fn new(runner: R, library: L, player: P) -> Self {
        Self {
            runner,
            library,
            player,
        }
    }

    /// Execute the check workflow
    pub fn execute(&self, args: &[OsString]) -> Result<CheckOutput, RunnerError> {
        let outcome = self.runner.run(args)?;

        let mut notified = false;
        if outcome.should_notify() {
            if let Some(asset) = self.library.choose() {
                notified = self.player.play(&asset).is_ok();
            }
        }

        Ok(CheckOutput {
            exit_code: outcome.code,
            notified,
        })
    }
}

#[cfg(test)]
mod tests {
    use std::path::{Path, PathBuf};
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;

    use super::*;
    use crate::application::ports::PlaybackError;
    use crate::domain::RunOutcome;

    // Mock implementations for testing
    struct MockRunner {
        outcome: RunOutcome,
    }

    impl ToolRunner for MockRunner {
        fn run(&self, _args: &[OsString]) -> Result<RunOutcome, RunnerError> {
            Ok(self.outcome.clone())
        }
    }

    struct MissingRunner;

    impl ToolRunner for MissingRunner {
        fn run(&self, _args: &[OsString]) -> Result<RunOutcome, RunnerError> {
            Err(RunnerError::ToolNotFound("ruff".to_string()))
        }
    }

    struct MockLibrary {
        asset: Option<PathBuf>,
    }

    impl SoundLibrary for MockLibrary {
        fn choose(&self) -> Option<PathBuf> {
            self.asset.clone()
        }
    }

    struct CountingPlayer {
        plays: Arc<AtomicUsize>,
        fail: bool,
    }

    impl SoundPlayer for CountingPlayer {
        fn play(&self, _asset: &Path) -> Result<(), PlaybackError> {
            self.plays.fetch_add(1, Ordering::SeqCst);
            if self.fail {
                Err(PlaybackError::PlaybackFailed("boom".to_string()))
            } else {
                Ok(())
            }
        }
    }

    fn outcome(stdout: &str, stderr: &str, code: i32) -> RunOutcome {
        RunOutcome {
            stdout: stdout.to_string(),
            stderr: stderr.to_string(),
            code,
        }
    }

    fn use_case(
        out: RunOutcome,
        asset: Option<PathBuf>,
        fail_playback: bool,
    ) -> (
        CheckUseCase<MockRunner, MockLibrary, CountingPlayer>,
        Arc<AtomicUsize>,
    ) {
        let plays = Arc::new(AtomicUsize::new(0));
        let player = CountingPlayer {
            plays: Arc::clone(&plays),
            fail: fail_playback,
        };
        (
            CheckUseCase::new(MockRunner { outcome: out }, MockLibrary { asset }, player),
            plays,
        )
    }

    #[test]
    fn clean_run_plays_nothing() {
        let (use_case, plays) = use_case(
            outcome("All checks passed!", "", 0),
            Some(PathBuf::from("bark.mp3")),
            false,
        );

        let output = use_case.execute(&[]).unwrap();
        assert_eq!(output.exit_code, 0);
        assert!(!output.notified);
        assert_eq!(plays.load(Ordering::SeqCst), 0);
    }

    #[test]
    fn failing_run_plays_exactly_once() {
        let (use_case, plays) = use_case(outcome("", "", 1), Some(PathBuf::from("bark.mp3")), false);

        let output = use_case.execute(&[]).unwrap();
        assert_eq!(output.exit_code, 1);
        assert!(output.notified);
        assert_eq!(plays.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn reformatted_output_plays_despite_success_code() {
        let (use_case, plays) = use_case(
            outcome("", "1 file reformatted", 0),
            Some(PathBuf::from("bark.mp3")),
            false,
        );

        let output = use_case.execute(&[]).unwrap();
        assert_eq!(output.exit_code, 0);
        assert_eq!(plays.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn missing_asset_skips_playback() {
        let (use_case, plays) = use_case(outcome("", "", 1), None, false);

        let output = use_case.execute(&[]).unwrap();
        assert_eq!(output.exit_code, 1);
        assert!(!output.notified);
        assert_eq!(plays.load(Ordering::SeqCst), 0);
    }

    #[test]
    fn playback_failure_keeps_exit_code() {
        let (use_case, plays) = use_case(outcome("", "", 2), Some(PathBuf::from("bark.mp3")), true);

        let output = use_case.execute(&[]).unwrap();
        assert_eq!(output.exit_code, 2);
        assert!(!output.notified);
        assert_eq!(plays.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn runner_error_propagates_without_playback() {
        let plays = Arc::new(AtomicUsize::new(0));
        let player = CountingPlayer {
            plays: Arc::clone(&plays),
            fail: false,
        };
        let use_case = CheckUseCase::new(
            MissingRunner,
            MockLibrary {
                asset: Some(PathBuf::from("bark.mp3")),
            },
            player,
        );

        let err = use_case.execute(&[]).unwrap_err();
        assert!(matches!(err, RunnerError::ToolNotFound(_)));
        assert_eq!(plays.load(Ordering::SeqCst), 0);
    }
}
