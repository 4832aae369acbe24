//! Main app runner

use std::ffi::OsString;
use std::process::ExitCode;

use crate::application::CheckUseCase;
use crate::infrastructure::{create_player, ExeDirLibrary, RuffRunner};

use super::presenter::Presenter;

/// Exit code when ruff cannot be found or launched.
///
/// Reserved so it never collides with ruff's own codes; ruff exits with
/// small values (0, 1, 2), never 127.
pub const EXIT_TOOL_ERROR: u8 = 127;

/// Run the wrapper with the arguments to forward to ruff
pub fn run(args: Vec<OsString>) -> ExitCode {
    let presenter = Presenter::new();

    // Select the platform playback strategy once, up front
    let (player, _kind) = create_player();
    let runner = RuffRunner::new();
    let library = ExeDirLibrary::from_current_exe();

    let use_case = CheckUseCase::new(runner, library, player);

    match use_case.execute(&args) {
        Ok(output) => ExitCode::from(clamp_exit_code(output.exit_code)),
        Err(e) => {
            presenter.error(&e.to_string());
            ExitCode::from(EXIT_TOOL_ERROR)
        }
    }
}

/// Map the wrapped tool's exit code into the range a process can return
fn clamp_exit_code(code: i32) -> u8 {
    u8::try_from(code).unwrap_or(1)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clamp_passes_small_codes_through() {
        assert_eq!(clamp_exit_code(0), 0);
        assert_eq!(clamp_exit_code(1), 1);
        assert_eq!(clamp_exit_code(2), 2);
        assert_eq!(clamp_exit_code(255), 255);
    }

    #[test]
    fn clamp_maps_out_of_range_codes_to_failure() {
        assert_eq!(clamp_exit_code(-1), 1);
        assert_eq!(clamp_exit_code(256), 1);
    }

    #[test]
    fn reserved_code_is_distinct_from_ruff_codes() {
        assert!(![0u8, 1, 2].contains(&EXIT_TOOL_ERROR));
    }
}
