//! powershell sound player adapter (Windows)

use std::io;
use std::path::Path;
use std::process::{Command, Stdio};

use crate::application::ports::{PlaybackError, SoundPlayer};

/// Windows sound player.
///
/// Builds a one-line `Media.SoundPlayer` command and runs it through
/// `powershell -c`; `PlaySync()` blocks until playback ends.
pub struct PowershellPlayer;

impl PowershellPlayer {
    /// Create a new powershell player
    pub fn new() -> Self {
        Self
    }
}

impl Default for PowershellPlayer {
    fn default() -> Self {
        Self::new()
    }
}

impl SoundPlayer for PowershellPlayer {
    fn play(&self, asset: &Path) -> Result<(), PlaybackError> {
        let command = format!(
            "(New-Object Media.SoundPlayer '{}').PlaySync()",
            asset.display()
        );

        let status = Command::new("powershell")
            .args(["-c", &command])
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .status()
            .map_err(|e| {
                if e.kind() == io::ErrorKind::NotFound {
                    PlaybackError::PlayerNotFound("powershell".to_string())
                } else {
                    PlaybackError::PlaybackFailed(e.to_string())
                }
            })?;

        if !status.success() {
            return Err(PlaybackError::PlaybackFailed(format!(
                "powershell exited with status: {}",
                status
            )));
        }

        Ok(())
    }
}
