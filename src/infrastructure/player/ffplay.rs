//! ffplay sound player adapter
//!
//! General-purpose media player fallback, run headless with
//! `-nodisp -autoexit` so it plays the asset and exits.

use std::io;
use std::path::Path;
use std::process::{Command, Stdio};

use crate::application::ports::{PlaybackError, SoundPlayer};

/// ffplay sound player
pub struct FfplayPlayer;

impl FfplayPlayer {
    /// Create a new ffplay player
    pub fn new() -> Self {
        Self
    }
}

impl Default for FfplayPlayer {
    fn default() -> Self {
        Self::new()
    }
}

impl SoundPlayer for FfplayPlayer {
    fn play(&self, asset: &Path) -> Result<(), PlaybackError> {
        let status = Command::new("ffplay")
            .args(["-nodisp", "-autoexit"])
            .arg(asset)
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .status()
            .map_err(|e| {
                if e.kind() == io::ErrorKind::NotFound {
                    PlaybackError::PlayerNotFound("ffplay".to_string())
                } else {
                    PlaybackError::PlaybackFailed(e.to_string())
                }
            })?;

        if !status.success() {
            return Err(PlaybackError::PlaybackFailed(format!(
                "ffplay exited with status: {}",
                status
            )));
        }

        Ok(())
    }
}
