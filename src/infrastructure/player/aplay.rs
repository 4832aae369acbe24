//! aplay sound player adapter (Linux)

use std::io;
use std::path::Path;
use std::process::{Command, Stdio};

use crate::application::ports::{PlaybackError, SoundPlayer};

/// ALSA PCM player adapter
pub struct AplayPlayer;

impl AplayPlayer {
    /// Create a new aplay player
    pub fn new() -> Self {
        Self
    }
}

impl Default for AplayPlayer {
    fn default() -> Self {
        Self::new()
    }
}

impl SoundPlayer for AplayPlayer {
    fn play(&self, asset: &Path) -> Result<(), PlaybackError> {
        let status = Command::new("aplay")
            .arg(asset)
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .status()
            .map_err(|e| {
                if e.kind() == io::ErrorKind::NotFound {
                    PlaybackError::PlayerNotFound("aplay".to_string())
                } else {
                    PlaybackError::PlaybackFailed(e.to_string())
                }
            })?;

        if !status.success() {
            return Err(PlaybackError::PlaybackFailed(format!(
                "aplay exited with status: {}",
                status
            )));
        }

        Ok(())
    }
}
