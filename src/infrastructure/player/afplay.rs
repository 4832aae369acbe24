//! afplay sound player adapter (macOS)

use std::io;
use std::path::Path;
use std::process::{Command, Stdio};

use crate::application::ports::{PlaybackError, SoundPlayer};

/// Output volume used while the notification plays (0-100)
const DUCKED_VOLUME: u8 = 25;

/// afplay sound player.
///
/// Ducks the system output volume to a fixed level for the duration of
/// playback; the previous level is restored on every exit path, including
/// playback failure.
pub struct AfplayPlayer;

impl AfplayPlayer {
    /// Create a new afplay player
    pub fn new() -> Self {
        Self
    }
}

impl Default for AfplayPlayer {
    fn default() -> Self {
        Self::new()
    }
}

impl SoundPlayer for AfplayPlayer {
    fn play(&self, asset: &Path) -> Result<(), PlaybackError> {
        // Restores the previous volume when dropped. Volume handling is
        // best-effort: if the current level cannot be read, play as-is.
        let _volume = VolumeGuard::duck(DUCKED_VOLUME);

        let status = Command::new("afplay")
            .arg(asset)
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .status()
            .map_err(|e| {
                if e.kind() == io::ErrorKind::NotFound {
                    PlaybackError::PlayerNotFound("afplay".to_string())
                } else {
                    PlaybackError::PlaybackFailed(e.to_string())
                }
            })?;

        if !status.success() {
            return Err(PlaybackError::PlaybackFailed(format!(
                "afplay exited with status: {}",
                status
            )));
        }

        Ok(())
    }
}

/// Scoped system-volume override
struct VolumeGuard {
    original: u8,
}

impl VolumeGuard {
    /// Lower the output volume to `level`, remembering the current one
    fn duck(level: u8) -> Option<Self> {
        let original = read_output_volume()?;
        set_output_volume(level).ok()?;
        Some(Self { original })
    }
}

impl Drop for VolumeGuard {
    fn drop(&mut self) {
        let _ = set_output_volume(self.original);
    }
}

fn read_output_volume() -> Option<u8> {
    let output = Command::new("osascript")
        .args(["-e", "output volume of (get volume settings)"])
        .stdin(Stdio::null())
        .stderr(Stdio::null())
        .output()
        .ok()?;

    if !output.status.success() {
        return None;
    }

    String::from_utf8_lossy(&output.stdout).trim().parse().ok()
}

fn set_output_volume(level: u8) -> io::Result<()> {
    let status = Command::new("osascript")
        .args(["-e", &format!("set volume output volume {}", level)])
        .stdin(Stdio::null())
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .status()?;

    if !status.success() {
        return Err(io::Error::new(
            io::ErrorKind::Other,
            format!("osascript exited with status: {}", status),
        ));
    }

    Ok(())
}
