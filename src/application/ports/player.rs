//! Sound player port interface

use std::path::Path;

use thiserror::Error;

/// Errors that can occur during sound playback.
///
/// Playback is best-effort throughout the crate; callers swallow these.
#[derive(Debug, Clone, Error)]
pub enum PlaybackError {
    #[error("'{0}' not found")]
    PlayerNotFound(String),

    #[error("Playback failed: {0}")]
    PlaybackFailed(String),
}

/// Port for playing a notification sound.
///
/// One implementation exists per platform playback utility; the platform
/// dispatch happens once at startup when the adapter is constructed.
pub trait SoundPlayer: Send + Sync {
    /// Play the given audio asset, blocking until playback ends
    fn play(&self, asset: &Path) -> Result<(), PlaybackError>;
}

/// Blanket implementation for boxed player types
impl SoundPlayer for Box<dyn SoundPlayer> {
    fn play(&self, asset: &Path) -> Result<(), PlaybackError> {
        self.as_ref().play(asset)
    }
}
