//! No-op sound player adapter
//!
//! Used when no playback utility is available on the platform.

use std::path::Path;

use crate::application::ports::{PlaybackError, SoundPlayer};

/// Sound player that does nothing
pub struct NoopPlayer;

impl NoopPlayer {
    /// Create a new no-op player
    pub fn new() -> Self {
        Self
    }
}

impl Default for NoopPlayer {
    fn default() -> Self {
        Self::new()
    }
}

impl SoundPlayer for NoopPlayer {
    fn play(&self, _asset: &Path) -> Result<(), PlaybackError> {
        Ok(())
    }
}
