//! Sound library port interface

use std::path::PathBuf;

/// Port for choosing the audio asset to play.
///
/// Returns `None` when no asset is available; the notification is then
/// skipped silently.
pub trait SoundLibrary: Send + Sync {
    /// Choose an asset, if any exists
    fn choose(&self) -> Option<PathBuf>;
}
