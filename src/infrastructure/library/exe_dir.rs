//! Asset discovery in the executable's own directory

use std::env;
use std::ffi::OsStr;
use std::fs;
use std::path::{Path, PathBuf};
use std::time::{SystemTime, UNIX_EPOCH};

use crate::application::ports::SoundLibrary;

/// File extensions recognized as playable audio assets
pub const AUDIO_EXTENSIONS: &[&str] = &["mp3", "wav", "ogg", "flac"];

/// Selector mapping an asset count to the index to play
type Selector = Box<dyn Fn(usize) -> usize + Send + Sync>;

/// Sound library backed by the directory the program was installed to.
///
/// Scans the directory for audio files and picks one with the configured
/// selector (uniform random by default). Everything is best-effort: an
/// unreadable directory or an empty scan yields `None`.
pub struct ExeDirLibrary {
    dir: PathBuf,
    select: Selector,
}

impl ExeDirLibrary {
    /// Create a library over the given directory with the default selector
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self {
            dir: dir.into(),
            select: Box::new(random_index),
        }
    }

    /// Create a library over the running executable's directory
    pub fn from_current_exe() -> Self {
        let dir = env::current_exe()
            .ok()
            .and_then(|exe| exe.parent().map(Path::to_path_buf))
            .unwrap_or_default();
        Self::new(dir)
    }

    /// Replace the selector (used by tests for deterministic picks)
    pub fn with_selector(
        mut self,
        select: impl Fn(usize) -> usize + Send + Sync + 'static,
    ) -> Self {
        self.select = Box::new(select);
        self
    }
}

impl SoundLibrary for ExeDirLibrary {
    fn choose(&self) -> Option<PathBuf> {
        let mut assets: Vec<PathBuf> = fs::read_dir(&self.dir)
            .ok()?
            .filter_map(|entry| entry.ok())
            .map(|entry| entry.path())
            .filter(|path| is_audio_file(path))
            .collect();

        if assets.is_empty() {
            return None;
        }

        // Sort so the selector sees a stable ordering
        assets.sort();
        let index = (self.select)(assets.len()) % assets.len();
        Some(assets.swap_remove(index))
    }
}

fn is_audio_file(path: &Path) -> bool {
    path.is_file()
        && path
            .extension()
            .and_then(OsStr::to_str)
            .map(|ext| AUDIO_EXTENSIONS.contains(&ext.to_ascii_lowercase().as_str()))
            .unwrap_or(false)
}

/// Default selector: a uniform-enough pick seeded from the clock
fn random_index(count: usize) -> usize {
    let nanos = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.subsec_nanos())
        .unwrap_or(0);
    nanos as usize % count
}

#[cfg(test)]
mod tests {
    use std::fs::File;

    use super::*;

    fn touch(dir: &Path, name: &str) {
        File::create(dir.join(name)).unwrap();
    }

    #[test]
    fn empty_directory_yields_none() {
        let dir = tempfile::tempdir().unwrap();
        let library = ExeDirLibrary::new(dir.path());
        assert_eq!(library.choose(), None);
    }

    #[test]
    fn missing_directory_yields_none() {
        let library = ExeDirLibrary::new("/definitely/not/a/real/directory");
        assert_eq!(library.choose(), None);
    }

    #[test]
    fn non_audio_files_are_ignored() {
        let dir = tempfile::tempdir().unwrap();
        touch(dir.path(), "README.md");
        touch(dir.path(), "bark.txt");
        let library = ExeDirLibrary::new(dir.path());
        assert_eq!(library.choose(), None);
    }

    #[test]
    fn picks_the_selected_asset() {
        let dir = tempfile::tempdir().unwrap();
        touch(dir.path(), "woof.wav");
        touch(dir.path(), "bark.mp3");
        touch(dir.path(), "notes.txt");

        let first = ExeDirLibrary::new(dir.path()).with_selector(|_| 0);
        assert_eq!(first.choose(), Some(dir.path().join("bark.mp3")));

        let last = ExeDirLibrary::new(dir.path()).with_selector(|count| count - 1);
        assert_eq!(last.choose(), Some(dir.path().join("woof.wav")));
    }

    #[test]
    fn selector_index_wraps() {
        let dir = tempfile::tempdir().unwrap();
        touch(dir.path(), "bark.mp3");
        let library = ExeDirLibrary::new(dir.path()).with_selector(|_| 17);
        assert_eq!(library.choose(), Some(dir.path().join("bark.mp3")));
    }

    #[test]
    fn extension_match_ignores_case() {
        let dir = tempfile::tempdir().unwrap();
        touch(dir.path(), "bark.MP3");
        let library = ExeDirLibrary::new(dir.path()).with_selector(|_| 0);
        assert_eq!(library.choose(), Some(dir.path().join("bark.MP3")));
    }

    #[test]
    fn default_selector_picks_something() {
        let dir = tempfile::tempdir().unwrap();
        touch(dir.path(), "bark.mp3");
        touch(dir.path(), "woof.ogg");
        let library = ExeDirLibrary::new(dir.path());
        assert!(library.choose().is_some());
    }
}
