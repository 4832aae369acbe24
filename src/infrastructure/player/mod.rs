//! Sound player infrastructure adapters
//!
//! One adapter per platform playback utility, selected once at startup by
//! [`create_player`].

use std::fmt;

#[cfg(not(any(target_os = "macos", windows)))]
use std::process::{Command, Stdio};

use crate::application::ports::SoundPlayer;

#[cfg(target_os = "macos")]
mod afplay;
#[cfg(target_os = "linux")]
mod aplay;
mod ffplay;
mod noop;
#[cfg(windows)]
mod powershell;

#[cfg(target_os = "macos")]
pub use afplay::AfplayPlayer;
#[cfg(target_os = "linux")]
pub use aplay::AplayPlayer;
pub use ffplay::FfplayPlayer;
pub use noop::NoopPlayer;
#[cfg(windows)]
pub use powershell::PowershellPlayer;

/// Available playback strategies
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlayerKind {
    /// macOS: built-in afplay utility
    Afplay,
    /// Linux: ALSA PCM player
    Aplay,
    /// FFmpeg's media player, headless
    Ffplay,
    /// Windows: Media.SoundPlayer via powershell
    Powershell,
    /// No playback utility available
    Silent,
}

impl fmt::Display for PlayerKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PlayerKind::Afplay => write!(f, "afplay"),
            PlayerKind::Aplay => write!(f, "aplay"),
            PlayerKind::Ffplay => write!(f, "ffplay"),
            PlayerKind::Powershell => write!(f, "powershell"),
            PlayerKind::Silent => write!(f, "silent"),
        }
    }
}

/// Check if a playback utility is available using `which`
#[cfg(not(any(target_os = "macos", windows)))]
fn is_tool_available(tool: &str) -> bool {
    Command::new("which")
        .arg(tool)
        .stdin(Stdio::null())
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .status()
        .map(|s| s.success())
        .unwrap_or(false)
}

/// Create the sound player for the current platform.
///
/// - macOS: afplay
/// - Linux: aplay if present, otherwise ffplay if present, otherwise silent
/// - Windows: powershell with Media.SoundPlayer
/// - anything else: ffplay if present, otherwise silent
pub fn create_player() -> (Box<dyn SoundPlayer>, PlayerKind) {
    #[cfg(target_os = "macos")]
    {
        (
            Box::new(AfplayPlayer::new()) as Box<dyn SoundPlayer>,
            PlayerKind::Afplay,
        )
    }

    #[cfg(target_os = "linux")]
    {
        if is_tool_available("aplay") {
            (
                Box::new(AplayPlayer::new()) as Box<dyn SoundPlayer>,
                PlayerKind::Aplay,
            )
        } else if is_tool_available("ffplay") {
            (
                Box::new(FfplayPlayer::new()) as Box<dyn SoundPlayer>,
                PlayerKind::Ffplay,
            )
        } else {
            (
                Box::new(NoopPlayer::new()) as Box<dyn SoundPlayer>,
                PlayerKind::Silent,
            )
        }
    }

    #[cfg(windows)]
    {
        (
            Box::new(PowershellPlayer::new()) as Box<dyn SoundPlayer>,
            PlayerKind::Powershell,
        )
    }

    #[cfg(not(any(target_os = "macos", target_os = "linux", windows)))]
    {
        if is_tool_available("ffplay") {
            (
                Box::new(FfplayPlayer::new()) as Box<dyn SoundPlayer>,
                PlayerKind::Ffplay,
            )
        } else {
            (
                Box::new(NoopPlayer::new()) as Box<dyn SoundPlayer>,
                PlayerKind::Silent,
            )
        }
    }
}
