//! Infrastructure layer - Adapter implementations
//!
//! Contains concrete implementations of the port interfaces,
//! integrating with the ruff binary and platform audio utilities.

pub mod library;
pub mod player;
pub mod runner;

// Re-export adapters
pub use library::ExeDirLibrary;
pub use player::{create_player, NoopPlayer, PlayerKind};
pub use runner::RuffRunner;
