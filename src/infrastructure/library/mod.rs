//! Sound library infrastructure adapters

mod exe_dir;

pub use exe_dir::{ExeDirLibrary, AUDIO_EXTENSIONS};
