//! Tool runner infrastructure adapters

mod ruff;

pub use ruff::RuffRunner;
