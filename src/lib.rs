//! bark - an audible failure wrapper for ruff
//!
//! This crate runs `ruff` with the caller's arguments forwarded verbatim,
//! mirrors its output, propagates its exit code, and plays a notification
//! sound when ruff fails or reports reformatted files.
//!
//! # Architecture
//!
//! The crate follows hexagonal (ports & adapters) architecture:
//!
//! - **Domain**: The run outcome value object and failure classification
//! - **Application**: The check use case and port interfaces (traits)
//! - **Infrastructure**: Adapter implementations (ruff subprocess, platform
//!   sound players, asset library)
//! - **CLI**: Command-line surface and exit-code handling

pub mod application;
pub mod cli;
pub mod domain;
pub mod infrastructure;
