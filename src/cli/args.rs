//! CLI argument definitions using Clap
//!
//! The wrapper defines no flags of its own: every argument, including
//! anything that looks like a flag, is forwarded verbatim to ruff. clap's
//! built-in help/version flags are disabled so they forward too.

use std::ffi::OsString;

use clap::Parser;

/// bark - run ruff and bark when it complains
#[derive(Parser, Debug)]
#[command(name = "bark")]
#[command(about = "Runs ruff and plays a sound when it fails or reformats files")]
#[command(disable_help_flag = true, disable_version_flag = true)]
pub struct Cli {
    /// Arguments forwarded unchanged to ruff
    #[arg(trailing_var_arg = true, allow_hyphen_values = true, value_name = "RUFF_ARGS")]
    pub args: Vec<OsString>,
}
