//! # CLI Command Implementations
//!
//! This module contains the implementation for each subcommand of the
//! `monoweld` command-line tool. Each subcommand is defined in its own file
//! to keep the logic separated and maintainable.
//!
//! Each command module contains an `Args` struct that defines the
//! command-specific arguments and options, derived using `clap`, and an
//! `execute` function that takes the parsed `Args` and performs the
//! command's logic by calling into the `monoweld` library.

use monoweld::output::OutputConfig;

pub mod clone;
pub mod info;

/// Build the shared output configuration from the global `--color` flag.
pub fn output_config(color_flag: &str) -> OutputConfig {
    OutputConfig::from_env_and_flag(color_flag)
}
