//! # Info Command Implementation
//!
//! The `info` subcommand prints the tool's version string and the git
//! binary the tool would use. This is a safe, read-only operation.

use anyhow::Result;
use clap::Args;

use monoweld::git::SystemGit;
use monoweld::output::{emoji, OutputConfig};

/// Arguments for the info command
#[derive(Args, Debug)]
pub struct InfoArgs {}

/// Execute the `info` command.
pub fn execute(_args: InfoArgs, output: &OutputConfig) -> Result<()> {
    println!(
        "{} monoweld - version {}",
        emoji(output, "📋", "[INFO]"),
        env!("CARGO_PKG_VERSION")
    );

    match SystemGit::locate() {
        Some(program) => println!("  git: {}", program.display()),
        None => println!("  git: not found on PATH"),
    }

    Ok(())
}
