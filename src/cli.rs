//! CLI argument parsing and command dispatch

use anyhow::Result;
use clap::{Parser, Subcommand};

use crate::commands;

/// Monoweld - Assemble a monorepo from independent git repositories
#[derive(Parser, Debug)]
#[command(name = "monoweld")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Subcommand to execute
    #[command(subcommand)]
    command: Commands,

    /// Colorize output (always, never, auto)
    #[arg(long, global = true, value_name = "WHEN", default_value = "auto")]
    color: String,

    /// Set log level (error, warn, info, debug, trace)
    #[arg(long, global = true, value_name = "LEVEL", default_value = "warn")]
    log_level: String,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Create a new monorepo from existing repositories
    Clone(commands::clone::CloneArgs),

    /// Show version information
    Info(commands::info::InfoArgs),
}

impl Cli {
    /// Execute the CLI command
    pub fn execute(self) -> Result<()> {
        // try_init so repeated invocations in-process (tests) don't panic
        let _ = env_logger::Builder::from_env(
            env_logger::Env::default().default_filter_or(self.log_level.as_str()),
        )
        .try_init();

        let output = crate::commands::output_config(&self.color);

        match self.command {
            Commands::Clone(args) => commands::clone::execute(args, &output),
            Commands::Info(args) => commands::info::execute(args, &output),
        }
    }
}
