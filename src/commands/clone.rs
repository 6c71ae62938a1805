//! # Clone Command Implementation
//!
//! The `clone` subcommand assembles a new monorepo from one or more source
//! repositories:
//!
//! 1. Derive a repository name from each source location.
//! 2. Create the destination repository.
//! 3. Shallow-clone every source into the hidden `.repos/` staging area.
//! 4. Copy each working tree into `<dest>/<name>` with metadata stripped.

use std::path::PathBuf;
use std::sync::Arc;

use anyhow::Result;
use clap::Args;

use monoweld::assemble::{name_from_source, AssembleOptions, Assembler};
use monoweld::git::SystemGit;
use monoweld::output::{emoji, OutputConfig};

/// Arguments for the clone command
#[derive(Args, Debug)]
pub struct CloneArgs {
    /// Paths or URLs of the source repositories
    #[arg(value_name = "SOURCE", required = true, num_args = 1..)]
    pub sources: Vec<String>,

    /// The output monorepo directory
    #[arg(value_name = "DEST")]
    pub dest: PathBuf,

    /// Overwrite the destination if it already exists
    #[arg(short, long)]
    pub force: bool,

    /// Clone full history instead of the default depth-1 clones
    #[arg(long)]
    pub no_shallow: bool,

    /// Git binary to use instead of the one found on PATH
    #[arg(long, value_name = "PROGRAM", env = "MONOWELD_GIT")]
    pub git: Option<PathBuf>,
}

/// Execute the `clone` command.
pub fn execute(args: CloneArgs, output: &OutputConfig) -> Result<()> {
    // Resolve the git binary once, up front; every operation goes through
    // this one capability.
    let program = args
        .git
        .or_else(SystemGit::locate)
        .unwrap_or_else(|| PathBuf::from("git"));
    let git = Arc::new(SystemGit::with_program(program));

    let sources: Vec<(String, String)> = args
        .sources
        .iter()
        .map(|source| (name_from_source(source), source.clone()))
        .collect();

    let assembler = Assembler::new(git);
    let opts = AssembleOptions {
        force: args.force,
        shallow: !args.no_shallow,
    };

    let monorepo = assembler.assemble(&sources, &args.dest, &opts)?;

    println!(
        "{} Assembled {} repositories into {}",
        emoji(output, "🔗", "[DONE]"),
        monorepo.len(),
        monorepo.base_path().display()
    );
    for name in monorepo.names() {
        println!("  • {}", name);
    }

    Ok(())
}
