//! # Monoweld Library
//!
//! This library provides the core functionality for assembling a monorepo
//! from multiple independent git repositories. It is designed to be used by
//! the `monoweld` command-line tool but can also be integrated into other
//! applications that need one-shot working-tree composition.
//!
//! ## Quick Example
//!
//! ```no_run
//! use std::path::Path;
//! use std::sync::Arc;
//! use monoweld::assemble::{Assembler, AssembleOptions};
//! use monoweld::git::SystemGit;
//!
//! let assembler = Assembler::new(Arc::new(SystemGit::new()));
//! let sources = vec![
//!     ("widgets".to_string(), "https://host/org/widgets.git".to_string()),
//!     ("gadgets".to_string(), "https://host/org/gadgets.git".to_string()),
//! ];
//!
//! let monorepo = assembler
//!     .assemble(&sources, Path::new("combined"), &AssembleOptions::default())
//!     .unwrap();
//!
//! // combined/widgets/ and combined/gadgets/ now hold the working trees;
//! // combined/.repos/ retains the full staging clones.
//! assert_eq!(monorepo.len(), 2);
//! ```
//!
//! ## Core Concepts
//!
//! - **Repository Handle (`repo`)**: a validated reference to a local git
//!   repository, and the only type that issues version-control operations.
//! - **Assembler (`assemble`)**: orchestrates destination creation, staged
//!   cloning under the hidden `.repos/` directory, and working-tree
//!   composition with metadata stripped.
//! - **Monorepo Handle (`monorepo`)**: an ordered name→handle mapping over
//!   an assembled tree, for subsequent inspection.
//! - **Capability (`git`, `process`)**: the `GitCapability` trait wraps the
//!   system git binary behind an injectable seam; `process` enforces the
//!   per-operation time budget.
//!
//! Source history is deliberately discarded: the assembled tree carries the
//! latest working trees only, while the staging clones remain on disk as
//! the retained clone records. There is no ongoing synchronization back to
//! the sources.

pub mod assemble;
pub mod error;
pub mod fsops;
pub mod git;
pub mod monorepo;
pub mod output;
pub mod process;
pub mod repo;
