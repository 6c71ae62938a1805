//! # Monorepo Assembly
//!
//! The [`Assembler`] builds one new repository out of several source
//! repositories:
//!
//! 1. Check all source names for case-insensitive collisions (before any
//!    filesystem effect).
//! 2. Create the destination repository.
//! 3. Create the hidden `.repos/` staging directory inside it.
//! 4. Clone each source into `.repos/<name>`, in input order.
//! 5. Copy each staged working tree into `destination/<name>` and remove
//!    the copy's `.git` directory.
//!
//! Sources are processed strictly sequentially, one git process at a time.
//! A failure aborts the whole call; partially assembled state is left on
//! disk for inspection, and re-running with `force` rebuilds from scratch.

use std::fs;
use std::path::Path;
use std::sync::Arc;

use crate::error::{Error, Result};
use crate::fsops;
use crate::git::GitCapability;
use crate::monorepo::Monorepo;
use crate::repo::GitRepo;

/// Name of the hidden staging directory holding the full per-source clones.
pub const STAGING_DIR: &str = ".repos";

/// Options controlling an assembly run.
#[derive(Debug, Clone)]
pub struct AssembleOptions {
    /// Destroy an existing destination before assembling.
    pub force: bool,
    /// Clone sources with `--depth 1`, retrieving only the latest state.
    pub shallow: bool,
}

impl Default for AssembleOptions {
    fn default() -> Self {
        Self {
            force: false,
            shallow: true,
        }
    }
}

/// Builds monorepos from ordered `(name, location)` source lists.
pub struct Assembler {
    git: Arc<dyn GitCapability>,
}

impl Assembler {
    /// Create an assembler around a version-control capability.
    pub fn new(git: Arc<dyn GitCapability>) -> Self {
        Self { git }
    }

    /// Assemble the given sources into a new monorepo at `dest`.
    ///
    /// `sources` is an ordered sequence of `(name, location)` pairs; the
    /// order is the processing order. Locations are anything git can clone
    /// (local paths or remote URLs).
    ///
    /// Fail-fast with no rollback: if a step fails after some sources were
    /// staged, the destination is left on disk as-is. Callers needing a
    /// clean slate re-run with `force`, which destroys the previous
    /// destination first.
    pub fn assemble(
        &self,
        sources: &[(String, String)],
        dest: &Path,
        opts: &AssembleOptions,
    ) -> Result<Monorepo> {
        check_name_collisions(sources)?;

        let anchor = GitRepo::init(self.git.clone(), dest, opts.force)?;

        // A fresh init just created dest, so this only fails on filesystem
        // corruption or a concurrent writer.
        let staging = dest.join(STAGING_DIR);
        fs::create_dir(&staging).map_err(|e| Error::Assembly {
            name: None,
            message: format!(
                "failed to create staging directory {}: {}",
                staging.display(),
                e
            ),
        })?;

        let mut repos = Vec::with_capacity(sources.len());
        for (name, location) in sources {
            log::info!("cloning '{}' from {}", name, location);
            let repo = GitRepo::clone(
                self.git.clone(),
                location,
                staging.join(name),
                false,
                opts.shallow,
            )
            .map_err(|e| Error::Assembly {
                name: Some(name.clone()),
                message: e.to_string(),
            })?;
            repos.push((name.clone(), repo));
        }

        for (name, repo) in &repos {
            log::info!("composing working tree for '{}'", name);
            let target = dest.join(name);
            fsops::copy_tree(repo.root(), &target)
                .and_then(|()| fsops::remove_repo_metadata(&target))
                .map_err(|e| Error::Assembly {
                    name: Some(name.clone()),
                    message: e.to_string(),
                })?;
        }

        Ok(Monorepo::from_parts(dest.to_path_buf(), anchor, repos))
    }
}

/// Reject source lists in which two names would land in the same directory
/// on a case-insensitive filesystem. Runs before any clone is attempted.
fn check_name_collisions(sources: &[(String, String)]) -> Result<()> {
    for (i, (first, _)) in sources.iter().enumerate() {
        let normalized = normalize_name(first);
        for (second, _) in &sources[i + 1..] {
            if normalize_name(second) == normalized {
                return Err(Error::NameCollision {
                    first: first.clone(),
                    second: second.clone(),
                });
            }
        }
    }
    Ok(())
}

/// Case-insensitive filesystem normalization for repository names.
fn normalize_name(name: &str) -> String {
    name.to_lowercase()
}

/// Derive a repository name from a clone source.
///
/// Takes the final path segment with any trailing slash and `.git` suffix
/// stripped, so `https://host/org/widgets.git` and `/srv/git/widgets/`
/// both name the `widgets` directory.
pub fn name_from_source(source: &str) -> String {
    let trimmed = source.trim_end_matches('/');
    let segment = trimmed.rsplit('/').next().unwrap_or(trimmed);
    let name = segment.strip_suffix(".git").unwrap_or(segment);
    if name.is_empty() {
        segment.to_string()
    } else {
        name.to_string()
    }
}
