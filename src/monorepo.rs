//! # Monorepo Handle
//!
//! [`Monorepo`] is a read-access façade over an assembled monorepo: the
//! combined repository at `base_path` plus an ordered mapping from source
//! repository name to the [`GitRepo`] handle of its retained staging clone.
//!
//! The mapping is an explicit ordered sequence of pairs, so iteration order
//! is part of the contract rather than an incidental property of a map
//! type. It is fully populated only when the handle is produced by
//! [`Assembler::assemble`](crate::assemble::Assembler::assemble); a handle
//! opened over an existing directory anchors the combined repository but
//! does not re-discover per-source subdirectories.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use crate::error::{Error, Result};
use crate::git::GitCapability;
use crate::repo::GitRepo;

/// A handle over an assembled monorepo.
#[derive(Debug)]
pub struct Monorepo {
    base_path: PathBuf,
    anchor: GitRepo,
    repos: Vec<(String, GitRepo)>,
}

impl Monorepo {
    /// Open an existing assembled monorepo at `base_path`.
    ///
    /// Fails with [`Error::NotFound`] if the path is missing; the path must
    /// itself be a valid repository root. The per-source mapping starts
    /// empty; it is only populated by assembly in the same process.
    pub fn open(git: Arc<dyn GitCapability>, base_path: impl Into<PathBuf>) -> Result<Self> {
        let base_path = base_path.into();
        if !base_path.exists() {
            return Err(Error::NotFound {
                path: base_path.display().to_string(),
            });
        }
        let anchor = GitRepo::open(git, &base_path)?;
        Ok(Self {
            base_path,
            anchor,
            repos: Vec::new(),
        })
    }

    pub(crate) fn from_parts(
        base_path: PathBuf,
        anchor: GitRepo,
        repos: Vec<(String, GitRepo)>,
    ) -> Self {
        Self {
            base_path,
            anchor,
            repos,
        }
    }

    /// The monorepo root.
    pub fn base_path(&self) -> &Path {
        &self.base_path
    }

    /// Handle over the combined repository itself.
    pub fn anchor(&self) -> &GitRepo {
        &self.anchor
    }

    /// Look up the staging-clone handle for a source repository by name.
    pub fn get(&self, name: &str) -> Option<&GitRepo> {
        self.repos
            .iter()
            .find(|(repo_name, _)| repo_name == name)
            .map(|(_, repo)| repo)
    }

    /// Source repository names, in assembly order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.repos.iter().map(|(name, _)| name.as_str())
    }

    /// Iterate over `(name, handle)` pairs in assembly order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &GitRepo)> {
        self.repos
            .iter()
            .map(|(name, repo)| (name.as_str(), repo))
    }

    /// Number of source repositories known to this handle.
    pub fn len(&self) -> usize {
        self.repos.len()
    }

    /// Whether this handle knows about any source repositories.
    pub fn is_empty(&self) -> bool {
        self.repos.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use std::sync::Arc;
    use tempfile::TempDir;

    struct NoopGit;

    impl GitCapability for NoopGit {
        fn init(&self, _path: &Path) -> Result<String> {
            Ok(String::new())
        }
        fn clone_repo(&self, _source: &str, _dest: &Path, _depth: Option<u32>) -> Result<String> {
            Ok(String::new())
        }
        fn add(&self, _repo: &Path, _paths: &[PathBuf]) -> Result<String> {
            Ok(String::new())
        }
        fn commit(&self, _repo: &Path, _message: &str, _stage_all: bool) -> Result<String> {
            Ok(String::new())
        }
        fn log(&self, _repo: &Path) -> Result<String> {
            Ok(String::new())
        }
    }

    #[test]
    fn test_open_missing_base_path() {
        let temp = TempDir::new().unwrap();
        let err = Monorepo::open(Arc::new(NoopGit), temp.path().join("missing")).unwrap_err();
        assert!(matches!(err, Error::NotFound { .. }));
    }

    #[test]
    fn test_open_base_path_must_be_repository() {
        let temp = TempDir::new().unwrap();
        let base = temp.path().join("base");
        fs::create_dir(&base).unwrap();
        let err = Monorepo::open(Arc::new(NoopGit), &base).unwrap_err();
        assert!(matches!(err, Error::NotARepository { .. }));
    }

    #[test]
    fn test_open_starts_with_empty_mapping() {
        let temp = TempDir::new().unwrap();
        let base = temp.path().join("base");
        fs::create_dir_all(base.join(".git")).unwrap();
        let monorepo = Monorepo::open(Arc::new(NoopGit), &base).unwrap();
        assert!(monorepo.is_empty());
        assert!(monorepo.get("anything").is_none());
        assert_eq!(monorepo.base_path(), base.as_path());
    }
}
