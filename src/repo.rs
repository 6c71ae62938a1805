//! # Repository Handle
//!
//! [`GitRepo`] is a validated reference to a local git repository and the
//! only type through which version-control operations are issued. A handle
//! is obtained either by opening an existing repository directory or through
//! the `init`/`clone` factories, which create the directory (and metadata)
//! as a side effect and return an open handle.
//!
//! Validity invariant: at construction time the root path exists and
//! contains a `.git` directory, otherwise construction fails with
//! [`Error::NotFound`] or [`Error::NotARepository`].

use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::{Arc, OnceLock};

use regex::Regex;

use crate::error::{Error, Result};
use crate::git::GitCapability;

/// Matches a git log commit header: the `commit` keyword, a hexadecimal
/// identifier, and nothing else on the line. Message bodies are indented in
/// log output, so header-shaped text inside a message never matches.
fn commit_header() -> &'static Regex {
    static COMMIT_HEADER: OnceLock<Regex> = OnceLock::new();
    COMMIT_HEADER.get_or_init(|| {
        Regex::new(r"^commit\s+[0-9a-f]+\s*$").expect("commit header pattern is valid")
    })
}

/// A handle to a local git repository.
///
/// Cheap to construct; every operation spawns one git process through the
/// injected [`GitCapability`]. Two handles compare equal when their full
/// log texts are identical.
pub struct GitRepo {
    root: PathBuf,
    git: Arc<dyn GitCapability>,
}

impl GitRepo {
    /// Open an existing repository at `root`.
    ///
    /// Validation only; no side effects. Fails with [`Error::NotFound`] if
    /// the path is missing and [`Error::NotARepository`] if it exists but
    /// carries no `.git` directory.
    pub fn open(git: Arc<dyn GitCapability>, root: impl Into<PathBuf>) -> Result<Self> {
        let root = root.into();
        if !root.exists() {
            return Err(Error::NotFound {
                path: root.display().to_string(),
            });
        }
        if !root.join(".git").exists() {
            return Err(Error::NotARepository {
                path: root.display().to_string(),
            });
        }
        Ok(Self { root, git })
    }

    /// Create a new empty repository at `root` and return an open handle.
    ///
    /// If the path already exists this fails with [`Error::AlreadyExists`]
    /// unless `force` is set, in which case the existing path is destroyed
    /// first.
    pub fn init(git: Arc<dyn GitCapability>, root: impl Into<PathBuf>, force: bool) -> Result<Self> {
        let root = root.into();
        claim_path(&root, force)?;
        fs::create_dir_all(&root)?;
        let output = git.init(&root)?;
        log::debug!("git init {}: {}", root.display(), output.trim_end());
        Self::open(git, root)
    }

    /// Clone `source` into `dest` and return an open handle to the clone.
    ///
    /// Existence/`force` semantics match [`GitRepo::init`]. A shallow clone
    /// retrieves only the tip (`--depth 1`). A failed clone surfaces git's
    /// combined diagnostic output through [`Error::Clone`].
    pub fn clone(
        git: Arc<dyn GitCapability>,
        source: &str,
        dest: impl Into<PathBuf>,
        force: bool,
        shallow: bool,
    ) -> Result<Self> {
        let dest = dest.into();
        claim_path(&dest, force)?;
        if let Some(parent) = dest.parent() {
            fs::create_dir_all(parent)?;
        }
        let depth = if shallow { Some(1) } else { None };
        let output = git.clone_repo(source, &dest, depth)?;
        log::debug!("git clone {} -> {}: {}", source, dest.display(), output.trim_end());
        Self::open(git, dest)
    }

    /// The repository root.
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Stage the given paths for the next commit.
    ///
    /// Returns git's diagnostic text; the staging area mutation is the real
    /// effect.
    pub fn add(&self, paths: &[PathBuf]) -> Result<String> {
        self.git.add(&self.root, paths)
    }

    /// Create a commit with `message`.
    ///
    /// When `stage_all` is set, tracked modifications are staged first
    /// (`git commit -a`). A commit with nothing to commit does not fail;
    /// git's own explanation is returned as text.
    pub fn commit(&self, message: &str, stage_all: bool) -> Result<String> {
        self.git.commit(&self.root, message, stage_all)
    }

    /// The raw `git log` output, newest commit first.
    pub fn log(&self) -> Result<String> {
        self.git.log(&self.root)
    }

    /// Number of commits in the log.
    ///
    /// Counts lines matching the commit-header shape. This is the only
    /// structural inspection performed on log text and it tolerates
    /// arbitrary message content; a repository without commits yields 0.
    pub fn commit_count(&self) -> Result<usize> {
        let log = self.log()?;
        Ok(log
            .lines()
            .filter(|line| commit_header().is_match(line))
            .count())
    }
}

/// Prepare `path` for creation: error if it exists, or destroy it when
/// `force` is set.
fn claim_path(path: &Path, force: bool) -> Result<()> {
    if path.exists() {
        if force {
            fs::remove_dir_all(path)?;
        } else {
            return Err(Error::AlreadyExists {
                path: path.display().to_string(),
            });
        }
    }
    Ok(())
}

impl PartialEq for GitRepo {
    /// Content-based equality: both logs readable and byte-identical.
    fn eq(&self, other: &Self) -> bool {
        match (self.log(), other.log()) {
            (Ok(a), Ok(b)) => a == b,
            _ => false,
        }
    }
}

impl fmt::Debug for GitRepo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "<GitRepo [{}]>", self.root.display())
    }
}
