//! # Error Handling
//!
//! This module defines the centralized error handling mechanism for the
//! `monoweld` application. It uses the `thiserror` library to create a
//! comprehensive `Error` enum that covers all anticipated failure modes,
//! providing clear and descriptive error messages.
//!
//! ## Key Components
//!
//! - **`Error`**: The main enum that represents all possible errors that can
//!   occur within the application. Each variant corresponds to a specific
//!   type of error and includes contextual information to aid in debugging.
//!
//! - **`Result<T>`**: A type alias for `std::result::Result<T, Error>`, used
//!   throughout the application to simplify function signatures and ensure
//!   type safety.
//!
//! Git-level failures are surfaced as the tool's combined diagnostic text;
//! beyond the commit-header pattern used for counting, no attempt is made to
//! parse git's own error messages into structured fields.

use thiserror::Error;

/// Main error type for monoweld operations
#[derive(Error, Debug)]
pub enum Error {
    /// A path that was expected to exist is absent.
    #[error("Path not found: {path}")]
    NotFound { path: String },

    /// A path exists but does not contain a `.git` directory.
    #[error("Not a git repository: {path}")]
    NotARepository { path: String },

    /// A destination path already exists and `force` was not requested.
    #[error("Repository {path} already exists. Use `force` to overwrite")]
    AlreadyExists { path: String },

    /// A `git clone` invocation failed.
    ///
    /// Includes the clone source, the tool's combined diagnostic output, and
    /// an optional hint for resolution.
    #[error("Git clone error for {origin}: {message}{}", hint.as_ref().map(|h| format!("\n  hint: {}", h)).unwrap_or_default())]
    Clone {
        /// The clone source (local path or remote URL)
        origin: String,
        message: String,
        /// Optional hint for how to resolve the clone issue
        hint: Option<String>,
    },

    /// Two source names normalize to the same directory name.
    #[error("Repository names '{first}' and '{second}' collide after case-insensitive normalization")]
    NameCollision { first: String, second: String },

    /// A monorepo assembly step failed.
    ///
    /// When a specific source repository is responsible, `name` identifies it.
    #[error("Assembly error{}: {message}", name.as_ref().map(|n| format!(" for source '{}'", n)).unwrap_or_default())]
    Assembly {
        /// The source repository that failed, if the failure is attributable
        name: Option<String>,
        message: String,
    },

    /// A git invocation exceeded its time budget and was forcibly terminated.
    ///
    /// The output accumulated before termination is retained.
    #[error("Git command timed out: {command}\n{partial}")]
    Timeout { command: String, partial: String },

    /// An I/O error, wrapped from `std::io::Error`.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// A convenient type alias for `Result<T, Error>`.
pub type Result<T> = std::result::Result<T, Error>;
