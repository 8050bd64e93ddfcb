//! Error types for sweep operations.

use thiserror::Error;

/// Fatal failures of a sweep.
///
/// A branch that merely fails the patch-equivalence comparison is not an
/// error; the inspector reports it as "not merged" instead.
#[derive(Debug, Error)]
pub enum SweepError {
    /// The working directory is not a repository, or a git invocation
    /// exited non-zero (or could not be started at all).
    #[error("{0}")]
    RepositoryAccess(String),

    /// The requested remote is not configured in the repository.
    #[error("Could not find the remote named {0}")]
    MissingRemote(String),

    /// The reference branch is not among the remote's branches.
    #[error("Could not find ref for {0}")]
    MissingReferenceBranch(String),

    /// Pushing the deletion of a remote branch failed.
    #[error("Failed to delete {remote}/{branch}: {reason}")]
    DeletionFailed {
        remote: String,
        branch: String,
        reason: String,
    },

    /// A remote or branch name that git would misread as an option.
    #[error("invalid name '{name}': {reason}")]
    InvalidName { name: String, reason: String },
}

impl SweepError {
    /// The message the command line prints when run outside a repository.
    pub const NOT_A_REPOSITORY: &'static str = "This is not a Git repository";

    pub fn not_a_repository() -> Self {
        Self::RepositoryAccess(Self::NOT_A_REPOSITORY.to_string())
    }

    pub(crate) fn command_failed(args: &[&str], stderr: &[u8]) -> Self {
        let stderr = String::from_utf8_lossy(stderr);
        Self::RepositoryAccess(format!("git {} failed: {}", args.join(" "), stderr.trim()))
    }

    pub(crate) fn spawn_failed(args: &[&str], err: std::io::Error) -> Self {
        Self::RepositoryAccess(format!("Failed to execute git {}: {err}", args.join(" ")))
    }

    /// True for errors that mean "this is not a usable repository".
    pub fn is_repository_access(&self) -> bool {
        matches!(self, Self::RepositoryAccess(_))
    }
}

/// Convenience type alias for sweep operations.
pub type SweepResult<T> = std::result::Result<T, SweepError>;
