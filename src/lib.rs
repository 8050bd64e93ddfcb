//! git-sweep: find remote branches already merged into an integration
//! branch, and delete them from the remote.

pub mod commands;
pub mod core;
pub mod error;
pub mod git;
pub mod logging;
pub mod output;
pub mod settings;

pub use error::{SweepError, SweepResult};

/// Clean version, used by clap attributes and the man page.
pub const VERSION: &str = env!("SWEEP_VERSION");

/// Version shown by `--version`; includes the commit hash for dev builds.
pub const VERSION_DISPLAY: &str = env!("SWEEP_VERSION_DISPLAY");
