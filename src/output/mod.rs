//! Output abstraction layer for separating IO from business logic.
//!
//! Commands accept `&mut dyn Output` and use its methods instead of direct
//! `println!` or `eprintln!` calls:
//!
//! ```ignore
//! pub fn report(merged: &[RemoteBranchRef], output: &mut dyn Output) {
//!     output.step(&format!("{} merged branches", merged.len()));
//!     for branch in merged {
//!         output.result(&format!("  {branch}"));
//!     }
//! }
//! ```

mod cli;

pub use cli::CliOutput;
pub use test::{OutputEntry, TestOutput};

/// Configuration for output behavior.
#[derive(Debug, Clone, Default)]
pub struct OutputConfig {
    /// Suppress most output when true.
    pub quiet: bool,
    /// Enable debug/verbose output when true.
    pub verbose: bool,
}

impl OutputConfig {
    pub fn new(quiet: bool, verbose: bool) -> Self {
        Self { quiet, verbose }
    }
}

/// Where a sweep's messages go.
///
/// `quiet` silences results and steps; `verbose` adds steps and debug lines.
/// Warnings and errors are always shown.
pub trait Output {
    /// Display a final result message.
    /// The primary output shown in default mode.
    fn result(&mut self, msg: &str);

    /// Display an intermediate step message.
    /// Only shown in verbose mode.
    fn step(&mut self, msg: &str);

    /// Display a warning message to stderr.
    /// Always shown (not affected by quiet mode).
    fn warning(&mut self, msg: &str);

    /// Display an error message to stderr.
    /// Always shown (not affected by quiet mode).
    fn error(&mut self, msg: &str);

    /// Display a debug message.
    /// Only shown in verbose mode.
    fn debug(&mut self, msg: &str);
}
