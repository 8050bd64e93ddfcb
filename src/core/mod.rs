//! Core sweep logic.
//!
//! This module defines the traits that let the sweep report progress and ask
//! for confirmation without depending on a specific UI (CLI, tests, etc.).

pub mod delete;
pub mod inspect;
mod progress;
pub mod refs;
pub mod sweep;

#[cfg(test)]
pub(crate) mod fake;

pub use progress::{AssumeYes, OutputSink};

#[cfg(test)]
pub(crate) use progress::ScriptedPrompt;

use anyhow::Result;

// ─────────────────────────────────────────────────────────────────────────
// Progress reporting
// ─────────────────────────────────────────────────────────────────────────

/// Trait for core operations to report progress without depending on `Output`.
///
/// Commands create an adapter (e.g., `OutputSink`) that bridges this trait
/// to the actual output implementation. Tests can use `NullSink` to suppress
/// all output.
pub trait ProgressSink {
    /// Report primary output the user always sees (unless quiet).
    fn on_result(&mut self, msg: &str);

    /// Report an intermediate step (shown in verbose mode).
    fn on_step(&mut self, msg: &str);

    /// Report a warning (always shown).
    fn on_warning(&mut self, msg: &str);

    /// Report a debug message (shown in verbose mode).
    fn on_debug(&mut self, msg: &str);
}

/// A no-op sink that discards all progress messages.
pub struct NullSink;

impl ProgressSink for NullSink {
    fn on_result(&mut self, _msg: &str) {}
    fn on_step(&mut self, _msg: &str) {}
    fn on_warning(&mut self, _msg: &str) {}
    fn on_debug(&mut self, _msg: &str) {}
}

// ─────────────────────────────────────────────────────────────────────────
// Confirmation
// ─────────────────────────────────────────────────────────────────────────

/// Asks the user a yes/no question before anything is deleted.
///
/// The command layer supplies a terminal implementation; `--force` uses
/// `AssumeYes`; tests script the answers.
pub trait Prompt {
    fn confirm(&mut self, question: &str) -> Result<bool>;
}
