/// Command modules for git-sweep
///
/// Each module parses its own arguments and drives the core logic.
pub mod sweep;
