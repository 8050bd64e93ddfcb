//! Git config-based settings for git-sweep.
//!
//! Settings are loaded from git's layered config system (local → global)
//! with built-in defaults as fallback. Command-line flags override them.
//!
//! # Config Keys
//!
//! | Key | Default | Description |
//! |-----|---------|-------------|
//! | `sweep.remote` | `"origin"` | Remote to clean up |
//! | `sweep.master` | `"master"` | Branch other branches must be merged into |
//! | `sweep.skip` | (none) | Comma-separated branches never to delete; may repeat |
//! | `sweep.fetch` | `true` | Fetch from the remote before inspecting |
//! | `sweep.jobs` | `1` | Concurrent `git cherry` comparisons |
//!
//! # Example
//!
//! ```bash
//! # This project integrates into main
//! git config sweep.master main
//!
//! # Never sweep long-lived branches
//! git config --add sweep.skip develop,release
//! ```

use crate::error::SweepResult;
use crate::git::GitCommand;

/// Default values for settings.
pub mod defaults {
    pub const REMOTE: &str = "origin";
    pub const MASTER: &str = "master";
    pub const FETCH: bool = true;
    pub const JOBS: usize = 1;
}

/// Git config keys for git-sweep settings.
pub mod keys {
    pub const REMOTE: &str = "sweep.remote";
    pub const MASTER: &str = "sweep.master";
    pub const SKIP: &str = "sweep.skip";
    pub const FETCH: &str = "sweep.fetch";
    pub const JOBS: &str = "sweep.jobs";
}

/// User-configurable settings for git-sweep.
///
/// Settings are loaded from git config with the following priority:
/// 1. Repository-local config (`git config sweep.x`)
/// 2. Global config (`git config --global sweep.x`)
/// 3. Built-in defaults
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SweepSettings {
    pub remote: String,
    pub master: String,
    pub skips: Vec<String>,
    pub fetch: bool,
    pub jobs: usize,
}

impl Default for SweepSettings {
    fn default() -> Self {
        Self {
            remote: defaults::REMOTE.to_string(),
            master: defaults::MASTER.to_string(),
            skips: Vec::new(),
            fetch: defaults::FETCH,
            jobs: defaults::JOBS,
        }
    }
}

impl SweepSettings {
    /// Load settings from git config (local + global).
    pub fn load(git: &GitCommand) -> SweepResult<Self> {
        let mut settings = Self::default();

        if let Some(value) = git.config_get(keys::REMOTE)? {
            if !value.is_empty() {
                settings.remote = value;
            }
        }

        if let Some(value) = git.config_get(keys::MASTER)? {
            if !value.is_empty() {
                settings.master = value;
            }
        }

        for value in git.config_get_all(keys::SKIP)? {
            settings.skips.extend(split_skips(&value));
        }

        if let Some(value) = git.config_get(keys::FETCH)? {
            settings.fetch = parse_bool(&value, defaults::FETCH);
        }

        if let Some(value) = git.config_get(keys::JOBS)? {
            settings.jobs = parse_jobs(&value, defaults::JOBS);
        }

        Ok(settings)
    }
}

/// Split a comma-separated skip list, trimming names and dropping empties.
pub fn split_skips(value: &str) -> Vec<String> {
    value
        .split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(String::from)
        .collect()
}

fn parse_bool(value: &str, default: bool) -> bool {
    match value.to_lowercase().as_str() {
        "true" | "yes" | "on" | "1" => true,
        "false" | "no" | "off" | "0" => false,
        _ => default,
    }
}

fn parse_jobs(value: &str, default: usize) -> usize {
    match value.trim().parse::<usize>() {
        Ok(0) | Err(_) => default,
        Ok(n) => n,
    }
}
