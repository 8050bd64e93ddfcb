//! In-memory `RemoteGateway` for unit tests.

use crate::error::{SweepError, SweepResult};
use crate::git::{Cherry, RemoteGateway};
use std::collections::{HashMap, HashSet};
use std::path::{Path, PathBuf};
use std::sync::Mutex;

#[derive(Debug, Default)]
pub(crate) struct FakeGateway {
    work_dir: PathBuf,
    remotes: Vec<String>,
    heads: HashMap<String, String>,
    equivalent: HashSet<String>,
    failing_cherries: HashSet<String>,
    failing_deletes: HashSet<String>,
    calls: Mutex<Vec<String>>,
}

impl FakeGateway {
    pub(crate) fn new() -> Self {
        Self {
            work_dir: PathBuf::from("/work/repo"),
            ..Self::default()
        }
    }

    /// Add a remote whose `ls-remote --heads` lists `branches` in that order.
    pub(crate) fn with_remote(mut self, remote: &str, branches: &[&str]) -> Self {
        let listing = branches
            .iter()
            .enumerate()
            .map(|(i, b)| format!("{:040x}\trefs/heads/{b}\n", i + 1))
            .collect::<String>();
        self.remotes.push(remote.to_string());
        self.heads.insert(remote.to_string(), listing);
        self
    }

    /// Replace a remote's raw listing.
    pub(crate) fn with_listing(mut self, remote: &str, listing: &str) -> Self {
        if !self.remotes.iter().any(|r| r == remote) {
            self.remotes.push(remote.to_string());
        }
        self.heads.insert(remote.to_string(), listing.to_string());
        self
    }

    /// Mark `remote/branch` as fully patch-equivalent to the reference branch.
    pub(crate) fn with_merged(mut self, remote: &str, branches: &[&str]) -> Self {
        for b in branches {
            self.equivalent.insert(format!("{remote}/{b}"));
        }
        self
    }

    /// Make `git cherry` refuse to compare `branch` (unrelated history).
    pub(crate) fn with_failing_cherry(mut self, branch: &str) -> Self {
        self.failing_cherries.insert(branch.to_string());
        self
    }

    pub(crate) fn with_failing_delete(mut self, branch: &str) -> Self {
        self.failing_deletes.insert(branch.to_string());
        self
    }

    pub(crate) fn calls(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }

    pub(crate) fn calls_starting_with(&self, prefix: &str) -> Vec<String> {
        self.calls()
            .into_iter()
            .filter(|c| c.starts_with(prefix))
            .collect()
    }

    fn record(&self, call: String) {
        self.calls.lock().unwrap().push(call);
    }
}

impl RemoteGateway for FakeGateway {
    fn work_dir(&self) -> &Path {
        &self.work_dir
    }

    fn remote_list(&self) -> SweepResult<Vec<String>> {
        self.record("remote".to_string());
        Ok(self.remotes.clone())
    }

    fn ls_remote_heads(&self, remote: &str) -> SweepResult<String> {
        self.record(format!("ls-remote {remote}"));
        self.heads.get(remote).cloned().ok_or_else(|| {
            SweepError::RepositoryAccess(format!(
                "fatal: '{remote}' does not appear to be a git repository"
            ))
        })
    }

    fn fetch(&self, remote: &str) -> SweepResult<()> {
        self.record(format!("fetch {remote}"));
        Ok(())
    }

    fn cherry(&self, upstream: &str, head: &str) -> SweepResult<Cherry> {
        self.record(format!("cherry {upstream} {head}"));
        let branch = head.split_once('/').map_or(head, |(_, b)| b);
        if self.failing_cherries.contains(branch) {
            Ok(Cherry::Failed(format!(
                "fatal: no merge base between {upstream} and {head}"
            )))
        } else if self.equivalent.contains(head) {
            Ok(Cherry::Equivalent)
        } else {
            Ok(Cherry::Ahead)
        }
    }

    fn push_delete(&self, remote: &str, branch: &str) -> SweepResult<()> {
        self.record(format!("push-delete {remote} {branch}"));
        if self.failing_deletes.contains(branch) {
            return Err(SweepError::RepositoryAccess(format!(
                "git push --no-verify {remote} :refs/heads/{branch} failed: remote rejected"
            )));
        }
        Ok(())
    }
}
