use crate::error::{SweepError, SweepResult};
use std::path::{Path, PathBuf};
use std::process::{Command, Output, Stdio};

mod config;
mod refs;
mod remote;

/// Runs `git` subcommands against one working directory.
///
/// Every method spawns a fresh process with stdin closed and blocks until it
/// exits. A non-zero exit becomes `SweepError::RepositoryAccess` unless the
/// method documents otherwise. Nothing is retried.
#[derive(Debug, Clone)]
pub struct GitCommand {
    pub(crate) quiet: bool,
    pub(crate) work_dir: PathBuf,
}

impl GitCommand {
    pub fn new(work_dir: impl Into<PathBuf>) -> Self {
        Self {
            quiet: false,
            work_dir: work_dir.into(),
        }
    }

    pub fn with_quiet(mut self, quiet: bool) -> Self {
        self.quiet = quiet;
        self
    }

    pub fn work_dir(&self) -> &Path {
        &self.work_dir
    }

    fn command(&self, args: &[&str]) -> Command {
        let mut cmd = Command::new("git");
        cmd.args(args)
            .current_dir(&self.work_dir)
            .stdin(Stdio::null());
        cmd
    }

    /// Run git and return the raw process output, whatever the exit status.
    pub(crate) fn output(&self, args: &[&str]) -> SweepResult<Output> {
        self.command(args)
            .output()
            .map_err(|e| SweepError::spawn_failed(args, e))
    }

    /// Run git and return its standard output.
    pub fn execute(&self, args: &[&str]) -> SweepResult<String> {
        let output = self.output(args)?;

        if !output.status.success() {
            return Err(SweepError::command_failed(args, &output.stderr));
        }

        String::from_utf8(output.stdout).map_err(|_| {
            SweepError::RepositoryAccess(format!(
                "Failed to parse git {} output as UTF-8",
                args.join(" ")
            ))
        })
    }
}

/// What `git cherry <upstream> <head>` said about `head`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Cherry {
    /// Every commit on `head` has a patch-equivalent commit on `upstream`.
    Equivalent,
    /// At least one commit on `head` is missing from `upstream`.
    Ahead,
    /// git could not compare the refs; carries its stderr.
    Failed(String),
}

/// The git operations a sweep needs.
///
/// `GitCommand` is the real implementation. The sweep logic only talks to
/// this trait, so it can be driven by an in-memory repository in tests.
pub trait RemoteGateway {
    /// Directory the operations run in.
    fn work_dir(&self) -> &Path;

    /// Names of the configured remotes (`git remote`).
    fn remote_list(&self) -> SweepResult<Vec<String>>;

    /// Raw `git ls-remote --heads <remote>` output.
    fn ls_remote_heads(&self, remote: &str) -> SweepResult<String>;

    /// Download objects and refs from `remote`.
    fn fetch(&self, remote: &str) -> SweepResult<()>;

    /// Compare `head` against `upstream` by patch identity.
    ///
    /// A comparison git refuses is [`Cherry::Failed`]; only a failure to run
    /// git at all is an error.
    fn cherry(&self, upstream: &str, head: &str) -> SweepResult<Cherry>;

    /// Delete `branch` on `remote`.
    fn push_delete(&self, remote: &str, branch: &str) -> SweepResult<()>;
}

impl RemoteGateway for GitCommand {
    fn work_dir(&self) -> &Path {
        GitCommand::work_dir(self)
    }

    fn remote_list(&self) -> SweepResult<Vec<String>> {
        GitCommand::remote_list(self)
    }

    fn ls_remote_heads(&self, remote: &str) -> SweepResult<String> {
        GitCommand::ls_remote_heads(self, remote)
    }

    fn fetch(&self, remote: &str) -> SweepResult<()> {
        GitCommand::fetch(self, remote)
    }

    fn cherry(&self, upstream: &str, head: &str) -> SweepResult<Cherry> {
        GitCommand::cherry(self, upstream, head)
    }

    fn push_delete(&self, remote: &str, branch: &str) -> SweepResult<()> {
        GitCommand::push_delete(self, remote, branch)
    }
}

/// Reject names git would parse as something other than a ref or remote.
///
/// Arguments go to git without a shell, so no quoting is needed; the danger
/// is a leading `-` turning a branch name into an option.
pub(crate) fn validate_name(name: &str) -> SweepResult<()> {
    let reason = if name.is_empty() {
        "name is empty"
    } else if name.starts_with('-') {
        "name starts with '-'"
    } else if name.chars().any(|c| c.is_whitespace() || c.is_control()) {
        "name contains whitespace or control characters"
    } else {
        return Ok(());
    };

    Err(SweepError::InvalidName {
        name: name.to_string(),
        reason: reason.to_string(),
    })
}
