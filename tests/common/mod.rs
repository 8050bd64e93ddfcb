//! Shared fixtures: a shared "server" repository and a clone of it.
#![allow(dead_code)]

use anyhow::{bail, Context, Result};
use git_sweep::core::Prompt;
use std::path::{Path, PathBuf};
use std::process::Command;
use tempfile::TempDir;

/// Run git in `dir`, failing on a nonzero exit. Returns trimmed stdout.
pub fn git(dir: &Path, args: &[&str]) -> Result<String> {
    let output = Command::new("git")
        .args(args)
        .current_dir(dir)
        .env("GIT_TERMINAL_PROMPT", "0")
        .output()
        .with_context(|| format!("Failed to spawn git {args:?}"))?;

    if !output.status.success() {
        bail!(
            "git {:?} failed in {}: {}",
            args,
            dir.display(),
            String::from_utf8_lossy(&output.stderr)
        );
    }

    Ok(String::from_utf8_lossy(&output.stdout).trim().to_string())
}

fn configure_identity(dir: &Path) -> Result<()> {
    git(dir, &["config", "user.name", "Sweep Tester"])?;
    git(dir, &["config", "user.email", "sweep@example.com"])?;
    git(dir, &["config", "commit.gpgsign", "false"])?;
    Ok(())
}

/// A non-bare repository acting as the remote, plus a clone of it whose
/// `origin` points back at it.
pub struct Fixture {
    _server_dir: TempDir,
    _clone_dir: TempDir,
    pub server: PathBuf,
    pub clone: PathBuf,
}

impl Fixture {
    pub fn new() -> Result<Self> {
        let server_dir = TempDir::new()?;
        let clone_dir = TempDir::new()?;
        let server = server_dir.path().to_path_buf();

        git(&server, &["init", "--quiet"])?;
        git(&server, &["symbolic-ref", "HEAD", "refs/heads/master"])?;
        configure_identity(&server)?;
        make_commit(&server, "README.md", "# sweep me\n", "Initial commit")?;

        let clone = clone_dir.path().join("clone");
        let clone_str = clone.to_str().context("Non UTF-8 temp path")?;
        let server_str = server.to_str().context("Non UTF-8 temp path")?;
        git(clone_dir.path(), &["clone", "--quiet", server_str, clone_str])?;
        configure_identity(&clone)?;

        Ok(Self {
            _server_dir: server_dir,
            _clone_dir: clone_dir,
            server,
            clone,
        })
    }

    /// Create `name` on the server from master with one commit touching
    /// `file`, then return the server to master.
    pub fn add_branch(&self, name: &str, file: &str) -> Result<()> {
        git(&self.server, &["checkout", "--quiet", "-b", name, "master"])?;
        make_commit(&self.server, file, &format!("{name}\n"), &format!("Work on {name}"))?;
        git(&self.server, &["checkout", "--quiet", "master"])?;
        Ok(())
    }

    /// Merge `name` into master on the server with a merge commit.
    pub fn merge(&self, name: &str) -> Result<()> {
        git(&self.server, &["merge", "--quiet", "--no-ff", "--no-edit", name])?;
        Ok(())
    }

    /// Fast-forward master on the server to `name`.
    pub fn fast_forward(&self, name: &str) -> Result<()> {
        git(&self.server, &["merge", "--quiet", "--ff-only", name])?;
        Ok(())
    }

    /// Re-apply the tip commit of `name` onto master, as a rebase-merge
    /// would, giving it a new commit id.
    pub fn cherry_pick(&self, name: &str) -> Result<()> {
        git(&self.server, &["cherry-pick", name])?;
        Ok(())
    }

    /// Squash-merge `name` into master on the server.
    pub fn squash_merge(&self, name: &str) -> Result<()> {
        git(&self.server, &["merge", "--quiet", "--squash", name])?;
        git(&self.server, &["commit", "--quiet", "-m", &format!("Squash {name}")])?;
        Ok(())
    }

    /// Branch names the server currently has, sorted.
    pub fn server_branches(&self) -> Result<Vec<String>> {
        let listing = git(
            &self.server,
            &["for-each-ref", "--format=%(refname:short)", "refs/heads/"],
        )?;
        let mut names: Vec<String> = listing.lines().map(String::from).collect();
        names.sort();
        Ok(names)
    }
}

/// Answers every confirmation with the same canned reply and counts the
/// questions.
pub struct Answer {
    pub reply: bool,
    pub asked: usize,
}

impl Answer {
    pub fn new(reply: bool) -> Self {
        Self { reply, asked: 0 }
    }
}

impl Prompt for Answer {
    fn confirm(&mut self, _question: &str) -> anyhow::Result<bool> {
        self.asked += 1;
        Ok(self.reply)
    }
}

/// Write `contents` to `file` and commit it.
pub fn make_commit(dir: &Path, file: &str, contents: &str, message: &str) -> Result<()> {
    std::fs::write(dir.join(file), contents)?;
    git(dir, &["add", file])?;
    git(dir, &["commit", "--quiet", "-m", message])?;
    Ok(())
}
