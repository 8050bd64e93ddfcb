use super::{validate_name, GitCommand};
use crate::error::SweepResult;

impl GitCommand {
    /// List all configured remotes.
    pub fn remote_list(&self) -> SweepResult<Vec<String>> {
        let stdout = self.execute(&["remote"])?;

        Ok(stdout
            .lines()
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .collect())
    }

    pub fn fetch(&self, remote: &str) -> SweepResult<()> {
        validate_name(remote)?;

        let mut args = vec!["fetch", remote];
        if self.quiet {
            args.push("--quiet");
        }

        self.execute(&args).map(|_| ())
    }

    /// Branch heads as the remote itself reports them, one
    /// `<object-id>\trefs/heads/<name>` line each.
    pub fn ls_remote_heads(&self, remote: &str) -> SweepResult<String> {
        validate_name(remote)?;
        self.execute(&["ls-remote", "--heads", remote])
    }

    /// Delete a remote branch by pushing the empty source to
    /// `refs/heads/<branch>`. The full ref keeps a tag of the same name
    /// from making the push ambiguous.
    pub fn push_delete(&self, remote: &str, branch: &str) -> SweepResult<()> {
        validate_name(remote)?;
        validate_name(branch)?;

        let refspec = format!(":refs/heads/{branch}");
        let mut args = vec!["push", "--no-verify", remote, refspec.as_str()];
        if self.quiet {
            args.push("--quiet");
        }

        self.execute(&args).map(|_| ())
    }
}
