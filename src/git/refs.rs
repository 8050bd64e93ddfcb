use super::{validate_name, Cherry, GitCommand};
use crate::error::SweepResult;

impl GitCommand {
    /// Check if the working directory is inside any Git repository (work tree or bare).
    pub fn is_inside_git_repo(&self) -> SweepResult<bool> {
        let output = self.output(&["rev-parse", "--git-dir"])?;
        Ok(output.status.success())
    }

    /// Run `git cherry <upstream> <head>` and classify the answer.
    ///
    /// A non-zero exit (unknown ref, unrelated history) is reported as
    /// [`Cherry::Failed`] with git's stderr rather than as an error.
    pub fn cherry(&self, upstream: &str, head: &str) -> SweepResult<Cherry> {
        validate_name(upstream)?;
        validate_name(head)?;

        let output = self.output(&["cherry", upstream, head])?;
        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            return Ok(Cherry::Failed(stderr.trim().to_string()));
        }

        if output.stdout.iter().all(u8::is_ascii_whitespace) {
            Ok(Cherry::Equivalent)
        } else {
            Ok(Cherry::Ahead)
        }
    }
}
