use super::GitCommand;
use crate::error::SweepResult;

impl GitCommand {
    /// Get a git config value from the current repository (respects local + global config)
    pub fn config_get(&self, key: &str) -> SweepResult<Option<String>> {
        let output = self.output(&["config", "--get", key])?;

        if output.status.success() {
            let value = String::from_utf8_lossy(&output.stdout).trim().to_string();
            Ok(Some(value))
        } else {
            // Exit code 1 means the key was not found, which is not an error
            Ok(None)
        }
    }

    /// Get every value of a multi-valued key, in config order.
    pub fn config_get_all(&self, key: &str) -> SweepResult<Vec<String>> {
        let output = self.output(&["config", "--get-all", key])?;

        if !output.status.success() {
            return Ok(Vec::new());
        }

        Ok(String::from_utf8_lossy(&output.stdout)
            .lines()
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .collect())
    }
}
