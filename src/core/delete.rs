//! Remote branch deletion.

use super::refs::RemoteBranchRef;
use crate::error::{SweepError, SweepResult};
use crate::git::RemoteGateway;

/// Delete each ref from its remote, one push per ref, in order.
///
/// Stops at the first failure; refs after the failing one are not touched.
pub fn remove(git: &impl RemoteGateway, refs: &[RemoteBranchRef]) -> SweepResult<()> {
    for branch in refs {
        git.push_delete(&branch.remote, &branch.name)
            .map_err(|e| SweepError::DeletionFailed {
                remote: branch.remote.clone(),
                branch: branch.name.clone(),
                reason: e.to_string(),
            })?;
    }

    Ok(())
}
