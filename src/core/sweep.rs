//! Core logic for `git-sweep`.
//!
//! One sweep walks `Resolved → ListedCandidates → Inspected` and ends in
//! exactly one of `Reported` (dry run), `Deleted`, `Aborted`, or an error.

use super::delete;
use super::inspect::{merged_branches, InspectParams};
use super::refs::{resolve_reference_branch, resolve_remote, RemoteBranchRef};
use super::{ProgressSink, Prompt};
use crate::git::RemoteGateway;
use anyhow::Result;

/// Input parameters for a sweep, assembled once per invocation.
#[derive(Debug, Clone)]
pub struct SweepParams {
    /// Remote to clean up.
    pub remote_name: String,
    /// Integration branch other branches are compared against.
    pub reference_name: String,
    /// Fetch from the remote before inspecting.
    pub fetch: bool,
    /// Extra branch names never to delete.
    pub skips: Vec<String>,
    /// Report only; never prompt or delete.
    pub dry_run: bool,
    /// Delete without asking.
    pub force: bool,
    /// Concurrent comparisons during inspection.
    pub jobs: usize,
}

impl Default for SweepParams {
    fn default() -> Self {
        Self {
            remote_name: "origin".to_string(),
            reference_name: "master".to_string(),
            fetch: true,
            skips: Vec::new(),
            dry_run: false,
            force: false,
            jobs: 1,
        }
    }
}

/// How a sweep ended.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SweepOutcome {
    /// No branch qualified.
    NothingToSweep,
    /// Dry run: these would have been deleted.
    Reported(Vec<RemoteBranchRef>),
    /// These were deleted from the remote.
    Deleted(Vec<RemoteBranchRef>),
    /// The user declined; nothing was deleted.
    Aborted(Vec<RemoteBranchRef>),
}

impl SweepOutcome {
    /// The branches the sweep found merged.
    pub fn branches(&self) -> &[RemoteBranchRef] {
        match self {
            Self::NothingToSweep => &[],
            Self::Reported(refs) | Self::Deleted(refs) | Self::Aborted(refs) => refs,
        }
    }
}

pub const CONFIRM_QUESTION: &str = "Delete these branches? (y/n)";

/// Execute one sweep.
pub fn execute<G>(
    params: &SweepParams,
    git: &G,
    prompt: &mut dyn Prompt,
    sink: &mut impl ProgressSink,
) -> Result<SweepOutcome>
where
    G: RemoteGateway + Sync,
{
    let remote = resolve_remote(git, &params.remote_name)?;

    if params.fetch {
        sink.on_result("Fetching from the remote");
        git.fetch(&remote.name)?;
    }

    let reference = resolve_reference_branch(git, &remote, &params.reference_name)?;
    sink.on_debug(&format!("Reference branch is {}", reference.qualified()));

    let inspect = InspectParams {
        skips: params.skips.clone(),
        jobs: params.jobs.max(1),
    };
    let merged = merged_branches(git, &remote, &reference, &inspect, sink)?;

    if merged.is_empty() {
        sink.on_result("No remote branches are available for cleaning up");
        return Ok(SweepOutcome::NothingToSweep);
    }

    sink.on_result(&format!(
        "These branches have been merged into {}:",
        reference.name
    ));
    sink.on_result("");
    for branch in &merged {
        sink.on_result(&format!("  {}", branch.name));
    }

    if params.dry_run {
        sink.on_result("");
        sink.on_result("To delete them, run again without --dry-run");
        return Ok(SweepOutcome::Reported(merged));
    }

    sink.on_result("");
    if !params.force && !prompt.confirm(CONFIRM_QUESTION)? {
        sink.on_result("OK, aborting.");
        return Ok(SweepOutcome::Aborted(merged));
    }

    for branch in &merged {
        delete::remove(git, std::slice::from_ref(branch))?;
        sink.on_result(&format!("  deleting {} (done)", branch.name));
    }

    sink.on_result("");
    sink.on_result("All done!");
    sink.on_result("");
    sink.on_result("Tell everyone to run `git fetch --prune` to sync with this remote.");
    sink.on_result("(you don't have to, yours is synced)");

    Ok(SweepOutcome::Deleted(merged))
}
