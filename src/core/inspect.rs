//! Decide which remote branches are already merged into the reference branch.
//!
//! A branch counts as merged when `git cherry <remote>/<reference> <remote>/<branch>`
//! succeeds with no output, i.e. every commit on the branch has a
//! patch-equivalent commit in the reference branch's history. This accepts
//! squash and rebase merges that a plain ancestry check would reject.

use super::refs::{filtered_branches, Remote, RemoteBranchRef};
use super::ProgressSink;
use crate::error::SweepResult;
use crate::git::{Cherry, RemoteGateway};
use std::thread;

/// Inspection parameters.
#[derive(Debug, Clone)]
pub struct InspectParams {
    /// Extra branch names to leave alone, on top of `HEAD` and the reference.
    pub skips: Vec<String>,
    /// Upper bound on concurrent `git cherry` processes. `1` is sequential.
    pub jobs: usize,
}

impl Default for InspectParams {
    fn default() -> Self {
        Self {
            skips: Vec::new(),
            jobs: 1,
        }
    }
}

/// Branches of `remote` whose commits all appear in `reference`, in the
/// order `filtered_branches` lists them.
pub fn merged_branches<G>(
    git: &G,
    remote: &Remote,
    reference: &RemoteBranchRef,
    params: &InspectParams,
    sink: &mut impl ProgressSink,
) -> SweepResult<Vec<RemoteBranchRef>>
where
    G: RemoteGateway + Sync,
{
    let candidates = filtered_branches(git, remote, &reference.name, &params.skips)?;
    let upstream = reference.qualified();

    sink.on_step(&format!(
        "Comparing {} branches against {upstream}",
        candidates.len()
    ));

    let verdicts = if params.jobs <= 1 || candidates.len() <= 1 {
        candidates
            .iter()
            .map(|c| git.cherry(&upstream, &c.qualified()))
            .collect::<SweepResult<Vec<Cherry>>>()?
    } else {
        compare_concurrently(git, &upstream, &candidates, params.jobs)?
    };

    let mut merged = Vec::new();
    for (candidate, verdict) in candidates.into_iter().zip(verdicts) {
        match verdict {
            Cherry::Equivalent => {
                sink.on_debug(&format!("{} is merged", candidate.qualified()));
                merged.push(candidate);
            }
            Cherry::Ahead => {
                sink.on_debug(&format!("{} has unmerged commits", candidate.qualified()));
            }
            // Kept out of the merge set, but never silently.
            Cherry::Failed(reason) => sink.on_warning(&format!(
                "Could not compare {} with {upstream}, leaving it alone: {reason}",
                candidate.qualified()
            )),
        }
    }

    Ok(merged)
}

/// Run the comparisons in batches of at most `jobs` threads.
///
/// Verdicts are returned in candidate order regardless of completion order.
fn compare_concurrently<G>(
    git: &G,
    upstream: &str,
    candidates: &[RemoteBranchRef],
    jobs: usize,
) -> SweepResult<Vec<Cherry>>
where
    G: RemoteGateway + Sync,
{
    let mut verdicts = Vec::with_capacity(candidates.len());

    for batch in candidates.chunks(jobs) {
        let results: Vec<SweepResult<Cherry>> = thread::scope(|scope| {
            let handles: Vec<_> = batch
                .iter()
                .map(|candidate| {
                    scope.spawn(move || git.cherry(upstream, &candidate.qualified()))
                })
                .collect();

            handles
                .into_iter()
                .map(|h| h.join().unwrap_or_else(|panic| std::panic::resume_unwind(panic)))
                .collect()
        });

        for result in results {
            verdicts.push(result?);
        }
    }

    Ok(verdicts)
}
