//! Remote branch listing and name resolution.
//!
//! Everything here is a read-only lookup against live repository state and
//! is repeated on every invocation; nothing is cached.

use crate::error::{SweepError, SweepResult};
use crate::git::RemoteGateway;
use std::collections::BTreeSet;
use std::fmt;
use std::path::PathBuf;

/// The symbolic head a remote may advertise; never a sweep candidate.
pub const HEAD: &str = "HEAD";

const HEADS_PREFIX: &str = "refs/heads/";

/// A configured remote and the working directory it was resolved in.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Remote {
    pub name: String,
    pub work_dir: PathBuf,
}

/// A branch on one remote. Equal iff remote and branch name match.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct RemoteBranchRef {
    pub remote: String,
    pub name: String,
}

impl RemoteBranchRef {
    pub fn new(remote: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            remote: remote.into(),
            name: name.into(),
        }
    }

    /// The remote-tracking form, `<remote>/<branch>`.
    pub fn qualified(&self) -> String {
        format!("{}/{}", self.remote, self.name)
    }
}

impl fmt::Display for RemoteBranchRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)
    }
}

/// Names never considered for deletion: always `HEAD` and the reference
/// branch, plus whatever the caller adds.
pub fn skip_set<'a>(
    reference_name: &str,
    extra: impl IntoIterator<Item = &'a String>,
) -> BTreeSet<String> {
    let mut skip: BTreeSet<String> = [HEAD.to_string(), reference_name.to_string()].into();
    skip.extend(extra.into_iter().cloned());
    skip
}

/// Parse `git ls-remote --heads` output into branch refs, in listing order.
///
/// # Panics
///
/// Panics on a line whose ref does not start with `refs/heads/`. The listing
/// format is git's, and `--heads` guarantees the prefix.
pub fn parse_heads(remote: &str, listing: &str) -> Vec<RemoteBranchRef> {
    listing
        .lines()
        .filter(|line| !line.trim().is_empty())
        .map(|line| {
            let refname = line.split_whitespace().nth(1).unwrap_or_default();
            assert!(
                refname.starts_with(HEADS_PREFIX),
                "unexpected ls-remote line for {remote}: {line:?}"
            );
            RemoteBranchRef::new(remote, &refname[HEADS_PREFIX.len()..])
        })
        .collect()
}

/// All branches on `remote`, in the order git reports them.
pub fn list_branches(
    git: &impl RemoteGateway,
    remote: &Remote,
) -> SweepResult<Vec<RemoteBranchRef>> {
    let listing = git.ls_remote_heads(&remote.name)?;
    Ok(parse_heads(&remote.name, &listing))
}

/// `list_branches` minus everything in [`skip_set`].
pub fn filtered_branches<'a>(
    git: &impl RemoteGateway,
    remote: &Remote,
    reference_name: &str,
    extra_skips: impl IntoIterator<Item = &'a String>,
) -> SweepResult<Vec<RemoteBranchRef>> {
    let skip = skip_set(reference_name, extra_skips);
    Ok(list_branches(git, remote)?
        .into_iter()
        .filter(|b| !skip.contains(&b.name))
        .collect())
}

/// Find the reference branch among the remote's branches.
pub fn resolve_reference_branch(
    git: &impl RemoteGateway,
    remote: &Remote,
    reference_name: &str,
) -> SweepResult<RemoteBranchRef> {
    list_branches(git, remote)?
        .into_iter()
        .find(|b| b.name == reference_name)
        .ok_or_else(|| SweepError::MissingReferenceBranch(reference_name.to_string()))
}

/// Look `name` up among the repository's configured remotes.
pub fn resolve_remote(git: &impl RemoteGateway, name: &str) -> SweepResult<Remote> {
    git.remote_list()?
        .into_iter()
        .find(|r| r == name)
        .map(|name| Remote {
            name,
            work_dir: git.work_dir().to_path_buf(),
        })
        .ok_or_else(|| SweepError::MissingRemote(name.to_string()))
}
