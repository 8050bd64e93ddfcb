/// git-sweep - clean up merged remote branches
///
/// Runs as `git-sweep` directly or as `git sweep` through git's external
/// command lookup.
use git_sweep::output::{CliOutput, Output};
use git_sweep::{commands, SweepError};
use std::process::ExitCode;

fn main() -> ExitCode {
    match commands::sweep::run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            match e.downcast_ref::<SweepError>() {
                Some(err) if is_not_a_repository(err) => eprintln!("{err}"),
                _ => CliOutput::default_output().error(&format!("{e:#}")),
            }
            ExitCode::FAILURE
        }
    }
}

fn is_not_a_repository(err: &SweepError) -> bool {
    err.is_repository_access() && err.to_string() == SweepError::NOT_A_REPOSITORY
}
