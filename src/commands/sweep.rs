use crate::{
    core::{
        self,
        sweep::{SweepOutcome, SweepParams},
        OutputSink, Prompt,
    },
    error::SweepError,
    git::GitCommand,
    log_debug,
    logging::init_logging,
    output::{CliOutput, Output, OutputConfig},
    settings::{split_skips, SweepSettings},
};
use anyhow::{Context, Result};
use clap::{ArgGroup, Parser};
use std::io::{self, IsTerminal, Write};
use std::path::Path;

#[derive(Parser)]
#[command(name = "git-sweep")]
#[command(version = crate::VERSION_DISPLAY)]
#[command(about = "Clean up your Git remote branches")]
#[command(long_about = r#"
Finds branches on a remote that have been fully merged into the integration
branch and, after confirmation, deletes them from the remote.

A branch counts as merged when every one of its commits has a
patch-equivalent commit in the integration branch (see git-cherry(1)), so
branches landed by squash or rebase are found as well as fast-forwarded or
merged ones. HEAD and the integration branch itself are never deleted.

Defaults for --origin, --master, --skip and fetching can be set with the
sweep.remote, sweep.master, sweep.skip and sweep.fetch git config keys.
"#)]
#[command(group(ArgGroup::new("unattended").args(["force", "dry_run"]).multiple(true)))]
pub struct Args {
    #[arg(long, help = "Do not ask, cleanup immediately")]
    force: bool,

    #[arg(
        long,
        value_name = "NAME",
        help = "Name of the remote you wish to clean up [default: origin]"
    )]
    origin: Option<String>,

    #[arg(
        long,
        value_name = "BRANCH",
        help = "Name of what you consider the master branch [default: master]"
    )]
    master: Option<String>,

    #[arg(long = "no-fetch", alias = "nofetch", help = "Do not fetch from the remote")]
    no_fetch: bool,

    #[arg(
        long = "skip",
        value_name = "BRANCHES",
        help = "Comma-separated list of branches to skip"
    )]
    skips: Vec<String>,

    #[arg(long, help = "Show what would be swept")]
    dry_run: bool,

    #[arg(
        short,
        long,
        value_name = "N",
        help = "Compare up to N branches concurrently [default: 1]"
    )]
    jobs: Option<usize>,

    // Only where nothing is confirmed: a prompt must never hide its branches.
    #[arg(
        short,
        long,
        requires = "unattended",
        help = "Operate quietly; suppress the report (needs --force or --dry-run)"
    )]
    quiet: bool,

    #[arg(short, long, help = "Be verbose; show detailed progress")]
    verbose: bool,
}

impl Args {
    /// Resolve flags over config over defaults into one parameter set.
    pub fn to_params(&self, settings: &SweepSettings) -> SweepParams {
        let mut skips = settings.skips.clone();
        for value in &self.skips {
            skips.extend(split_skips(value));
        }

        SweepParams {
            remote_name: self.origin.clone().unwrap_or_else(|| settings.remote.clone()),
            reference_name: self.master.clone().unwrap_or_else(|| settings.master.clone()),
            fetch: settings.fetch && !self.no_fetch,
            skips,
            dry_run: self.dry_run,
            force: self.force,
            jobs: self.jobs.unwrap_or(settings.jobs).max(1),
        }
    }
}

/// Asks on the terminal; reads a plain line when stdin is not interactive.
pub struct TerminalPrompt;

impl Prompt for TerminalPrompt {
    fn confirm(&mut self, question: &str) -> Result<bool> {
        let answer = if console::user_attended() && io::stdin().is_terminal() {
            dialoguer::Input::<String>::new()
                .with_prompt(question)
                .allow_empty(true)
                .interact_text()?
        } else {
            print!("{question} ");
            io::stdout().flush()?;

            let mut input = String::new();
            io::stdin().read_line(&mut input)?;
            println!();
            input
        };

        Ok(answer.trim().to_lowercase().starts_with('y'))
    }
}

pub fn run() -> Result<()> {
    let args = Args::parse();
    init_logging(args.verbose, args.quiet);

    let work_dir = std::env::current_dir().context("Failed to get current working directory")?;
    let mut output = CliOutput::new(OutputConfig::new(args.quiet, args.verbose));

    run_sweep(&args, &work_dir, &mut output, &mut TerminalPrompt)?;
    Ok(())
}

pub fn run_sweep(
    args: &Args,
    work_dir: &Path,
    output: &mut dyn Output,
    prompt: &mut dyn Prompt,
) -> Result<SweepOutcome> {
    which::which("git").context("git executable not found on PATH")?;

    let git = GitCommand::new(work_dir).with_quiet(args.quiet);
    if !git.is_inside_git_repo()? {
        return Err(SweepError::not_a_repository().into());
    }

    let settings = SweepSettings::load(&git)?;
    let params = args.to_params(&settings);
    log_debug!(
        "Sweeping {} against {} (fetch: {}, jobs: {}, skip: [{}])",
        params.remote_name,
        params.reference_name,
        params.fetch,
        params.jobs,
        params.skips.join(", ")
    );

    let mut sink = OutputSink(output);
    core::sweep::execute(&params, &git, prompt, &mut sink)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(argv: &[&str]) -> Args {
        Args::try_parse_from(std::iter::once("git-sweep").chain(argv.iter().copied())).unwrap()
    }

    #[test]
    fn test_defaults_come_from_settings() {
        let params = parse(&[]).to_params(&SweepSettings::default());
        assert_eq!(params.remote_name, "origin");
        assert_eq!(params.reference_name, "master");
        assert!(params.fetch);
        assert!(params.skips.is_empty());
        assert!(!params.dry_run);
        assert!(!params.force);
        assert_eq!(params.jobs, 1);
    }

    #[test]
    fn test_flags_override_settings() {
        let settings = SweepSettings {
            remote: "upstream".into(),
            master: "main".into(),
            skips: vec!["develop".into()],
            fetch: true,
            jobs: 2,
        };
        let params = parse(&[
            "--origin=fork",
            "--master=trunk",
            "--no-fetch",
            "--skip=a, b",
            "--skip",
            "c",
            "--dry-run",
            "--force",
            "-j",
            "8",
        ])
        .to_params(&settings);

        assert_eq!(params.remote_name, "fork");
        assert_eq!(params.reference_name, "trunk");
        assert!(!params.fetch);
        assert_eq!(params.skips, vec!["develop", "a", "b", "c"]);
        assert!(params.dry_run);
        assert!(params.force);
        assert_eq!(params.jobs, 8);
    }

    #[test]
    fn test_nofetch_alias() {
        assert!(!parse(&["--nofetch"]).to_params(&SweepSettings::default()).fetch);
    }

    #[test]
    fn test_config_can_disable_fetch() {
        let settings = SweepSettings {
            fetch: false,
            ..SweepSettings::default()
        };
        assert!(!parse(&[]).to_params(&settings).fetch);
    }

    #[test]
    fn test_zero_jobs_clamped() {
        assert_eq!(parse(&["--jobs=0"]).to_params(&SweepSettings::default()).jobs, 1);
    }

    #[test]
    fn test_quiet_requires_force_or_dry_run() {
        let err = Args::try_parse_from(["git-sweep", "--quiet"]).err().unwrap();
        assert_eq!(err.kind(), clap::error::ErrorKind::MissingRequiredArgument);

        assert!(Args::try_parse_from(["git-sweep", "-q", "--force"]).is_ok());
        assert!(Args::try_parse_from(["git-sweep", "-q", "--dry-run"]).is_ok());
        assert!(Args::try_parse_from(["git-sweep", "-q", "--force", "--dry-run"]).is_ok());
    }

    #[test]
    fn test_not_a_repository() {
        let temp = tempfile::tempdir().unwrap();
        let mut output = crate::output::TestOutput::new();
        let err = run_sweep(
            &parse(&["--dry-run"]),
            temp.path(),
            &mut output,
            &mut crate::core::AssumeYes,
        )
        .unwrap_err();

        assert_eq!(err.to_string(), SweepError::NOT_A_REPOSITORY);
    }
}
