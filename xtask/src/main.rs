//! xtask - Development automation tasks for git-sweep
//!
//! This binary provides development-time tasks that don't need to be
//! included in the distributed binary.

use anyhow::{Context, Result};
use clap::{CommandFactory, Parser, Subcommand};
use clap_mangen::Man;
use std::fs;
use std::path::{Path, PathBuf};

const COMMAND_NAME: &str = "git-sweep";

#[derive(Parser)]
#[command(name = "xtask")]
#[command(about = "Development automation tasks for git-sweep")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate the git-sweep man page
    GenMan {
        /// Output directory for the man page
        #[arg(long, default_value = "man")]
        output_dir: PathBuf,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::GenMan { output_dir } => generate_man_page(&output_dir).map(|path| {
            eprintln!("Generated: {}", path.display());
        }),
    }
}

/// Render the man page into `output_dir` and return the written path.
fn generate_man_page(output_dir: &Path) -> Result<PathBuf> {
    fs::create_dir_all(output_dir).with_context(|| {
        format!(
            "Failed to create output directory: {}",
            output_dir.display()
        )
    })?;

    let cmd = git_sweep::commands::sweep::Args::command()
        .name(COMMAND_NAME)
        .version(git_sweep::VERSION);

    let mut buffer = Vec::new();
    Man::new(cmd).render(&mut buffer)?;

    let file_path = output_dir.join(format!("{COMMAND_NAME}.1"));
    fs::write(&file_path, &buffer)
        .with_context(|| format!("Failed to write man page: {}", file_path.display()))?;

    Ok(file_path)
}
