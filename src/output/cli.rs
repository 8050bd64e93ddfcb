//! Terminal output for the `git-sweep` binary.

use super::{Output, OutputConfig};
use console::{style, Color, Term};

/// Writes the sweep report to stdout and diagnostics to stderr.
///
/// The report itself is never styled so it pipes cleanly. Only the
/// `warning:`/`error:` labels and verbose chatter are, and `console` drops
/// the styling when the stream is not a terminal or `NO_COLOR` is set.
#[derive(Debug)]
pub struct CliOutput {
    config: OutputConfig,
    stdout: Term,
    stderr: Term,
}

impl CliOutput {
    pub fn new(config: OutputConfig) -> Self {
        Self {
            config,
            stdout: Term::stdout(),
            stderr: Term::stderr(),
        }
    }

    /// Neither quiet nor verbose; used by `main` for the final error line.
    pub fn default_output() -> Self {
        Self::new(OutputConfig::default())
    }

    // A closed pipe must not turn a finished sweep into a failure.
    fn out(&self, line: &str) {
        let _ = self.stdout.write_line(line);
    }

    fn err(&self, line: &str) {
        let _ = self.stderr.write_line(line);
    }
}

/// A diagnostic label such as `warning:`, coloured when stderr allows it.
fn label(text: &str, color: Color) -> String {
    style(text).fg(color).for_stderr().to_string()
}

impl Output for CliOutput {
    fn result(&mut self, msg: &str) {
        if !self.config.quiet {
            self.out(msg);
        }
    }

    fn step(&mut self, msg: &str) {
        if self.config.verbose && !self.config.quiet {
            self.out(&style(msg).dim().to_string());
        }
    }

    fn warning(&mut self, msg: &str) {
        self.err(&format!("{} {msg}", label("warning:", Color::Yellow)));
    }

    fn error(&mut self, msg: &str) {
        self.err(&format!("{} {msg}", label("error:", Color::Red)));
    }

    fn debug(&mut self, msg: &str) {
        if self.config.verbose {
            self.err(&style(format!("debug: {msg}")).dim().for_stderr().to_string());
        }
    }
}
