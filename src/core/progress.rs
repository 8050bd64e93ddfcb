//! Adapters bridging core traits to the command layer.

use super::{ProgressSink, Prompt};
use crate::output::Output;
use anyhow::Result;

/// Adapter that forwards `ProgressSink` calls to an `Output` implementation.
///
/// # Example
///
/// ```ignore
/// let mut output = CliOutput::new(config);
/// let mut sink = OutputSink(&mut output);
/// core::sweep::execute(&params, &git, &mut prompt, &mut sink)?;
/// ```
pub struct OutputSink<'a>(pub &'a mut dyn Output);

impl ProgressSink for OutputSink<'_> {
    fn on_result(&mut self, msg: &str) {
        self.0.result(msg);
    }

    fn on_step(&mut self, msg: &str) {
        self.0.step(msg);
    }

    fn on_warning(&mut self, msg: &str) {
        self.0.warning(msg);
    }

    fn on_debug(&mut self, msg: &str) {
        self.0.debug(msg);
    }
}

/// Prompt that answers yes without asking (`--force`).
pub struct AssumeYes;

impl Prompt for AssumeYes {
    fn confirm(&mut self, _question: &str) -> Result<bool> {
        Ok(true)
    }
}

/// Prompt that replays canned answers and records the questions asked.
///
/// Runs out of answers as "no", so a test that forgets to script one never
/// deletes anything.
#[cfg(test)]
#[derive(Debug, Default)]
pub(crate) struct ScriptedPrompt {
    answers: std::collections::VecDeque<bool>,
    asked: Vec<String>,
}

#[cfg(test)]
impl ScriptedPrompt {
    pub(crate) fn new(answers: impl IntoIterator<Item = bool>) -> Self {
        Self {
            answers: answers.into_iter().collect(),
            asked: Vec::new(),
        }
    }

    /// Questions asked so far, in order.
    pub(crate) fn asked(&self) -> &[String] {
        &self.asked
    }
}

#[cfg(test)]
impl Prompt for ScriptedPrompt {
    fn confirm(&mut self, question: &str) -> Result<bool> {
        self.asked.push(question.to_string());
        Ok(self.answers.pop_front().unwrap_or(false))
    }
}
