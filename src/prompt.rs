//! Operator prompts.
//!
//! The scaffold workflow never reads stdin itself; it asks a `Prompter`.

use crate::error::ScaffoldError;
use std::collections::VecDeque;

pub trait Prompter {
    /// Ask one free-text question and return the answer.
    fn ask(&mut self, prompt: &str) -> Result<String, ScaffoldError>;
}

/// Terminal prompts via `dialoguer`.
#[derive(Debug, Default)]
pub struct DialoguerPrompter;

impl Prompter for DialoguerPrompter {
    fn ask(&mut self, prompt: &str) -> Result<String, ScaffoldError> {
        dialoguer::Input::<String>::new()
            .with_prompt(prompt)
            .interact_text()
            .map_err(|e| ScaffoldError::Prompt {
                prompt: prompt.to_string(),
                reason: e.to_string(),
            })
    }
}

/// Replays canned answers in order; runs out with a prompt error.
#[derive(Debug, Default)]
pub struct ScriptedPrompter {
    answers: VecDeque<String>,
    asked: Vec<String>,
}

impl ScriptedPrompter {
    pub fn new<I, S>(answers: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            answers: answers.into_iter().map(Into::into).collect(),
            asked: Vec::new(),
        }
    }

    /// Prompts that were asked so far.
    pub fn asked(&self) -> &[String] {
        &self.asked
    }
}

impl Prompter for ScriptedPrompter {
    fn ask(&mut self, prompt: &str) -> Result<String, ScaffoldError> {
        self.asked.push(prompt.to_string());
        self.answers.pop_front().ok_or_else(|| ScaffoldError::Prompt {
            prompt: prompt.to_string(),
            reason: "no answer available".to_string(),
        })
    }
}

pub const DEVICE_PROMPT: &str = "Device name (e.g. FNK00xx)";
pub const FIRMWARE_PROMPT: &str = "Firmware name (e.g. Default Firmware)";
pub const VERSION_PROMPT: &str = "Version name (e.g. v1.0)";

/// The three names needed for a scaffold run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScaffoldAnswers {
    pub device_name: String,
    pub firmware_name: String,
    pub version_name: String,
}

/// Collect device, firmware and version names, asking only for the ones not
/// already supplied. Answers are trimmed.
pub fn collect_answers(
    prompter: &mut dyn Prompter,
    device: Option<&str>,
    firmware: Option<&str>,
    version: Option<&str>,
) -> Result<ScaffoldAnswers, ScaffoldError> {
    let mut answer = |given: Option<&str>, prompt: &str| -> Result<String, ScaffoldError> {
        match given {
            Some(value) => Ok(value.trim().to_string()),
            None => Ok(prompter.ask(prompt)?.trim().to_string()),
        }
    };
    Ok(ScaffoldAnswers {
        device_name: answer(device, DEVICE_PROMPT)?,
        firmware_name: answer(firmware, FIRMWARE_PROMPT)?,
        version_name: answer(version, VERSION_PROMPT)?,
    })
}
