use std::collections::VecDeque;

use dialoguer::Confirm;

use crate::error::{Error, Result};

/// Synchronous yes/no decision obtained from the user.
///
/// The prompt mechanism is injectable so hosts can plug in the real console
/// modal while tests substitute deterministic answers.
pub trait Confirmer {
    fn confirm(&mut self, message: &str) -> Result<bool>;
}

/// Blocking console prompt backed by dialoguer.
///
/// Declining is the default answer; this guards destructive actions when the
/// user dismisses the prompt without choosing.
#[derive(Debug, Clone, Copy, Default)]
pub struct ConsoleConfirmer;

impl Confirmer for ConsoleConfirmer {
    fn confirm(&mut self, message: &str) -> Result<bool> {
        Confirm::new()
            .with_prompt(message)
            .default(false)
            .interact()
            .map_err(|err| Error::PromptInteraction {
                message: err.to_string(),
            })
    }
}

/// Deterministic confirmer: scripted answers first, then a default, with
/// every shown message retained for inspection.
#[derive(Debug, Default)]
pub struct ScriptedConfirmer {
    responses: VecDeque<bool>,
    default_response: bool,
    messages: Vec<String>,
}

impl ScriptedConfirmer {
    pub fn new(default_response: bool) -> Self {
        Self {
            default_response,
            ..Self::default()
        }
    }

    pub fn enqueue(&mut self, accepted: bool) {
        self.responses.push_back(accepted);
    }

    /// Messages shown so far, oldest first.
    pub fn messages(&self) -> &[String] {
        &self.messages
    }
}

impl Confirmer for ScriptedConfirmer {
    fn confirm(&mut self, message: &str) -> Result<bool> {
        self.messages.push(message.to_string());
        Ok(self.responses.pop_front().unwrap_or(self.default_response))
    }
}

/// Format the destructive-action prompt for `subject`, interpolated verbatim.
pub fn delete_prompt(subject: &str) -> String {
    format!("Are you sure you want to delete \"{subject}\"?")
}

pub(crate) fn confirm_delete(confirmer: &mut dyn Confirmer, subject: &str) -> Result<bool> {
    let accepted = confirmer.confirm(&delete_prompt(subject))?;
    log::debug!("delete confirmation for '{subject}': accepted={accepted}");
    Ok(accepted)
}
