//! Terminal prompt adapter built on dialoguer.

use dialoguer::{Confirm, Input};

use wcforge_core::application::ApplicationError;
use wcforge_core::application::ports::Prompter;
use wcforge_core::application::wizard::{ConfirmQuestion, InputQuestion};
use wcforge_core::error::WcforgeResult;

/// Interactive prompt channel over the controlling terminal.
///
/// dialoguer owns the re-prompt loop: a failing validator redraws the
/// question with the error message until the answer passes.
#[derive(Debug, Clone, Copy, Default)]
pub struct ConsolePrompt;

impl ConsolePrompt {
    pub fn new() -> Self {
        Self
    }
}

impl Prompter for ConsolePrompt {
    fn input(&self, question: &InputQuestion<'_>) -> WcforgeResult<String> {
        let mut prompt = Input::<String>::new()
            .with_prompt(question.message)
            .allow_empty(true);
        if !question.default.is_empty() {
            prompt = prompt.default(question.default.to_string());
        }
        if let Some(validate) = question.validate {
            prompt = prompt.validate_with(|value: &String| validate(value));
        }
        prompt.interact_text().map_err(|e| {
            ApplicationError::PromptAborted {
                reason: e.to_string(),
            }
            .into()
        })
    }

    fn confirm(&self, question: &ConfirmQuestion<'_>) -> WcforgeResult<bool> {
        Confirm::new()
            .with_prompt(question.message)
            .default(question.default)
            .interact()
            .map_err(|e| {
                ApplicationError::PromptAborted {
                    reason: e.to_string(),
                }
                .into()
            })
    }
}
