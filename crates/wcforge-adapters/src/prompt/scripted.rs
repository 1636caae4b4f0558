//! Scripted prompt adapter for testing.

use std::collections::VecDeque;
use std::sync::Mutex;

use wcforge_core::application::ApplicationError;
use wcforge_core::application::ports::Prompter;
use wcforge_core::application::wizard::{ConfirmQuestion, InputQuestion};
use wcforge_core::error::WcforgeResult;

/// Prompt channel that answers from pre-loaded queues.
///
/// Mirrors the terminal adapter's contract: an answer failing the question's
/// validator is discarded and the next one is tried. An exhausted queue
/// yields the question's default; if even that fails validation the prompt
/// aborts, matching a user giving up.
#[derive(Debug, Default)]
pub struct ScriptedPrompt {
    inputs: Mutex<VecDeque<String>>,
    confirms: Mutex<VecDeque<bool>>,
}

impl ScriptedPrompt {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue an answer for the next free-text question.
    pub fn push_input(&self, answer: impl Into<String>) -> &Self {
        self.inputs.lock().unwrap().push_back(answer.into());
        self
    }

    /// Queue an answer for the next yes/no question.
    pub fn push_confirm(&self, answer: bool) -> &Self {
        self.confirms.lock().unwrap().push_back(answer);
        self
    }
}

impl Prompter for ScriptedPrompt {
    fn input(&self, question: &InputQuestion<'_>) -> WcforgeResult<String> {
        let mut queue = self.inputs.lock().unwrap();
        while let Some(answer) = queue.pop_front() {
            match question.validate {
                Some(validate) if validate(&answer).is_err() => continue,
                _ => return Ok(answer),
            }
        }

        let fallback = question.default.to_string();
        match question.validate {
            Some(validate) if validate(&fallback).is_err() => {
                Err(ApplicationError::PromptAborted {
                    reason: format!("no valid scripted answer for '{}'", question.message),
                }
                .into())
            }
            _ => Ok(fallback),
        }
    }

    fn confirm(&self, question: &ConfirmQuestion<'_>) -> WcforgeResult<bool> {
        Ok(self
            .confirms
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or(question.default))
    }
}
