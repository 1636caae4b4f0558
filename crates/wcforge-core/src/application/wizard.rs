//! The interactive question sequence.
//!
//! A plain data-driven wizard, not a state machine: an ordered list of
//! question descriptors, each carrying an applicability predicate evaluated
//! against already-collected state. Questions are asked once, in order, with
//! no backtracking; aborting the sequence is fatal for the whole run.

use tracing::debug;

use crate::application::ports::Prompter;
use crate::domain::{Answers, LegacyInventory, SEPARATOR, validate_component_name};
use crate::error::WcforgeResult;

/// A free-text question handed to the [`Prompter`] port.
pub struct InputQuestion<'a> {
    pub message: &'a str,
    pub default: &'a str,
    /// When set, adapters must re-prompt (showing the error) until the
    /// answer passes.
    pub validate: Option<&'a dyn Fn(&str) -> Result<(), String>>,
}

/// A yes/no question handed to the [`Prompter`] port.
pub struct ConfirmQuestion<'a> {
    pub message: &'a str,
    pub default: bool,
}

/// Component-name validation in the shape prompt adapters want.
pub fn name_validator(input: &str) -> Result<(), String> {
    validate_component_name(input).map_err(|e| e.to_string())
}

/// Collapse whitespace in the ambient project name to the separator, giving
/// the default answer for the name question.
pub fn default_component_name(project_name: &str) -> String {
    project_name
        .chars()
        .map(|c| if c.is_whitespace() { SEPARATOR } else { c })
        .collect()
}

// ── Question descriptors ──────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum QuestionId {
    Name,
    Description,
    Preview,
    DeleteOld,
}

enum Kind {
    Input { default: String, validated: bool },
    Confirm { default: bool },
}

struct Question {
    id: QuestionId,
    message: String,
    kind: Kind,
    applies: fn(&Progress) -> bool,
}

/// Already-collected state the applicability predicates see.
#[derive(Debug, Default)]
struct Progress {
    legacy: bool,
    name: Option<String>,
    description: Option<String>,
    preview: Option<bool>,
    delete_old: Option<bool>,
}

/// The ordered question list for one run.
pub struct Wizard {
    questions: Vec<Question>,
    legacy: bool,
}

impl Wizard {
    /// Build the question list.
    ///
    /// `name_default` is the ambient project name (whitespace already
    /// collapsed); `description_default` is whatever an existing manifest
    /// declared, if anything. The delete-old confirmation only exists when
    /// the inventory found something.
    pub fn new(
        name_default: String,
        description_default: String,
        inventory: &LegacyInventory,
    ) -> Self {
        let questions = vec![
            Question {
                id: QuestionId::Name,
                message: "Component name".into(),
                kind: Kind::Input {
                    default: name_default,
                    validated: true,
                },
                applies: |_| true,
            },
            Question {
                id: QuestionId::Description,
                message: "Description".into(),
                kind: Kind::Input {
                    default: description_default,
                    validated: false,
                },
                applies: |_| true,
            },
            Question {
                id: QuestionId::Preview,
                message: "Make it 2.0.0-preview?".into(),
                kind: Kind::Confirm { default: false },
                applies: |_| true,
            },
            Question {
                id: QuestionId::DeleteOld,
                message: format!("Delete old files: {}?", inventory.join()),
                kind: Kind::Confirm { default: true },
                applies: |p| p.legacy,
            },
        ];
        Self {
            questions,
            legacy: inventory.is_legacy(),
        }
    }

    /// Ask every applicable question, in order, and assemble the answer set.
    pub fn run(&self, prompter: &dyn Prompter) -> WcforgeResult<Answers> {
        let mut progress = Progress {
            legacy: self.legacy,
            ..Progress::default()
        };

        for question in &self.questions {
            if !(question.applies)(&progress) {
                debug!(?question.id, "question not applicable, skipping");
                continue;
            }
            match &question.kind {
                Kind::Input { default, validated } => {
                    let validate: Option<&dyn Fn(&str) -> Result<(), String>> =
                        if *validated { Some(&name_validator) } else { None };
                    let answer = prompter.input(&InputQuestion {
                        message: &question.message,
                        default,
                        validate,
                    })?;
                    match question.id {
                        QuestionId::Name => progress.name = Some(answer),
                        QuestionId::Description => progress.description = Some(answer),
                        _ => unreachable!("input answer for a confirm question"),
                    }
                }
                Kind::Confirm { default } => {
                    let answer = prompter.confirm(&ConfirmQuestion {
                        message: &question.message,
                        default: *default,
                    })?;
                    match question.id {
                        QuestionId::Preview => progress.preview = Some(answer),
                        QuestionId::DeleteOld => progress.delete_old = Some(answer),
                        _ => unreachable!("confirm answer for an input question"),
                    }
                }
            }
        }

        Ok(Answers {
            name: progress.name.unwrap_or_default(),
            description: progress.description.unwrap_or_default(),
            preview: progress.preview.unwrap_or(false),
            delete_old: progress.delete_old,
        })
    }
}
