//! Questions asked before a run and the answers they produce
//!
//! The pipeline never talks to the terminal directly. It only sees an
//! [`Answers`] map keyed by question name, filled either by a [`Prompter`],
//! by values given on the command line, or by the question defaults.

use crate::core::{
    config::Defaults,
    params::{Feature, FeatureFlags, ProvisioningParameters},
};
use std::collections::HashMap;
use thiserror::Error;

pub const PROJECT_NAME: &str = "project_name";
pub const COMPONENT_NAME: &str = "component_name";

/// Errors raised while collecting answers
#[derive(Debug, Error)]
pub enum PromptError {
    #[error("Prompt cancelled by user")]
    Cancelled,

    #[error("Prompt failed: {0}")]
    Failed(String),
}

/// Value given for a single question
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Answer {
    Text(String),
    Confirm(bool),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum QuestionKind {
    /// Free text with a default used on empty input
    Text { default: String },
    /// Yes/no toggle
    Confirm { default: bool },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Question {
    pub name: String,
    pub message: String,
    pub kind: QuestionKind,
}

impl Question {
    pub fn text(name: &str, message: &str, default: &str) -> Self {
        Self {
            name: name.to_string(),
            message: message.to_string(),
            kind: QuestionKind::Text {
                default: default.to_string(),
            },
        }
    }

    pub fn confirm(name: &str, message: &str, default: bool) -> Self {
        Self {
            name: name.to_string(),
            message: message.to_string(),
            kind: QuestionKind::Confirm { default },
        }
    }

    pub fn default_answer(&self) -> Answer {
        match &self.kind {
            QuestionKind::Text { default } => Answer::Text(default.clone()),
            QuestionKind::Confirm { default } => Answer::Confirm(*default),
        }
    }
}

/// Source of interactive answers
pub trait Prompter {
    fn text(&mut self, message: &str, default: &str) -> Result<String, PromptError>;

    fn confirm(&mut self, message: &str, default: bool) -> Result<bool, PromptError>;
}

/// Ordered question list for a new app
pub fn questionnaire(defaults: &Defaults) -> Vec<Question> {
    let mut questions = vec![
        Question::text(
            PROJECT_NAME,
            "What is the name of your project?",
            &defaults.project_name,
        ),
        Question::text(
            COMPONENT_NAME,
            "What should we name the main component?",
            &defaults.component_name,
        ),
    ];

    for feature in Feature::ALL {
        questions.push(Question::confirm(
            feature.name(),
            feature.question(),
            defaults.features.is_enabled(feature),
        ));
    }

    questions
}

/// Answers keyed by question name
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Answers(HashMap<String, Answer>);

impl Answers {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, name: impl Into<String>, answer: Answer) {
        self.0.insert(name.into(), answer);
    }

    pub fn get(&self, name: &str) -> Option<&Answer> {
        self.0.get(name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.0.contains_key(name)
    }

    /// Answer every question in order
    ///
    /// Preset answers win. Remaining questions take their default when
    /// `assume_defaults` is set, otherwise they are asked through `prompter`.
    pub fn collect(
        questions: &[Question],
        presets: Answers,
        assume_defaults: bool,
        prompter: &mut dyn Prompter,
    ) -> Result<Answers, PromptError> {
        let mut answers = presets;

        for question in questions {
            if answers.contains(&question.name) {
                continue;
            }

            let answer = if assume_defaults {
                question.default_answer()
            } else {
                match &question.kind {
                    QuestionKind::Text { default } => {
                        Answer::Text(prompter.text(&question.message, default)?)
                    }
                    QuestionKind::Confirm { default } => {
                        Answer::Confirm(prompter.confirm(&question.message, *default)?)
                    }
                }
            };

            answers.insert(question.name.clone(), answer);
        }

        Ok(answers)
    }

    fn text_or(&self, name: &str, fallback: &str) -> String {
        match self.get(name) {
            Some(Answer::Text(value)) => value.clone(),
            _ => fallback.to_string(),
        }
    }

    /// Turn the answer set into the immutable run parameters
    pub fn into_parameters(self, defaults: &Defaults, verbose: bool) -> ProvisioningParameters {
        let features: FeatureFlags = Feature::ALL
            .into_iter()
            .filter(|feature| match self.get(feature.name()) {
                Some(Answer::Confirm(enabled)) => *enabled,
                _ => defaults.features.is_enabled(*feature),
            })
            .collect();

        ProvisioningParameters::new(
            self.text_or(PROJECT_NAME, &defaults.project_name),
            self.text_or(COMPONENT_NAME, &defaults.component_name),
            features,
            verbose,
        )
    }
}
