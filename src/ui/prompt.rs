//! Input collection for forms.
//!
//! Forms never talk to the terminal directly; they ask a [`Prompter`]. The
//! binary uses [`DialoguerPrompter`], tests script the answers.

use dialoguer::{Confirm, Input, MultiSelect, Select};
use tutordesk_core::AppError;

pub trait Prompter {
    /// Free text. Empty input is returned as an empty string.
    fn text(&mut self, label: &str, initial: Option<&str>) -> Result<String, AppError>;

    /// Index into `options`.
    fn select(&mut self, label: &str, options: &[&str], default: usize) -> Result<usize, AppError>;

    /// Indices into `options`, in ascending order.
    fn multi_select(&mut self, label: &str, options: &[&str]) -> Result<Vec<usize>, AppError>;

    fn confirm(&mut self, label: &str, default: bool) -> Result<bool, AppError>;

    /// Text that may be left blank.
    fn optional_text(&mut self, label: &str) -> Result<Option<String>, AppError> {
        let value = self.text(label, None)?;
        let value = value.trim();
        Ok((!value.is_empty()).then(|| value.to_string()))
    }
}

/// Interactive prompts on the controlling terminal.
#[derive(Debug, Default, Clone, Copy)]
pub struct DialoguerPrompter;

impl Prompter for DialoguerPrompter {
    fn text(&mut self, label: &str, initial: Option<&str>) -> Result<String, AppError> {
        let mut input = Input::<String>::new().with_prompt(label).allow_empty(true);
        if let Some(initial) = initial {
            input = input.with_initial_text(initial);
        }
        input.interact_text().map_err(AppError::internal)
    }

    fn select(&mut self, label: &str, options: &[&str], default: usize) -> Result<usize, AppError> {
        Select::new()
            .with_prompt(label)
            .items(options)
            .default(default)
            .interact()
            .map_err(AppError::internal)
    }

    fn multi_select(&mut self, label: &str, options: &[&str]) -> Result<Vec<usize>, AppError> {
        MultiSelect::new()
            .with_prompt(label)
            .items(options)
            .interact()
            .map_err(AppError::internal)
    }

    fn confirm(&mut self, label: &str, default: bool) -> Result<bool, AppError> {
        Confirm::new()
            .with_prompt(label)
            .default(default)
            .interact()
            .map_err(AppError::internal)
    }
}

/// Answers every question with its default, for runs without a terminal.
///
/// Required fields come back blank and are then rejected by validation.
#[derive(Debug, Default, Clone, Copy)]
pub struct NonInteractive;

impl Prompter for NonInteractive {
    fn text(&mut self, _label: &str, initial: Option<&str>) -> Result<String, AppError> {
        Ok(initial.unwrap_or_default().to_string())
    }

    fn select(&mut self, _label: &str, _options: &[&str], default: usize) -> Result<usize, AppError> {
        Ok(default)
    }

    fn multi_select(&mut self, _label: &str, _options: &[&str]) -> Result<Vec<usize>, AppError> {
        Ok(Vec::new())
    }

    fn confirm(&mut self, _label: &str, default: bool) -> Result<bool, AppError> {
        Ok(default)
    }
}

#[cfg(any(test, feature = "test-utils"))]
pub use scripted::{Answer, ScriptedPrompter};

#[cfg(any(test, feature = "test-utils"))]
mod scripted {
    use std::collections::VecDeque;

    use anyhow::anyhow;

    use super::Prompter;
    use tutordesk_core::AppError;

    #[derive(Debug, Clone, PartialEq)]
    pub enum Answer {
        Text(String),
        Select(usize),
        MultiSelect(Vec<usize>),
        Confirm(bool),
    }

    /// Replays canned answers in order and records every label it was asked.
    #[derive(Debug, Default)]
    pub struct ScriptedPrompter {
        answers: VecDeque<Answer>,
        pub asked: Vec<String>,
    }

    impl ScriptedPrompter {
        pub fn new(answers: impl IntoIterator<Item = Answer>) -> Self {
            Self {
                answers: answers.into_iter().collect(),
                asked: Vec::new(),
            }
        }

        pub fn remaining(&self) -> usize {
            self.answers.len()
        }

        fn next(&mut self, label: &str) -> Result<Answer, AppError> {
            self.asked.push(label.to_string());
            self.answers
                .pop_front()
                .ok_or_else(|| AppError::internal(anyhow!("no scripted answer for {:?}", label)))
        }
    }

    fn mismatch(label: &str, answer: &Answer) -> AppError {
        AppError::internal(anyhow!("unexpected answer {:?} for {:?}", answer, label))
    }

    impl Prompter for ScriptedPrompter {
        fn text(&mut self, label: &str, _initial: Option<&str>) -> Result<String, AppError> {
            match self.next(label)? {
                Answer::Text(s) => Ok(s),
                other => Err(mismatch(label, &other)),
            }
        }

        fn select(&mut self, label: &str, _options: &[&str], _default: usize) -> Result<usize, AppError> {
            match self.next(label)? {
                Answer::Select(i) => Ok(i),
                other => Err(mismatch(label, &other)),
            }
        }

        fn multi_select(&mut self, label: &str, _options: &[&str]) -> Result<Vec<usize>, AppError> {
            match self.next(label)? {
                Answer::MultiSelect(v) => Ok(v),
                other => Err(mismatch(label, &other)),
            }
        }

        fn confirm(&mut self, label: &str, _default: bool) -> Result<bool, AppError> {
            match self.next(label)? {
                Answer::Confirm(b) => Ok(b),
                other => Err(mismatch(label, &other)),
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_optional_text_trims_blank_to_none() {
        let mut prompter = ScriptedPrompter::new([
            Answer::Text("   ".into()),
            Answer::Text(" وصف ".into()),
        ]);
        assert_eq!(prompter.optional_text("a").unwrap(), None);
        assert_eq!(prompter.optional_text("b").unwrap(), Some("وصف".to_string()));
        assert_eq!(prompter.asked, vec!["a", "b"]);
    }

    #[test]
    fn test_scripted_prompter_reports_mismatch_and_exhaustion() {
        let mut prompter = ScriptedPrompter::new([Answer::Confirm(true)]);
        assert!(prompter.text("name", None).is_err());
        assert!(prompter.confirm("again", false).is_err());
        assert_eq!(prompter.remaining(), 0);
    }
}
