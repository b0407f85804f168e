//! Interactive prompt handling.

use std::io;
use std::sync::{Mutex, PoisonError};

use anyhow::Result;
use tracing::debug;

use crate::cmdutil::CancelError;

/// Trait for interactive terminal prompts.
pub trait Prompter: Send + Sync + std::fmt::Debug {
    /// Present a list of options and return the selected index.
    fn select(&self, prompt: &str, default: Option<usize>, options: &[String]) -> Result<usize>;

    /// Prompt for free-text input.
    fn input(&self, prompt: &str, default: &str) -> Result<String>;
}

/// Dialoguer-based prompter implementation.
///
/// Escape or Ctrl-C at a prompt surfaces as [`CancelError`].
#[derive(Debug, Default)]
pub struct DialoguerPrompter;

impl DialoguerPrompter {
    /// Create a new prompter.
    pub fn new() -> Self {
        Self
    }
}

fn map_dialoguer_error(err: dialoguer::Error) -> anyhow::Error {
    match err {
        dialoguer::Error::IO(e) if e.kind() == io::ErrorKind::Interrupted => CancelError.into(),
        dialoguer::Error::IO(e) => e.into(),
    }
}

impl Prompter for DialoguerPrompter {
    fn select(&self, prompt: &str, default: Option<usize>, options: &[String]) -> Result<usize> {
        let mut sel = dialoguer::Select::new().with_prompt(prompt).items(options);
        if let Some(d) = default {
            sel = sel.default(d);
        }
        sel.interact_opt()
            .map_err(map_dialoguer_error)?
            .ok_or_else(|| {
                debug!(prompt, "Prompt dismissed");
                CancelError.into()
            })
    }

    fn input(&self, prompt: &str, default: &str) -> Result<String> {
        let mut input = dialoguer::Input::<String>::new().with_prompt(prompt);
        if !default.is_empty() {
            input = input.default(default.to_string());
        }
        input.interact_text().map_err(map_dialoguer_error)
    }
}

/// Stub prompter for testing that returns pre-configured answers.
///
/// Every prompt text is recorded in `prompts` so tests can assert which
/// questions were asked.
#[derive(Debug, Default)]
pub struct StubPrompter {
    /// Pre-configured select answers (index).
    pub select_answers: Mutex<Vec<usize>>,
    /// Pre-configured input answers.
    pub input_answers: Mutex<Vec<String>>,
    /// Prompts shown so far, in order.
    pub prompts: Mutex<Vec<String>>,
}

impl StubPrompter {
    /// Prompts recorded so far.
    pub fn recorded_prompts(&self) -> Vec<String> {
        self.prompts
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    fn record(&self, prompt: &str) {
        self.prompts
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(prompt.to_string());
    }
}

impl Prompter for StubPrompter {
    fn select(&self, prompt: &str, default: Option<usize>, options: &[String]) -> Result<usize> {
        self.record(prompt);
        let mut answers = self
            .select_answers
            .lock()
            .unwrap_or_else(PoisonError::into_inner);
        let index = if answers.is_empty() {
            default.unwrap_or(0)
        } else {
            answers.remove(0)
        };
        if index >= options.len() {
            anyhow::bail!("stub answer {index} out of range for {prompt:?}");
        }
        Ok(index)
    }

    fn input(&self, prompt: &str, default: &str) -> Result<String> {
        self.record(prompt);
        let mut answers = self
            .input_answers
            .lock()
            .unwrap_or_else(PoisonError::into_inner);
        if answers.is_empty() {
            Ok(default.to_string())
        } else {
            Ok(answers.remove(0))
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::cmdutil::is_user_cancellation;

    #[test]
    fn test_should_return_default_select_when_empty() {
        let stub = StubPrompter::default();
        let result = stub
            .select("pick one", Some(1), &["a".into(), "b".into()])
            .unwrap();
        assert_eq!(result, 1);
    }

    #[test]
    fn test_should_return_zero_when_no_default_and_empty() {
        let stub = StubPrompter::default();
        let result = stub
            .select("pick one", None, &["a".into(), "b".into()])
            .unwrap();
        assert_eq!(result, 0);
    }

    #[test]
    fn test_should_return_preconfigured_select_answers() {
        let stub = StubPrompter::default();
        stub.select_answers.lock().unwrap().extend([1, 0]);
        let options: Vec<String> = vec!["a".into(), "b".into()];

        assert_eq!(stub.select("q1", None, &options).unwrap(), 1);
        assert_eq!(stub.select("q2", None, &options).unwrap(), 0);
    }

    #[test]
    fn test_should_reject_out_of_range_select_answer() {
        let stub = StubPrompter::default();
        stub.select_answers.lock().unwrap().push(5);
        assert!(stub.select("q", None, &["a".into()]).is_err());
    }

    #[test]
    fn test_should_return_default_input_when_empty() {
        let stub = StubPrompter::default();
        let result = stub.input("name?", "defaultval").unwrap();
        assert_eq!(result, "defaultval");
    }

    #[test]
    fn test_should_return_preconfigured_input_answers() {
        let stub = StubPrompter::default();
        stub.input_answers
            .lock()
            .unwrap()
            .push("typed value".to_string());

        let result = stub.input("name?", "default").unwrap();
        assert_eq!(result, "typed value");
    }

    #[test]
    fn test_should_record_prompts_in_order() {
        let stub = StubPrompter::default();
        stub.select("kind?", None, &["User".into()]).unwrap();
        stub.input("name?", "").unwrap();
        assert_eq!(stub.recorded_prompts(), vec!["kind?", "name?"]);
    }

    #[test]
    fn test_should_map_interrupted_prompt_to_cancel() {
        let err = map_dialoguer_error(dialoguer::Error::IO(io::Error::from(
            io::ErrorKind::Interrupted,
        )));
        assert!(is_user_cancellation(&err));
    }

    #[test]
    fn test_should_keep_other_prompt_errors() {
        let err = map_dialoguer_error(dialoguer::Error::IO(io::Error::other("tty gone")));
        assert!(!is_user_cancellation(&err));
        assert!(err.to_string().contains("tty gone"));
    }
}
