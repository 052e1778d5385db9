pub mod terminal;

pub use terminal::TerminalPrompter;

use crate::error::{Result, TrackerError};

/// Interactive question surface used by the menu and the action handlers.
pub trait Prompter {
    /// Asks for a line of free text. The trailing newline is not included.
    fn input(&mut self, message: &str) -> Result<String>;

    /// Asks the user to pick one entry and returns its position in `choices`.
    fn select(&mut self, message: &str, choices: &[String]) -> Result<usize>;
}

/// A list entry: the label shown to the user and the value it stands for.
#[derive(Debug, Clone, PartialEq)]
pub struct Choice<T> {
    pub label: String,
    pub value: T,
}

impl<T> Choice<T> {
    pub fn new(label: impl Into<String>, value: T) -> Self {
        Self {
            label: label.into(),
            value,
        }
    }
}

/// Presents `choices` and returns the value behind the picked label.
pub fn choose<P, T>(prompter: &mut P, message: &str, choices: Vec<Choice<T>>) -> Result<T>
where
    P: Prompter + ?Sized,
{
    if choices.is_empty() {
        return Err(TrackerError::NoChoices(message.to_string()));
    }

    let labels: Vec<String> = choices.iter().map(|c| c.label.clone()).collect();
    let index = prompter.select(message, &labels)?;

    choices
        .into_iter()
        .nth(index)
        .map(|c| c.value)
        .ok_or_else(|| TrackerError::InvalidInput(format!("no choice at position {}", index)))
}
