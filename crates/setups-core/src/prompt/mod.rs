//! The text I/O collaborator the builder talks to.
//!
//! Production wires stdin/stdout through [`LinePrompter`]; tests feed it
//! byte slices and capture the output in a `Vec<u8>`.

pub mod line;

pub use line::LinePrompter;

use crate::errors::PromptError;

/// Line-oriented interactive I/O.
pub trait Prompter {
    /// Emits one line of output.
    fn say(&mut self, message: &str) -> Result<(), PromptError>;

    /// Asks for one line of input. Empty input returns `default` verbatim
    /// when one is given; otherwise the (possibly empty) input is returned.
    fn ask(&mut self, prompt: &str, default: Option<&str>) -> Result<String, PromptError>;

    /// Asks for one of `choices`. The answer must match a choice exactly;
    /// anything else is an [`PromptError::InvalidChoice`].
    fn choose(
        &mut self,
        prompt: &str,
        choices: &[&str],
        default: &str,
    ) -> Result<String, PromptError> {
        let label = format!("{} ({})", prompt, choices.join(", "));
        let answer = self.ask(&label, Some(default))?;
        if choices.contains(&answer.as_str()) {
            Ok(answer)
        } else {
            Err(PromptError::InvalidChoice {
                value: answer,
                choices: choices.iter().map(|c| c.to_string()).collect(),
            })
        }
    }
}

impl<P: Prompter + ?Sized> Prompter for &mut P {
    fn say(&mut self, message: &str) -> Result<(), PromptError> {
        (**self).say(message)
    }

    fn ask(&mut self, prompt: &str, default: Option<&str>) -> Result<String, PromptError> {
        (**self).ask(prompt, default)
    }

    fn choose(
        &mut self,
        prompt: &str,
        choices: &[&str],
        default: &str,
    ) -> Result<String, PromptError> {
        (**self).choose(prompt, choices, default)
    }
}
