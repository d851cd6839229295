//! Prompter over any `BufRead` + `Write` pair.

use std::io::{self, BufRead, Stdout, StdinLock, Write};

use tracing::trace;

use super::Prompter;
use crate::errors::PromptError;

/// Writes prompts to `output` and reads answers line by line from `input`.
pub struct LinePrompter<R, W> {
    input: R,
    output: W,
}

impl LinePrompter<StdinLock<'static>, Stdout> {
    /// Prompter bound to the process terminal.
    pub fn stdio() -> Self {
        Self::new(io::stdin().lock(), io::stdout())
    }
}

impl<R: BufRead, W: Write> LinePrompter<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Consumes the prompter, returning the underlying reader and writer.
    pub fn into_parts(self) -> (R, W) {
        (self.input, self.output)
    }
}

impl<R: BufRead, W: Write> Prompter for LinePrompter<R, W> {
    fn say(&mut self, message: &str) -> Result<(), PromptError> {
        writeln!(self.output, "{message}")?;
        self.output.flush()?;
        Ok(())
    }

    fn ask(&mut self, prompt: &str, default: Option<&str>) -> Result<String, PromptError> {
        match default {
            Some(default) => write!(self.output, "{prompt} [{default}]: ")?,
            None => write!(self.output, "{prompt}: ")?,
        }
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Err(PromptError::InputClosed {
                prompt: prompt.to_string(),
            });
        }
        let answer = line.trim_end_matches(['\n', '\r']);
        trace!(prompt, answer, "prompt answered");

        match default {
            Some(default) if answer.is_empty() => Ok(default.to_string()),
            _ => Ok(answer.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn prompter(input: &str) -> LinePrompter<&[u8], Vec<u8>> {
        LinePrompter::new(input.as_bytes(), Vec::new())
    }

    fn output(p: LinePrompter<&[u8], Vec<u8>>) -> String {
        String::from_utf8(p.into_parts().1).unwrap()
    }

    #[test]
    fn empty_answer_returns_default() {
        let mut p = prompter("\n");
        assert_eq!(p.ask("Version", Some("0.1.0")).unwrap(), "0.1.0");
        assert_eq!(output(p), "Version [0.1.0]: ");
    }

    #[test]
    fn answer_keeps_inner_whitespace_and_drops_crlf() {
        let mut p = prompter("  Jane Doe \r\n");
        assert_eq!(p.ask("Author name", None).unwrap(), "  Jane Doe ");
    }

    #[test]
    fn empty_answer_without_default_is_accepted() {
        let mut p = prompter("\n");
        assert_eq!(p.ask("Bug tracker URL", None).unwrap(), "");
    }

    #[test]
    fn eof_is_input_closed() {
        let mut p = prompter("");
        let err = p.ask("Author email", None).unwrap_err();
        assert!(matches!(err, PromptError::InputClosed { ref prompt } if prompt == "Author email"));
    }

    #[test]
    fn last_line_without_newline_is_read() {
        let mut p = prompter("final");
        assert_eq!(p.ask("Q", None).unwrap(), "final");
    }

    #[test]
    fn choose_accepts_exact_member_and_default() {
        let mut p = prompter("Beta\n\n");
        assert_eq!(p.choose("Stage", &["Alpha", "Beta"], "Alpha").unwrap(), "Beta");
        assert_eq!(p.choose("Stage", &["Alpha", "Beta"], "Alpha").unwrap(), "Alpha");
        assert!(output(p).starts_with("Stage (Alpha, Beta) [Alpha]: "));
    }

    #[test]
    fn choose_rejects_non_member() {
        let mut p = prompter("beta\n");
        let err = p.choose("Stage", &["Alpha", "Beta"], "Alpha").unwrap_err();
        assert_eq!(err.to_string(), "'beta' is not one of Alpha, Beta");
    }
}
