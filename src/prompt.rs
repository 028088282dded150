//! Operator prompt abstraction for testing
//!
//! The version bump asks the operator two questions. Going through the
//! `Prompter` trait lets tests feed answers from a buffer or a `mockall` mock
//! instead of a terminal.
//!
//! # Examples
//!
//! ```rust,no_run
//! use release_helper::prompt::{Prompter, StdioPrompter};
//!
//! let mut prompter = StdioPrompter::stdio();
//! let answer = prompter.ask("Enter the new version: ")?;
//! println!("You typed {answer:?}");
//! # Ok::<(), std::io::Error>(())
//! ```
use std::io::{self, BufRead, Write};

#[cfg(test)]
use mockall::automock;

/// Something that can show a message and read back one line of input
#[cfg_attr(test, automock)]
pub trait Prompter {
    /// Show `message` without a trailing newline and return the next line,
    /// without its line terminator. End of input yields an empty string.
    fn ask(&mut self, message: &str) -> io::Result<String>;
}

/// Prompter over any reader/writer pair; `stdio()` wires it to the terminal
pub struct StdioPrompter<R, W> {
    input: R,
    output: W,
}

impl StdioPrompter<io::StdinLock<'static>, io::Stdout> {
    pub fn stdio() -> Self {
        Self::new(io::stdin().lock(), io::stdout())
    }
}

impl<R: BufRead, W: Write> StdioPrompter<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    pub fn into_output(self) -> W {
        self.output
    }
}

impl<R: BufRead, W: Write> Prompter for StdioPrompter<R, W> {
    fn ask(&mut self, message: &str) -> io::Result<String> {
        write!(self.output, "{message}")?;
        self.output.flush()?;

        let mut line = String::new();
        self.input.read_line(&mut line)?;
        let line = line.strip_suffix('\n').unwrap_or(&line);
        Ok(line.strip_suffix('\r').unwrap_or(line).to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn reads_one_line_per_question() {
        let mut prompter = StdioPrompter::new(Cursor::new("1.2.3\r\nnotes here\n"), Vec::new());

        assert_eq!(prompter.ask("version? ").unwrap(), "1.2.3");
        assert_eq!(prompter.ask("notes? ").unwrap(), "notes here");

        let shown = String::from_utf8(prompter.into_output()).unwrap();
        assert_eq!(shown, "version? notes? ");
    }

    #[test]
    fn end_of_input_is_empty() {
        let mut prompter = StdioPrompter::new(Cursor::new(""), Vec::new());
        assert_eq!(prompter.ask("anything? ").unwrap(), "");
    }
}
