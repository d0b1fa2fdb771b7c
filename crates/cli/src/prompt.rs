//! Line-oriented conversation over any reader/writer pair.

use std::fmt::Display;
use std::io::{self, BufRead, Write};

/// Asks questions on `output` and reads answers from `input`.
pub struct Prompt<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Prompt<R, W> {
    pub const fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Write `text` followed by a newline.
    pub fn say(&mut self, text: impl Display) -> io::Result<()> {
        writeln!(self.output, "{text}")
    }

    /// Write `question` without a newline and read one answer.
    ///
    /// The answer is trimmed. Returns `None` once the input is exhausted.
    pub fn ask(&mut self, question: &str) -> io::Result<Option<String>> {
        write!(self.output, "{question}")?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim().to_owned()))
    }

    #[cfg(test)]
    pub fn into_output(self) -> W {
        self.output
    }
}
