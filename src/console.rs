use bank::Result;

use std::io::{BufRead, Write};

use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConsoleError {
    #[error("Input closed")]
    InputClosed,
}

/// Line-oriented prompt/print wrapper around the process's input and output
pub struct Console<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Console<R, W> {
    pub fn new(input: R, output: W) -> Self {
        return Self { input, output };
    }

    /// Prints `message` and reads one line, without its line ending
    pub fn prompt(&mut self, message: &str) -> Result<String> {
        write!(self.output, "{message}")?;
        self.output.flush()?;

        let mut line = String::new();
        let read = self.input.read_line(&mut line)?;

        if read == 0 {
            Err(ConsoleError::InputClosed)?
        }

        let line = line.trim_end_matches(&['\r', '\n'][..]).to_string();
        log::debug!("Read input line: {line:?}");

        return Ok(line);
    }

    pub fn print(&mut self, text: &str) -> Result {
        writeln!(self.output, "{text}")?;
        return Ok(());
    }

    pub fn success(&mut self, message: &str) -> Result {
        self.print(&format!("\n=== {message} ==="))
    }

    pub fn failure(&mut self, message: &str) -> Result {
        self.print(&format!("\n@@@ {message} @@@"))
    }

    #[cfg(test)]
    pub fn output(&self) -> &W {
        &self.output
    }
}
