//! Prompt/response console.

use std::io::{BufRead, StdinLock, Stdout, Write};

use thiserror::Error;

use bakery_inventory::validation::parse_quantity;

const BANNER_WIDTH: usize = 40;

pub const INVALID_CONTINUATION: &str = "Invalid type. Please type 'exit' to exit or press 'c' to continue.";

#[derive(Debug, Error)]
pub enum ConsoleError {
    #[error("console I/O failed: {0}")]
    Io(#[from] std::io::Error),

    /// Input reached end-of-file.
    #[error("input closed")]
    Closed,
}

/// Error banner text, trailing blank line included.
pub fn banner(message: &str) -> String {
    format!(
        "\n{}\n{message}\n{}\n\n",
        "=".repeat(BANNER_WIDTH),
        "-".repeat(BANNER_WIDTH)
    )
}

/// Line-oriented console over any reader/writer pair.
#[derive(Debug)]
pub struct Console<R, W> {
    input: R,
    output: W,
}

impl Console<StdinLock<'static>, Stdout> {
    /// Console bound to the process stdin/stdout.
    pub fn stdio() -> Self {
        Self::new(std::io::stdin().lock(), std::io::stdout())
    }
}

impl<R: BufRead, W: Write> Console<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    pub fn into_output(self) -> W {
        self.output
    }

    /// Write `text` followed by a newline.
    pub fn say(&mut self, text: impl core::fmt::Display) -> Result<(), ConsoleError> {
        writeln!(self.output, "{text}")?;
        Ok(())
    }

    /// Write `text` verbatim.
    pub fn write(&mut self, text: &str) -> Result<(), ConsoleError> {
        self.output.write_all(text.as_bytes())?;
        self.output.flush()?;
        Ok(())
    }

    pub fn error_banner(&mut self, message: &str) -> Result<(), ConsoleError> {
        tracing::debug!(reason = message, "reporting input error");
        self.write(&banner(message))
    }

    /// Print `prompt`, then read one line without its line terminator.
    pub fn prompt(&mut self, prompt: &str) -> Result<String, ConsoleError> {
        self.write(prompt)?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Err(ConsoleError::Closed);
        }
        let trimmed_len = line.trim_end_matches(['\n', '\r']).len();
        line.truncate(trimmed_len);
        Ok(line)
    }

    /// Prompt until a valid number is entered.
    pub fn read_number(&mut self, prompt: &str, allow_negative: bool) -> Result<f64, ConsoleError> {
        loop {
            let raw = self.prompt(prompt)?;
            match parse_quantity(&raw, allow_negative) {
                Ok(value) => return Ok(value),
                Err(err) => self.say(err.message())?,
            }
        }
    }

    /// Ask whether to leave the current mode: `true` on `exit`, `false` on `c`.
    pub fn exit_or_continue(&mut self, prompt: &str) -> Result<bool, ConsoleError> {
        loop {
            let answer = self.prompt(prompt)?.trim().to_lowercase();
            match answer.as_str() {
                "exit" => return Ok(true),
                "c" => return Ok(false),
                _ => self.say(INVALID_CONTINUATION)?,
            }
        }
    }
}
