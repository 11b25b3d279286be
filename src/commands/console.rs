//! Line-oriented terminal I/O
//!
//! All prompts go through a `Console` so the game can be driven from stdin
//! or from a script of lines in tests.

use crate::error::{GameError, Result};
use crossterm::{
    cursor::MoveTo,
    execute,
    terminal::{Clear, ClearType},
};
use std::fmt::Display;
use std::io::{self, BufRead, Write};
use std::time::Duration;

/// Presentation switches a console honours
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ConsoleOptions {
    pub clear_screen: bool,
    pub reveal_delay: Duration,
}

impl Default for ConsoleOptions {
    fn default() -> Self {
        Self {
            clear_screen: true,
            reveal_delay: crate::config::DEFAULT_REVEAL_DELAY,
        }
    }
}

pub struct Console<R, W> {
    input: R,
    output: W,
    options: ConsoleOptions,
}

impl<R: BufRead, W: Write> Console<R, W> {
    pub fn new(input: R, output: W, options: ConsoleOptions) -> Self {
        Self {
            input,
            output,
            options,
        }
    }

    #[must_use]
    pub const fn options(&self) -> ConsoleOptions {
        self.options
    }

    /// The underlying writer, for multi-part output
    pub fn out(&mut self) -> &mut W {
        &mut self.output
    }

    /// Consume the console, returning the writer
    pub fn into_output(self) -> W {
        self.output
    }

    /// Write one line
    ///
    /// # Errors
    ///
    /// Returns any error from the writer.
    pub fn say(&mut self, text: impl Display) -> io::Result<()> {
        writeln!(self.output, "{text}")
    }

    /// Write an empty line
    ///
    /// # Errors
    ///
    /// Returns any error from the writer.
    pub fn blank(&mut self) -> io::Result<()> {
        writeln!(self.output)
    }

    /// Read one line without its line ending
    ///
    /// # Errors
    ///
    /// Returns `GameError::InputClosed` at end of input.
    pub fn read_line(&mut self) -> Result<String> {
        self.output.flush()?;
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Err(GameError::InputClosed);
        }
        let trimmed_len = line.trim_end_matches(['\r', '\n']).len();
        line.truncate(trimmed_len);
        Ok(line)
    }

    /// Print "Press enter to continue..." and wait for a line
    ///
    /// # Errors
    ///
    /// Returns `GameError::InputClosed` at end of input.
    pub fn pause(&mut self) -> Result<String> {
        self.say("Press enter to continue...")?;
        self.read_line()
    }

    /// Clear the screen, unless disabled
    ///
    /// # Errors
    ///
    /// Returns any error from the writer.
    pub fn clear_screen(&mut self) -> io::Result<()> {
        if self.options.clear_screen {
            execute!(self.output, Clear(ClearType::All), MoveTo(0, 0))?;
        }
        Ok(())
    }
}
