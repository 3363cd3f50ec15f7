//! Line-oriented console wrapper used by the menu session

use std::fmt::Display;
use std::io::{self, BufRead, Write};
use thiserror::Error;

/// Failures that end a session
#[derive(Debug, Error)]
pub enum SessionError {
    /// Input reached end of stream while a read was pending
    #[error("input closed while waiting for a response")]
    InputClosed,
    /// Reading from or writing to the console failed
    #[error("console I/O failed: {0}")]
    Io(#[from] io::Error),
}

/// Paired input and output streams for the interactive protocol
#[derive(Debug)]
pub struct Console<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Console<R, W> {
    /// Wrap an input and output stream
    pub const fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Read one line, trimmed.
    ///
    /// Bytes that are not valid UTF-8 are replaced with `U+FFFD`, so a
    /// garbled line reaches the handler as ordinary (invalid) text.
    ///
    /// # Errors
    /// [`SessionError::InputClosed`] at end of input, [`SessionError::Io`] on read failure.
    pub fn read_line(&mut self) -> Result<String, SessionError> {
        let mut buf = Vec::new();
        if self.input.read_until(b'\n', &mut buf)? == 0 {
            return Err(SessionError::InputClosed);
        }
        Ok(String::from_utf8_lossy(&buf).trim().to_string())
    }

    /// Print `text` without a newline, flush, then read the reply.
    ///
    /// # Errors
    /// Same as [`Console::read_line`], plus write failures.
    pub fn prompt(&mut self, text: &str) -> Result<String, SessionError> {
        write!(self.output, "{text}")?;
        self.output.flush()?;
        self.read_line()
    }

    /// Print one line.
    ///
    /// # Errors
    /// Returns [`SessionError::Io`] on write failure.
    pub fn say(&mut self, message: impl Display) -> Result<(), SessionError> {
        writeln!(self.output, "{message}")?;
        Ok(())
    }

    /// Direct access to the output stream for multi-line renderers
    pub fn output(&mut self) -> &mut W {
        &mut self.output
    }

    /// Flush pending output.
    ///
    /// # Errors
    /// Returns [`SessionError::Io`] on write failure.
    pub fn flush(&mut self) -> Result<(), SessionError> {
        self.output.flush()?;
        Ok(())
    }

    /// Release the underlying streams
    pub fn into_inner(self) -> (R, W) {
        (self.input, self.output)
    }
}
