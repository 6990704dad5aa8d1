//! Reading one line of user input at a time.

use crate::error::ShellError;
use std::io::{BufRead, ErrorKind};

/// Initial capacity of the line buffer and the step it grows by.
pub const LINE_BUFFER_SIZE: usize = 1024;

/// A single read from the input stream.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Line {
    /// A line without its trailing newline. May be empty.
    Text(String),
    /// The stream ended before any byte of a new line.
    Eof,
}

/// Reads lines byte by byte into a buffer that grows by a constant step.
pub struct LineReader<R> {
    input: R,
    initial_capacity: usize,
    growth_step: usize,
}

impl<R: BufRead> LineReader<R> {
    pub fn new(input: R) -> Self {
        Self::with_capacity(input, LINE_BUFFER_SIZE, LINE_BUFFER_SIZE)
    }

    pub fn with_capacity(input: R, initial_capacity: usize, growth_step: usize) -> Self {
        Self {
            input,
            initial_capacity: initial_capacity.max(1),
            growth_step: growth_step.max(1),
        }
    }

    /// Read up to the next `\n` or the end of the stream.
    ///
    /// Carriage returns are kept; the tokenizer treats them as delimiters.
    pub fn read_line(&mut self) -> Result<Line, ShellError> {
        let mut buffer: Vec<u8> = Vec::new();
        buffer.try_reserve_exact(self.initial_capacity)?;

        let mut saw_input = false;
        while let Some(byte) = self.next_byte()? {
            saw_input = true;
            if byte == b'\n' {
                return Ok(Line::Text(decode(buffer)));
            }
            if buffer.len() == buffer.capacity() {
                buffer.try_reserve_exact(self.growth_step)?;
                tracing::trace!(capacity = buffer.capacity(), "grew line buffer");
            }
            buffer.push(byte);
        }

        if saw_input {
            Ok(Line::Text(decode(buffer)))
        } else {
            Ok(Line::Eof)
        }
    }

    fn next_byte(&mut self) -> Result<Option<u8>, ShellError> {
        loop {
            let byte = match self.input.fill_buf() {
                Ok(available) => available.first().copied(),
                Err(e) if e.kind() == ErrorKind::Interrupted => continue,
                Err(e) => return Err(ShellError::Input(e)),
            };
            if byte.is_some() {
                self.input.consume(1);
            }
            return Ok(byte);
        }
    }
}

fn decode(buffer: Vec<u8>) -> String {
    match String::from_utf8(buffer) {
        Ok(line) => line,
        Err(e) => String::from_utf8_lossy(e.as_bytes()).into_owned(),
    }
}
