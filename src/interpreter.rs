use crate::builtin;
use crate::command::{ArgVector, Status};
use crate::config::Config;
use crate::error::{self, ShellError};
use crate::external;
use crate::lexer::Tokenizer;
use crate::reader::{Line, LineReader};
use std::io::{BufRead, Write};

/// An interactive shell session: built-in commands plus external programs.
///
/// The interpreter keeps no state between commands. The only thing that
/// carries over is the process-wide working directory, which `cd` changes.
///
/// Example
/// ```
/// use standards_shell::{Config, Interpreter};
/// let sh = Interpreter::new(Config::default());
/// let mut out = Vec::new();
/// let mut err = Vec::new();
/// sh.repl("help\nexit\n".as_bytes(), &mut out, &mut err).unwrap();
/// assert!(String::from_utf8(out).unwrap().contains("exit\n"));
/// ```
pub struct Interpreter {
    config: Config,
    tokenizer: Tokenizer,
}

impl Default for Interpreter {
    fn default() -> Self {
        Self::new(Config::default())
    }
}

impl Interpreter {
    pub fn new(config: Config) -> Self {
        let tokenizer = Tokenizer::with_capacity(&config.delimiters, config.token_buffer_size);
        Self { config, tokenizer }
    }

    /// Run one command to completion.
    ///
    /// Built-ins shadow programs of the same name. Every recoverable failure is
    /// written to `stderr` as a diagnostic and the shell carries on.
    pub fn execute(
        &self,
        args: &ArgVector,
        stdout: &mut dyn Write,
        stderr: &mut dyn Write,
    ) -> Status {
        let Some(name) = args.command() else {
            return Status::Continue;
        };

        let result = match builtin::find(name) {
            Some(builtin) => {
                tracing::debug!(command = name, "running builtin");
                (builtin.handler)(args, stdout)
            }
            None => {
                tracing::debug!(command = name, "launching external command");
                // Output written so far must land before the child's.
                if let Err(e) = stdout.flush() {
                    error::report(ShellError::Output(e), stderr);
                }
                external::launch(args)
            }
        };

        match result {
            Ok(status) => status,
            Err(e) => {
                error::report(e, stderr);
                Status::Continue
            }
        }
    }

    /// Tokenize and run a single line.
    pub fn run_line(
        &self,
        line: &str,
        stdout: &mut dyn Write,
        stderr: &mut dyn Write,
    ) -> Result<Status, ShellError> {
        let args = self.tokenizer.split(line)?;
        Ok(self.execute(&args, stdout, stderr))
    }

    /// Prompt, read, run, until `exit` or the end of `input`.
    ///
    /// Only fatal errors are returned; the caller reports them and exits with
    /// a failure status.
    pub fn repl<R: BufRead>(
        &self,
        input: R,
        stdout: &mut dyn Write,
        stderr: &mut dyn Write,
    ) -> Result<(), ShellError> {
        let mut reader = LineReader::with_capacity(
            input,
            self.config.line_buffer_size,
            self.config.line_buffer_size,
        );

        loop {
            stdout
                .write_all(self.config.prompt.as_bytes())
                .map_err(ShellError::Output)?;
            stdout.flush().map_err(ShellError::Output)?;

            let line = match reader.read_line()? {
                Line::Text(line) => line,
                Line::Eof => {
                    tracing::debug!("end of input");
                    return Ok(());
                }
            };

            if self.run_line(&line, stdout, stderr)? == Status::Shutdown {
                return Ok(());
            }
        }
    }
}
