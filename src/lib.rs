//! A small interactive shell.
//!
//! Each line typed at the prompt is split into words. The first word names
//! either a built-in (`cd`, `help`, `exit`) that runs inside the shell
//! process, or a program that is spawned with the remaining words as its
//! arguments. The shell waits for the program to terminate before prompting
//! again.
//!
//! There is no quoting, no variables, no pipelines and no redirection: what is
//! typed is what the program receives.
//!
//! The main entry point is [`Interpreter`]. [`command`] holds the types shared
//! by every command path and [`builtin`] the table of built-in commands.

pub mod builtin;
pub mod command;
pub mod config;
pub mod env;
pub mod error;
mod external;
mod interpreter;
pub mod lexer;
pub mod reader;

pub use command::{ArgVector, Status};
pub use config::Config;
pub use error::{ShellError, report};
/// The interactive command runner.
///
/// See [`Interpreter`] for the high-level API and examples.
pub use interpreter::Interpreter;
