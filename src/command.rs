use anyhow::Result;
use std::io::Write;

/// Outcome of running any command.
///
/// The read loop prompts again on [`Status::Continue`] and returns on
/// [`Status::Shutdown`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    Continue,
    Shutdown,
}

/// Signature shared by every built-in handler.
///
/// Handlers receive the whole argument vector (the command name included) and
/// the shell's standard output. Errors are turned into diagnostics by the
/// caller, so a handler never writes to standard error itself.
pub type Handler = fn(&ArgVector, &mut dyn Write) -> Result<Status>;

/// The arguments of a single command, command name first.
///
/// Every element is a non-empty owned string. Indexing past the last element
/// yields `None`, which plays the role of the terminating sentinel.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ArgVector {
    args: Vec<String>,
}

impl ArgVector {
    /// Build a vector from arbitrary strings, dropping empty ones.
    pub fn new<I, S>(args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            args: args
                .into_iter()
                .map(Into::into)
                .filter(|arg: &String| !arg.is_empty())
                .collect(),
        }
    }

    /// Wrap tokens produced by the tokenizer. Callers guarantee none is empty.
    pub(crate) fn from_tokens(args: Vec<String>) -> Self {
        debug_assert!(args.iter().all(|arg| !arg.is_empty()));
        Self { args }
    }

    /// The command name, if any.
    pub fn command(&self) -> Option<&str> {
        self.get(0)
    }

    pub fn get(&self, index: usize) -> Option<&str> {
        self.args.get(index).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.args.len()
    }

    pub fn is_empty(&self) -> bool {
        self.args.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.args.iter().map(String::as_str)
    }

    pub fn as_slice(&self) -> &[String] {
        &self.args
    }
}

impl<S: Into<String>> FromIterator<S> for ArgVector {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self::new(iter)
    }
}
