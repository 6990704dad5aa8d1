use std::collections::TryReserveError;
use std::io::Write;

/// Prefix carried by every diagnostic the shell writes to standard error.
pub const DIAGNOSTIC_PREFIX: &str = "Standards";

/// Errors raised by the shell itself.
///
/// `Allocation`, `Input` and `Output` are fatal: they end the read loop and the
/// process exits with a failure status. The remaining variants are reported as
/// diagnostics and the shell keeps prompting.
#[derive(Debug, thiserror::Error)]
pub enum ShellError {
    #[error("allocation error: {0}")]
    Allocation(#[from] TryReserveError),

    #[error("could not read input")]
    Input(#[source] std::io::Error),

    #[error("could not write output")]
    Output(#[source] std::io::Error),

    #[error("expected argument for \"{0}\", but received none")]
    MissingArgument(&'static str),

    #[error("{0}: command not found")]
    CommandNotFound(String),
}

impl ShellError {
    /// Whether the error must terminate the shell.
    pub fn is_fatal(&self) -> bool {
        matches!(
            self,
            ShellError::Allocation(_) | ShellError::Input(_) | ShellError::Output(_)
        )
    }
}

/// Write `err` as a single diagnostic line, including its whole source chain.
///
/// Accepts anything convertible into [`anyhow::Error`] so both typed
/// [`ShellError`]s and contextualized command errors go through one path.
pub fn report(err: impl Into<anyhow::Error>, stderr: &mut dyn Write) {
    let err = err.into();
    tracing::warn!(error = %format!("{err:#}"), "reporting diagnostic");
    // Nowhere left to report a failing stderr.
    let _ = writeln!(stderr, "{DIAGNOSTIC_PREFIX}: {err:#}");
    let _ = stderr.flush();
}
