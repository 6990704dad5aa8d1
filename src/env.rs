//! Process-wide state the shell touches: its working directory and the
//! command search path.
//!
//! The working directory belongs to the OS process, not to the shell, and is
//! inherited by every child at spawn time. [`change_dir`] is the only place
//! that mutates it.

use anyhow::{Context, Result};
use std::env as stdenv;
use std::ffi::OsString;
use std::path::Path;

/// Make `target` the shell's working directory.
///
/// Relative targets resolve against the current working directory. On failure
/// the working directory is left untouched.
pub fn change_dir(target: &str) -> Result<()> {
    let path = Path::new(target);
    stdenv::set_current_dir(path)
        .with_context(|| format!("could not change directory to {}", path.display()))?;
    tracing::debug!(dir = %path.display(), "changed working directory");
    Ok(())
}

/// Value of `PATH`, if set.
pub fn search_paths() -> Option<OsString> {
    stdenv::var_os("PATH")
}
