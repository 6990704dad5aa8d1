use crate::command::{ArgVector, Status};
use crate::env;
use crate::error::ShellError;
use anyhow::{Context, Result};
use std::borrow::Cow;
use std::ffi::OsStr;
use std::path::{Path, PathBuf};
use std::process::{Command, ExitStatus};

/// Run a program that is not a built-in and wait for it to terminate.
///
/// The child inherits the shell's standard streams, environment and working
/// directory, and sees `args[0]` exactly as typed as its own argv[0]. Its exit
/// status is only logged; a failing child still yields [`Status::Continue`].
pub fn launch(args: &ArgVector) -> Result<Status> {
    let Some(name) = args.command() else {
        return Ok(Status::Continue);
    };

    let program = resolve_program(name)?;
    let mut command = Command::new(&*program);
    command.args(args.iter().skip(1));
    #[cfg(unix)]
    {
        use std::os::unix::process::CommandExt;
        command.arg0(name);
    }

    let mut child = command
        .spawn()
        .with_context(|| format!("could not execute {name}"))?;
    tracing::debug!(pid = child.id(), program = %program.display(), "spawned child");

    // Only termination completes the wait; stopped children are not reported.
    let exit_status = child
        .wait()
        .with_context(|| format!("could not wait for {name}"))?;
    let code = exit_status.code().unwrap_or_else(|| terminated_by_signal(exit_status));
    tracing::debug!(command = name, code, "child terminated");

    Ok(Status::Continue)
}

/// Find the program to spawn for `name`.
///
/// Without a `PATH` the name is handed to the OS unchanged and any failure
/// surfaces at spawn time.
fn resolve_program(name: &str) -> Result<Cow<'_, Path>> {
    let path = Path::new(name);
    match env::search_paths() {
        Some(search_paths) => find_command_path(&search_paths, path)
            .map(|found| Cow::Owned(found.into_owned()))
            .ok_or_else(|| ShellError::CommandNotFound(name.to_string()).into()),
        None => Ok(Cow::Borrowed(path)),
    }
}

#[cfg(unix)]
fn terminated_by_signal(exit_status: ExitStatus) -> i32 {
    use std::os::unix::process::ExitStatusExt;
    if let Some(signal) = ExitStatusExt::signal(&exit_status) {
        128 + signal
    } else if ExitStatusExt::core_dumped(&exit_status) {
        255
    } else {
        -1
    }
}

#[cfg(not(unix))]
fn terminated_by_signal(_exit_status: ExitStatus) -> i32 {
    -1
}

/// Resolve a command path the way a typical shell would.
///
/// Behavior:
/// - Absolute path: returns it if it names a regular file.
/// - `./foo` on Unix or any path on other platforms: returns it if it names a
///   regular file relative to the current directory.
/// - Relative with multiple components (e.g., `bin/sh`): resolved against the
///   current directory.
/// - Single path component: search each directory in `search_paths` (PATH)
///   and return the first executable regular file. Non-executable matches are
///   skipped, like `execvp` does.
/// - Empty path: returns `None`.
pub fn find_command_path<'a>(search_paths: &OsStr, path: &'a Path) -> Option<Cow<'a, Path>> {
    if path.is_absolute() {
        return find_by_path(path).map(Cow::Borrowed);
    }

    let search_in_current_dir = cfg!(not(unix)) || path.starts_with("./");
    if search_in_current_dir && path.is_file() {
        return Some(Cow::Borrowed(path));
    }

    let mut components = path.components();
    match (components.next(), components.next()) {
        (None, None) => None,
        (Some(x), None) => find_in_path(search_paths, x.as_os_str()).map(Cow::Owned),
        _ => find_by_path(path).map(Cow::Borrowed),
    }
}

fn find_in_path(search_paths: &OsStr, cmd: &OsStr) -> Option<PathBuf> {
    std::env::split_paths(search_paths)
        .map(|dir| dir.join(cmd))
        .find(|candidate| is_executable(candidate))
}

#[cfg(unix)]
fn is_executable(path: &Path) -> bool {
    use std::os::unix::fs::PermissionsExt;
    path.metadata()
        .is_ok_and(|meta| meta.is_file() && meta.permissions().mode() & 0o111 != 0)
}

#[cfg(not(unix))]
fn is_executable(path: &Path) -> bool {
    path.is_file()
}

fn find_by_path(path: &Path) -> Option<&Path> {
    if path.is_file() { Some(path) } else { None }
}
