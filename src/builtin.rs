use crate::command::{ArgVector, Handler, Status};
use crate::env;
use crate::error::ShellError;
use anyhow::Result;
use std::io::Write;

/// A command handled inside the shell process.
#[derive(Clone, Copy)]
pub struct Builtin {
    pub name: &'static str,
    pub handler: Handler,
}

impl std::fmt::Debug for Builtin {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Builtin").field("name", &self.name).finish()
    }
}

/// Built-in commands known to the shell, in the order `help` lists them.
///
/// Built-ins take precedence over programs of the same name on `PATH`.
pub static BUILTINS: &[Builtin] = &[
    Builtin {
        name: "cd",
        handler: cd,
    },
    Builtin {
        name: "help",
        handler: help,
    },
    Builtin {
        name: "exit",
        handler: exit,
    },
];

/// Look up a built-in by exact, case-sensitive name.
pub fn find(name: &str) -> Option<&'static Builtin> {
    BUILTINS.iter().find(|builtin| builtin.name == name)
}

/// Change the shell's working directory to the first argument.
///
/// Further arguments are ignored. Children spawned afterwards inherit the new
/// directory.
fn cd(args: &ArgVector, _stdout: &mut dyn Write) -> Result<Status> {
    let Some(target) = args.get(1) else {
        return Err(ShellError::MissingArgument("cd").into());
    };
    env::change_dir(target)?;
    Ok(Status::Continue)
}

fn help(_args: &ArgVector, stdout: &mut dyn Write) -> Result<Status> {
    writeln!(stdout, "Standards Shell.")?;
    writeln!(
        stdout,
        "Type the program you want to execute, followed by its arguments, then hit enter."
    )?;
    writeln!(stdout, "The following commands are built into this shell:")?;
    for builtin in BUILTINS {
        writeln!(stdout, "{}", builtin.name)?;
    }
    writeln!(stdout, "Use the man command for information on other programs.")?;
    Ok(Status::Continue)
}

fn exit(_args: &ArgVector, _stdout: &mut dyn Write) -> Result<Status> {
    Ok(Status::Shutdown)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::lock_current_dir;
    use pretty_assertions::assert_eq;
    use std::collections::HashSet;
    use std::env as stdenv;
    use std::fs;

    fn args(list: &[&str]) -> ArgVector {
        ArgVector::new(list.iter().copied())
    }

    #[test]
    fn registry_order_and_uniqueness() {
        let names: Vec<&str> = BUILTINS.iter().map(|b| b.name).collect();
        assert_eq!(names, ["cd", "help", "exit"]);
        let unique: HashSet<&str> = names.iter().copied().collect();
        assert_eq!(unique.len(), names.len());
    }

    #[test]
    fn find_is_case_sensitive() {
        assert_eq!(find("exit").map(|b| b.name), Some("exit"));
        assert!(find("EXIT").is_none());
        assert!(find("ex").is_none());
        assert!(find("ls").is_none());
    }

    #[test]
    fn help_lists_every_builtin_on_its_own_line() {
        let mut out = Vec::new();
        let status = help(&args(&["help"]), &mut out).unwrap();
        assert_eq!(status, Status::Continue);

        let text = String::from_utf8(out).unwrap();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines[0], "Standards Shell.");
        let start = lines
            .iter()
            .position(|l| *l == "The following commands are built into this shell:")
            .unwrap();
        assert_eq!(&lines[start + 1..start + 4], ["cd", "help", "exit"]);
    }

    #[test]
    fn exit_ignores_arguments() {
        let mut out = Vec::new();
        assert_eq!(
            exit(&args(&["exit", "3", "now"]), &mut out).unwrap(),
            Status::Shutdown
        );
        assert!(out.is_empty());
    }

    #[test]
    fn cd_without_argument_errors() {
        let _lock = lock_current_dir();
        let orig = stdenv::current_dir().unwrap();

        let err = cd(&args(&["cd"]), &mut Vec::new()).unwrap_err();

        assert!(matches!(
            err.downcast_ref::<ShellError>(),
            Some(ShellError::MissingArgument("cd"))
        ));
        assert_eq!(stdenv::current_dir().unwrap(), orig);
    }

    #[test]
    fn cd_to_absolute_path_ignores_extra_arguments() {
        let _lock = lock_current_dir();
        let temp = tempfile::tempdir().expect("failed to create temp dir");
        let canonical_temp = fs::canonicalize(temp.path()).expect("canonicalize failed");
        let orig = stdenv::current_dir().unwrap();

        let target = canonical_temp.to_string_lossy().to_string();
        let res = cd(&args(&["cd", target.as_str(), "ignored"]), &mut Vec::new());
        let new_cwd = fs::canonicalize(stdenv::current_dir().unwrap()).unwrap();

        stdenv::set_current_dir(orig).expect("failed to restore cwd");
        assert_eq!(res.unwrap(), Status::Continue);
        assert_eq!(new_cwd, canonical_temp);
    }

    #[test]
    fn cd_nonexistent_path_errors() {
        let _lock = lock_current_dir();
        let orig = stdenv::current_dir().unwrap();

        let name = format!("nonexistent_dir_for_builtin_test_{}", std::process::id());
        let res = cd(&args(&["cd", name.as_str()]), &mut Vec::new());

        assert!(res.is_err());
        assert_eq!(stdenv::current_dir().unwrap(), orig);
    }
}
