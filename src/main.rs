use standards_shell::{Interpreter, report};
use std::process::ExitCode;

fn main() -> ExitCode {
    // Arguments given to the shell itself are ignored.
    let shell = Interpreter::default();

    let stdin = std::io::stdin();
    let mut stdout = std::io::stdout();
    let mut stderr = std::io::stderr();

    match shell.repl(stdin.lock(), &mut stdout, &mut stderr) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            debug_assert!(e.is_fatal(), "recoverable error escaped the read loop: {e}");
            report(e, &mut stderr);
            ExitCode::FAILURE
        }
    }
}
