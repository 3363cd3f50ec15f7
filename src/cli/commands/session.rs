//! Interactive session command handler

use grade_analyzer::core::session::Session;
use grade_analyzer::{error, verbose};
use std::io;
use std::process::ExitCode;

/// Run the menu session on the process's standard input and output
pub fn run() -> ExitCode {
    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut session = Session::new(stdin.lock(), stdout.lock());

    match session.run() {
        Ok(()) => {
            verbose!("✓ Session finished");
            ExitCode::SUCCESS
        }
        Err(err) => {
            error!("Session aborted: {err}");
            eprintln!("✗ {err}");
            ExitCode::FAILURE
        }
    }
}
