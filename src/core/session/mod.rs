//! Interactive menu session.
//!
//! [`Session`] owns the roster for its whole lifetime and drives the
//! menu state machine over any line-buffered input and writable output:
//!
//! | State      | Input       | Action                  | Next       |
//! |------------|-------------|-------------------------|------------|
//! | `MenuWait` | `1`..`4`    | run the command handler | `MenuWait` |
//! | `MenuWait` | `5`         | print the exit message  | `Exit`     |
//! | `MenuWait` | other       | print "invalid choice"  | `MenuWait` |
//!
//! End of input at any pending read is treated like choosing `5`.

pub mod console;
pub mod handlers;
pub mod menu;

pub use console::{Console, SessionError};
pub use menu::{MenuChoice, State};

use crate::core::models::Roster;
use crate::{info, warn};
use handlers::EXIT_MESSAGE;
use std::io::{BufRead, Write};

/// One run of the interactive tool
#[derive(Debug)]
pub struct Session<R, W> {
    console: Console<R, W>,
    roster: Roster,
}

impl<R: BufRead, W: Write> Session<R, W> {
    /// Start a session with an empty roster
    pub const fn new(input: R, output: W) -> Self {
        Self {
            console: Console::new(input, output),
            roster: Roster::new(),
        }
    }

    /// Run the menu loop until the operator exits or input ends.
    ///
    /// # Errors
    /// Returns [`SessionError::Io`] if the console cannot be read or written.
    pub fn run(&mut self) -> Result<(), SessionError> {
        info!("Session started");
        let mut state = State::MenuWait;
        while state != State::Exit {
            state = match self.step(state) {
                Ok(next) => next,
                Err(SessionError::InputClosed) => {
                    warn!("Input closed; leaving the session");
                    self.console.say("")?;
                    self.console.say(EXIT_MESSAGE)?;
                    State::Exit
                }
                Err(err) => return Err(err),
            };
        }
        self.console.flush()?;
        info!("Session ended with {} student(s)", self.roster.len());
        Ok(())
    }

    /// Apply one transition of the state machine
    fn step(&mut self, state: State) -> Result<State, SessionError> {
        match state {
            State::MenuWait => self.await_choice(),
            State::Executing(choice) => {
                self.execute(choice)?;
                Ok(State::MenuWait)
            }
            State::Exit => Ok(State::Exit),
        }
    }

    fn await_choice(&mut self) -> Result<State, SessionError> {
        menu::write_menu(self.console.output())?;
        let choice = self.console.prompt(menu::CHOICE_PROMPT)?;
        match MenuChoice::parse(&choice) {
            Ok(MenuChoice::Exit) => {
                self.console.say(EXIT_MESSAGE)?;
                Ok(State::Exit)
            }
            Ok(choice) => Ok(State::Executing(choice)),
            Err(err) => {
                info!("Rejected input: {err:?}");
                self.console.say(&err)?;
                Ok(State::MenuWait)
            }
        }
    }

    fn execute(&mut self, choice: MenuChoice) -> Result<(), SessionError> {
        let Self { console, roster } = self;
        match choice {
            MenuChoice::AddStudent => handlers::add_student(roster, console),
            MenuChoice::AddGrades => handlers::add_grades(roster, console),
            MenuChoice::Report => handlers::report(roster, console),
            MenuChoice::TopPerformer => handlers::top_performer(roster, console),
            MenuChoice::Exit => Ok(()),
        }
    }

    /// The roster built so far
    pub const fn roster(&self) -> &Roster {
        &self.roster
    }

    /// End the session and return the output stream
    pub fn into_output(self) -> W {
        self.console.into_inner().1
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::{self, BufReader, Read};

    /// Output whose reader has gone away
    struct ClosedPipe;

    impl Write for ClosedPipe {
        fn write(&mut self, _buf: &[u8]) -> io::Result<usize> {
            Err(io::ErrorKind::BrokenPipe.into())
        }

        fn flush(&mut self) -> io::Result<()> {
            Err(io::ErrorKind::BrokenPipe.into())
        }
    }

    /// Input that fails on every read
    struct FailingInput;

    impl Read for FailingInput {
        fn read(&mut self, _buf: &mut [u8]) -> io::Result<usize> {
            Err(io::ErrorKind::ConnectionReset.into())
        }
    }

    fn run(input: &str) -> (Roster, String) {
        let mut session = Session::new(input.as_bytes(), Vec::new());
        session.run().unwrap();
        let roster = session.roster().clone();
        (roster, String::from_utf8(session.into_output()).unwrap())
    }

    #[test]
    fn test_exit_choice_ends_session() {
        let (roster, out) = run("5\nthis is never read\n");
        assert!(roster.is_empty());
        assert!(out.ends_with("Enter your choice: Exiting program.\n"));
        assert_eq!(out.matches("--- Student Grade Analyzer ---").count(), 1);
    }

    #[test]
    fn test_invalid_choice_loops_back_to_menu() {
        let (_, out) = run("9\n\n5\n");
        assert_eq!(
            out.matches("Invalid choice. Please enter a number between 1 and 5.")
                .count(),
            2
        );
        assert_eq!(out.matches("--- Student Grade Analyzer ---").count(), 3);
    }

    #[test]
    fn test_end_of_input_exits_cleanly() {
        let (roster, out) = run("1\nZoe\n");
        assert_eq!(roster.len(), 1);
        assert!(out.ends_with("Enter your choice: \nExiting program.\n"));
    }

    #[test]
    fn test_write_failure_aborts_session() {
        let mut session = Session::new("1\nAna\n5\n".as_bytes(), ClosedPipe);
        match session.run() {
            Err(SessionError::Io(err)) => assert_eq!(err.kind(), io::ErrorKind::BrokenPipe),
            other => panic!("expected an I/O failure, got {other:?}"),
        }
        assert!(session.roster().is_empty());
    }

    #[test]
    fn test_read_failure_is_not_treated_as_end_of_input() {
        let mut session = Session::new(BufReader::new(FailingInput), Vec::new());
        match session.run() {
            Err(SessionError::Io(err)) => assert_eq!(err.kind(), io::ErrorKind::ConnectionReset),
            other => panic!("expected an I/O failure, got {other:?}"),
        }
        let out = String::from_utf8(session.into_output()).unwrap();
        assert!(!out.contains(EXIT_MESSAGE));
    }

    #[test]
    fn test_executing_returns_to_menu() {
        let mut session = Session::new("Ana\n".as_bytes(), Vec::new());
        let next = session.step(State::Executing(MenuChoice::AddStudent)).unwrap();
        assert_eq!(next, State::MenuWait);
        assert!(session.roster().find_student("ana").is_some());
    }
}
