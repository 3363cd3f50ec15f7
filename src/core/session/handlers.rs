//! Handlers for the menu commands.
//!
//! Each handler receives the roster and the console explicitly. Domain
//! errors are printed as one line and swallowed; only [`SessionError`]
//! escapes.

use super::console::{Console, SessionError};
use crate::core::error::{AnalyzerError, ValidationError};
use crate::core::grades::parse_grade;
use crate::core::models::{Roster, Student};
use crate::core::report;
use crate::{debug, info};
use std::io::{BufRead, Write};

const NAME_PROMPT: &str = "Enter student name: ";
const GRADE_PROMPT: &str = "Enter a grade (or 'done' to finish):";
const DONE_KEYWORD: &str = "done";

/// Printed when the operator leaves the menu
pub const EXIT_MESSAGE: &str = "Exiting program.";

fn reject<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    err: &AnalyzerError,
) -> Result<(), SessionError> {
    info!("Rejected input: {err:?}");
    console.say(err)
}

/// Prompt for a name and add that student.
///
/// # Errors
/// Returns [`SessionError`] on end of input or console failure.
pub fn add_student<R: BufRead, W: Write>(
    roster: &mut Roster,
    console: &mut Console<R, W>,
) -> Result<(), SessionError> {
    let name = console.prompt(NAME_PROMPT)?;
    match roster.add_student(&name) {
        Ok(student) => {
            let added = student.name().to_string();
            debug!("Roster now holds {} student(s)", roster.len());
            console.say(format_args!("Student '{added}' added."))
        }
        Err(err @ AnalyzerError::Validation(ValidationError::EmptyName)) => {
            info!("Rejected input: {err:?}");
            console.say(format_args!("{err} Student not added."))
        }
        Err(err) => reject(console, &err),
    }
}

/// Prompt for a name, then read grades for that student until `done`.
///
/// # Errors
/// Returns [`SessionError`] on end of input or console failure. Grades read
/// before the failure stay on the roster.
pub fn add_grades<R: BufRead, W: Write>(
    roster: &mut Roster,
    console: &mut Console<R, W>,
) -> Result<(), SessionError> {
    let name = console.prompt(NAME_PROMPT)?;
    if name.is_empty() {
        return reject(console, &ValidationError::EmptyName.into());
    }

    let Some(student) = roster.find_student_mut(&name) else {
        return reject(console, &AnalyzerError::NotFound { name });
    };

    console.say(GRADE_PROMPT)?;
    collect_grades(student, console)
}

/// Grade-entry loop for one student. No limit on the number of entries.
fn collect_grades<R: BufRead, W: Write>(
    student: &mut Student,
    console: &mut Console<R, W>,
) -> Result<(), SessionError> {
    loop {
        let line = console.read_line()?;
        if line.eq_ignore_ascii_case(DONE_KEYWORD) {
            debug!(
                "Finished grade entry for {} ({} grade(s))",
                student.name(),
                student.grades().len()
            );
            return Ok(());
        }

        match parse_grade(&line) {
            Ok(grade) => {
                student.add_grade(grade);
                console.say(format_args!("Added grade {grade} for {}.", student.name()))?;
            }
            Err(err) => reject(console, &err.into())?,
        }
    }
}

/// Print the full class report.
///
/// # Errors
/// Returns [`SessionError::Io`] on console failure.
pub fn report<R: BufRead, W: Write>(
    roster: &Roster,
    console: &mut Console<R, W>,
) -> Result<(), SessionError> {
    report::write_report(console.output(), roster)?;
    Ok(())
}

/// Print the top performer line.
///
/// # Errors
/// Returns [`SessionError::Io`] on console failure.
pub fn top_performer<R: BufRead, W: Write>(
    roster: &Roster,
    console: &mut Console<R, W>,
) -> Result<(), SessionError> {
    report::write_top_performer(console.output(), roster)?;
    Ok(())
}
