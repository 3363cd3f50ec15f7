//! Text rendering of the class report and the top-performer line
//!
//! Averages are always shown with one decimal place.

use crate::core::aggregate::{student_averages, summarize, StudentAverage};
use crate::core::models::Roster;
use crate::core::top_performer::top_performer;
use std::io::{self, Write};

/// Heading printed before the per-student lines
pub const REPORT_HEADING: &str = "--- Student Report ---";

/// Printed instead of the summary block when no student has a grade
pub const NO_SUMMARY_MESSAGE: &str = "No grades available to compute summary statistics.";

/// Printed when no student has a grade to rank
pub const NO_TOP_PERFORMER_MESSAGE: &str =
    "There is no top student (no students added or no grades entered).";

/// Format one student's report line
#[must_use]
pub fn student_line(entry: &StudentAverage<'_>) -> String {
    match entry.average {
        Some(average) => format!("{}'s average grade is {average:.1}.", entry.name),
        None => format!("{}'s average grade is N/A.", entry.name),
    }
}

/// Write the full report: one line per student, then max/min/overall
/// averages or the no-summary message.
///
/// # Errors
/// Returns any error from writing to `out`.
pub fn write_report<W: Write>(out: &mut W, roster: &Roster) -> io::Result<()> {
    writeln!(out)?;
    writeln!(out, "{REPORT_HEADING}")?;
    for entry in student_averages(roster) {
        writeln!(out, "{}", student_line(&entry))?;
    }

    let Some(summary) = summarize(roster) else {
        writeln!(out)?;
        writeln!(out, "{NO_SUMMARY_MESSAGE}")?;
        return Ok(());
    };

    writeln!(out)?;
    writeln!(out, "Max Average: {:.1}", summary.max)?;
    writeln!(out, "Min Average: {:.1}", summary.min)?;
    writeln!(out, "Overall Average: {:.1}", summary.overall)?;
    Ok(())
}

/// Write the single top-performer line.
///
/// # Errors
/// Returns any error from writing to `out`.
pub fn write_top_performer<W: Write>(out: &mut W, roster: &Roster) -> io::Result<()> {
    match top_performer(roster) {
        Some(top) => writeln!(
            out,
            "The student with the highest average is {} with a grade of {:.1}.",
            top.name, top.average
        ),
        None => writeln!(out, "{NO_TOP_PERFORMER_MESSAGE}"),
    }
}
