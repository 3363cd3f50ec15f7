//! Menu choices and the dispatcher's states

use crate::core::error::AnalyzerError;
use std::io::{self, Write};

/// Menu lines shown before every choice
pub const MENU_LINES: [&str; 5] = [
    "1. Add a new student",
    "2. Add grades for a student",
    "3. Generate a full report",
    "4. Find top performer",
    "5. Exit program",
];

/// Heading shown above the menu
pub const MENU_HEADING: &str = "--- Student Grade Analyzer ---";

/// Prompt for the menu choice
pub const CHOICE_PROMPT: &str = "Enter your choice: ";

/// One of the five menu commands
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    /// `1`
    AddStudent,
    /// `2`
    AddGrades,
    /// `3`
    Report,
    /// `4`
    TopPerformer,
    /// `5`
    Exit,
}

impl MenuChoice {
    /// Parse a choice (trimmed; only the digits `1` to `5` are accepted).
    ///
    /// # Errors
    /// Returns [`AnalyzerError::Menu`] for anything else.
    pub fn parse(choice: &str) -> Result<Self, AnalyzerError> {
        match choice.trim() {
            "1" => Ok(Self::AddStudent),
            "2" => Ok(Self::AddGrades),
            "3" => Ok(Self::Report),
            "4" => Ok(Self::TopPerformer),
            "5" => Ok(Self::Exit),
            other => Err(AnalyzerError::Menu {
                choice: other.to_string(),
            }),
        }
    }
}

/// Dispatcher state
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum State {
    /// Showing the menu and waiting for a choice
    MenuWait,
    /// Running the handler for a command other than exit
    Executing(MenuChoice),
    /// Terminal
    Exit,
}

/// Write the heading and the five option lines
///
/// # Errors
/// Returns any error from writing to `out`.
pub fn write_menu<W: Write>(out: &mut W) -> io::Result<()> {
    writeln!(out)?;
    writeln!(out, "{MENU_HEADING}")?;
    for line in MENU_LINES {
        writeln!(out, "{line}")?;
    }
    Ok(())
}
