//! Domain errors raised by roster, grade and menu operations.
//!
//! None of these are fatal: a handler that hits one prints its message and
//! hands control back to the menu loop. The `Display` text is the message
//! shown to the operator.

use thiserror::Error;

/// Rejected operator input
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// Name was empty after trimming
    #[error("No name entered.")]
    EmptyName,
    /// Text did not parse to a whole number in `0..=100`
    #[error("Invalid input. Please enter a number between 0 and 100.")]
    InvalidGrade {
        /// Trimmed text that was rejected
        input: String,
    },
}

/// Any recoverable failure of a menu command
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AnalyzerError {
    /// Input failed validation
    #[error(transparent)]
    Validation(#[from] ValidationError),
    /// A student with a case-insensitively equal name is already on the roster
    #[error("Student '{name}' already exists.")]
    Duplicate {
        /// Name as typed by the operator, trimmed
        name: String,
    },
    /// No student with that name is on the roster
    #[error("Student '{name}' not found.")]
    NotFound {
        /// Name as typed by the operator, trimmed
        name: String,
    },
    /// Menu choice outside `1..=5`
    #[error("Invalid choice. Please enter a number between 1 and 5.")]
    Menu {
        /// Trimmed choice text
        choice: String,
    },
}
