//! Roster model: the ordered set of students for one session

use crate::core::error::AnalyzerError;
use crate::core::models::Student;

/// Students in the order they were added.
///
/// Names are unique under trimmed, case-insensitive comparison.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Roster {
    students: Vec<Student>,
}

impl Roster {
    /// Create an empty roster
    #[must_use]
    pub const fn new() -> Self {
        Self {
            students: Vec::new(),
        }
    }

    /// Add a student with no grades
    ///
    /// # Errors
    /// - [`AnalyzerError::Validation`] if the trimmed name is empty
    /// - [`AnalyzerError::Duplicate`] if a student with the same name (ignoring case) exists
    pub fn add_student(&mut self, name: &str) -> Result<&Student, AnalyzerError> {
        let student = Student::new(name)?;
        if self.find_student(student.name()).is_some() {
            return Err(AnalyzerError::Duplicate {
                name: student.name().to_string(),
            });
        }
        let slot = self.students.len();
        self.students.push(student);
        Ok(&self.students[slot])
    }

    /// Look up a student by name (trimmed, case-insensitive)
    #[must_use]
    pub fn find_student(&self, name: &str) -> Option<&Student> {
        self.students.iter().find(|student| student.is_named(name))
    }

    /// Look up a student by name for appending grades
    pub fn find_student_mut(&mut self, name: &str) -> Option<&mut Student> {
        self.students.iter_mut().find(|student| student.is_named(name))
    }

    /// All students in insertion order
    #[must_use]
    pub fn students(&self) -> &[Student] {
        &self.students
    }

    /// Number of students
    #[must_use]
    pub fn len(&self) -> usize {
        self.students.len()
    }

    /// Whether no students have been added
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.students.is_empty()
    }
}
