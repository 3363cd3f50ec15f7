//! Student model

use crate::core::aggregate;
use crate::core::error::ValidationError;
use crate::core::grades::Grade;

/// One student on the roster: a name and the grades entered for it
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Student {
    name: String,
    grades: Vec<Grade>,
}

impl Student {
    /// Create a student with no grades
    ///
    /// # Arguments
    /// * `name` - Display name; surrounding whitespace is removed
    ///
    /// # Errors
    /// Returns [`ValidationError::EmptyName`] if the trimmed name is empty.
    pub fn new(name: &str) -> Result<Self, ValidationError> {
        let name = name.trim();
        if name.is_empty() {
            return Err(ValidationError::EmptyName);
        }
        Ok(Self {
            name: name.to_string(),
            grades: Vec::new(),
        })
    }

    /// Name as it was entered (trimmed)
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Grades in the order they were entered
    #[must_use]
    pub fn grades(&self) -> &[Grade] {
        &self.grades
    }

    /// Append a grade
    pub fn add_grade(&mut self, grade: Grade) {
        self.grades.push(grade);
    }

    /// Mean of this student's grades, or `None` when no grades were entered
    #[must_use]
    pub fn average(&self) -> Option<f64> {
        aggregate::average(&self.grades)
    }

    /// Whether `name` refers to this student (trimmed, case-insensitive)
    #[must_use]
    pub fn is_named(&self, name: &str) -> bool {
        self.name.to_lowercase() == name.trim().to_lowercase()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn grade(value: u8) -> Grade {
        Grade::new(value).unwrap()
    }

    #[test]
    fn test_student_creation() {
        let student = Student::new("  Ada Lovelace ").unwrap();
        assert_eq!(student.name(), "Ada Lovelace");
        assert!(student.grades().is_empty());
        assert!(student.average().is_none());
    }

    #[test]
    fn test_blank_name_rejected() {
        assert_eq!(Student::new(""), Err(ValidationError::EmptyName));
        assert_eq!(Student::new(" \t "), Err(ValidationError::EmptyName));
    }

    #[test]
    fn test_grades_keep_entry_order() {
        let mut student = Student::new("Grace").unwrap();
        student.add_grade(grade(90));
        student.add_grade(grade(70));
        student.add_grade(grade(90));
        assert_eq!(student.grades(), &[grade(90), grade(70), grade(90)]);
        assert_eq!(student.average(), Some(250.0 / 3.0));
    }

    #[test]
    fn test_is_named_ignores_case_and_whitespace() {
        let student = Student::new("Ren").unwrap();
        assert!(student.is_named("ren"));
        assert!(student.is_named("  REN "));
        assert!(!student.is_named("Renn"));
    }
}
