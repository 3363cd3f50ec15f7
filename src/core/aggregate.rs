//! Grade averages and class-wide summary statistics

use crate::core::grades::Grade;
use crate::core::models::{Roster, Student};

/// Arithmetic mean of `grades`, or `None` for an empty slice.
#[must_use]
#[allow(clippy::cast_precision_loss)]
pub fn average(grades: &[Grade]) -> Option<f64> {
    if grades.is_empty() {
        return None;
    }
    let total: u64 = grades.iter().map(|grade| u64::from(grade.value())).sum();
    Some(total as f64 / grades.len() as f64)
}

/// A student's name paired with their average, if they have one
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StudentAverage<'a> {
    /// Student name
    pub name: &'a str,
    /// Average grade, `None` when no grades were entered
    pub average: Option<f64>,
}

impl<'a> From<&'a Student> for StudentAverage<'a> {
    fn from(student: &'a Student) -> Self {
        Self {
            name: student.name(),
            average: student.average(),
        }
    }
}

/// Per-student averages in roster order
#[must_use]
pub fn student_averages(roster: &Roster) -> Vec<StudentAverage<'_>> {
    roster.students().iter().map(StudentAverage::from).collect()
}

/// Summary statistics over the students that have at least one grade
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Summary {
    /// Highest student average
    pub max: f64,
    /// Lowest student average
    pub min: f64,
    /// Mean of the student averages; every graded student counts once
    /// however many grades they have
    pub overall: f64,
    /// Number of students that contributed
    pub graded_students: usize,
}

/// Compute [`Summary`] statistics for the roster.
///
/// Returns `None` when no student has a grade.
#[must_use]
#[allow(clippy::cast_precision_loss)]
pub fn summarize(roster: &Roster) -> Option<Summary> {
    let averages: Vec<f64> = roster.students().iter().filter_map(Student::average).collect();
    if averages.is_empty() {
        return None;
    }

    let max = averages.iter().copied().fold(f64::NEG_INFINITY, f64::max);
    let min = averages.iter().copied().fold(f64::INFINITY, f64::min);
    let overall = averages.iter().sum::<f64>() / averages.len() as f64;

    Some(Summary {
        max,
        min,
        overall,
        graded_students: averages.len(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn grades(values: &[u8]) -> Vec<Grade> {
        values.iter().map(|&v| Grade::new(v).unwrap()).collect()
    }

    fn add(roster: &mut Roster, name: &str, values: &[u8]) {
        roster.add_student(name).unwrap();
        let student = roster.find_student_mut(name).unwrap();
        for grade in grades(values) {
            student.add_grade(grade);
        }
    }

    #[test]
    fn test_average_empty_is_undefined() {
        assert_eq!(average(&[]), None);
    }

    #[test]
    fn test_average_of_grades() {
        assert_eq!(average(&grades(&[80, 90])), Some(85.0));
        assert_eq!(average(&grades(&[100])), Some(100.0));
        assert_eq!(average(&grades(&[0, 0, 1])), Some(1.0 / 3.0));
    }

    #[test]
    fn test_student_averages_in_roster_order() {
        let mut roster = Roster::new();
        add(&mut roster, "Bob", &[]);
        add(&mut roster, "Amy", &[70, 80]);
        let averages = student_averages(&roster);
        assert_eq!(
            averages,
            vec![
                StudentAverage {
                    name: "Bob",
                    average: None
                },
                StudentAverage {
                    name: "Amy",
                    average: Some(75.0)
                },
            ]
        );
    }

    #[test]
    fn test_summary_none_without_grades() {
        assert_eq!(summarize(&Roster::new()), None);
        let mut roster = Roster::new();
        add(&mut roster, "Bob", &[]);
        assert_eq!(summarize(&roster), None);
    }

    #[test]
    fn test_overall_is_mean_of_student_averages() {
        // Pooled mean would be (100 + 10*50) / 11 = 54.5...
        let mut roster = Roster::new();
        add(&mut roster, "One", &[100]);
        add(&mut roster, "Ten", &[50; 10]);
        add(&mut roster, "None", &[]);
        let summary = summarize(&roster).unwrap();
        assert_eq!(summary.max, 100.0);
        assert_eq!(summary.min, 50.0);
        assert_eq!(summary.overall, 75.0);
        assert_eq!(summary.graded_students, 2);
    }
}
