//! Selection of the student with the highest average

use crate::core::aggregate::StudentAverage;
use crate::core::models::Roster;

/// The winning student and their average
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TopPerformer<'a> {
    /// Student name
    pub name: &'a str,
    /// Their average grade
    pub average: f64,
}

/// Find the student with the strictly highest average.
///
/// Students without grades are skipped. On an exact tie the student added
/// first keeps the spot. Returns `None` when nobody has a grade.
#[must_use]
pub fn top_performer(roster: &Roster) -> Option<TopPerformer<'_>> {
    let mut best: Option<TopPerformer<'_>> = None;

    for entry in roster.students().iter().map(StudentAverage::from) {
        let Some(average) = entry.average else {
            continue;
        };
        if best.is_none_or(|current| average > current.average) {
            best = Some(TopPerformer {
                name: entry.name,
                average,
            });
        }
    }

    best
}
