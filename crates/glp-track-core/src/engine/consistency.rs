//! Duplicate-visit detection.

use chrono::NaiveDate;

use crate::models::{ProximityWarning, Visit};

/// Look for an existing visit within 7 days of `candidate`.
///
/// Linear scan in collection order; the first visit whose absolute day
/// difference is strictly below 7 wins. Purely advisory, never blocks
/// submission.
pub fn check_visit_proximity(
    existing: &[Visit],
    candidate: NaiveDate,
) -> Option<ProximityWarning> {
    existing
        .iter()
        .find(|v| (candidate - v.date).num_days().abs() < 7)
        .map(|v| ProximityWarning {
            conflicting_date: v.date,
            message: format!(
                "Note: a visit already exists less than 7 days away ({}).",
                v.date
            ),
        })
}
