//! Injection scheduling.

use chrono::{Datelike, Duration, NaiveDate};

/// Next calendar date falling on `target_weekday` (0 = Sunday ... 6 =
/// Saturday), strictly after `today`.
///
/// When today already is the target weekday the result is a full week
/// out; the scheduler never returns the reference date itself. `today`
/// is the caller's local calendar day, passed explicitly.
pub fn next_injection_date(target_weekday: u8, today: NaiveDate) -> NaiveDate {
    let current = i64::from(today.weekday().num_days_from_sunday());
    let target = i64::from(target_weekday % 7);
    let mut delta = (target - current).rem_euclid(7);
    if delta == 0 {
        delta = 7;
    }
    today + Duration::days(delta)
}
