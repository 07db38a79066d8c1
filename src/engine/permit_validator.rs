//! Permit validity check for a date.

use chrono::NaiveDate;

use crate::models::Permit;

/// Returns `true` if any permit in the list is active on the given date.
///
/// Overlapping permits resolve with OR semantics; no conflict detection is
/// performed.
///
/// # Example
///
/// ```
/// use attendance_engine::engine::has_active_permit;
/// use attendance_engine::models::Permit;
/// use chrono::NaiveDate;
/// use uuid::Uuid;
///
/// let permits = vec![Permit {
///     id: Uuid::new_v4(),
///     valid_from: NaiveDate::from_ymd_opt(2021, 1, 1).unwrap(),
///     invalid_to: Some(NaiveDate::from_ymd_opt(2021, 12, 31).unwrap()),
/// }];
///
/// assert!(has_active_permit(&permits, NaiveDate::from_ymd_opt(2021, 6, 1).unwrap()));
/// assert!(!has_active_permit(&permits, NaiveDate::from_ymd_opt(2022, 1, 1).unwrap()));
/// ```
pub fn has_active_permit(permits: &[Permit], date: NaiveDate) -> bool {
    permits.iter().any(|p| p.covers(date))
}
