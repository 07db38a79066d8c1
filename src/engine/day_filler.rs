//! Period normalization: one record per calendar date.

use std::collections::HashSet;

use chrono::NaiveDate;

use crate::models::DailyRecord;

/// Appends a synthetic record for every date in `[start_date, end_date]`
/// that has no record yet.
///
/// Pre-existing records are left untouched, including duplicate dates. When
/// `start_date > end_date` nothing is added. Calling this twice with the
/// same arguments adds nothing the second time.
///
/// # Example
///
/// ```
/// use attendance_engine::engine::fill_missing_days;
/// use chrono::NaiveDate;
///
/// let mut records = Vec::new();
/// fill_missing_days(
///     &mut records,
///     NaiveDate::from_ymd_opt(2021, 1, 1).unwrap(),
///     NaiveDate::from_ymd_opt(2021, 1, 31).unwrap(),
/// );
/// assert_eq!(records.len(), 31);
/// ```
pub fn fill_missing_days(records: &mut Vec<DailyRecord>, start_date: NaiveDate, end_date: NaiveDate) {
    let existing: HashSet<NaiveDate> = records.iter().map(|r| r.date).collect();

    let mut date = start_date;
    while date <= end_date {
        if !existing.contains(&date) {
            records.push(DailyRecord::synthetic(date));
        }
        date = date.succ_opt().expect("date within chrono range");
    }
}
