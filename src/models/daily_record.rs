//! Daily attendance record model.

use chrono::{Datelike, NaiveDate, NaiveDateTime, Weekday};
use serde::{Deserialize, Serialize};

/// One day's worth of raw attendance data for an employee.
///
/// Records arrive from the upstream badge system with a gym-entry timestamp
/// and a building-gate timestamp, either of which may be absent. Dates that
/// are missing from a reporting period are filled in with synthetic records
/// that carry a date and nothing else.
///
/// # Example
///
/// ```
/// use attendance_engine::models::DailyRecord;
/// use chrono::NaiveDate;
///
/// // 2021-01-04 is a Monday
/// let record = DailyRecord::synthetic(NaiveDate::from_ymd_opt(2021, 1, 4).unwrap());
/// assert!(record.is_workday());
/// assert!(record.gym_entry_time.is_none());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DailyRecord {
    /// The calendar date this record belongs to.
    pub date: NaiveDate,
    /// External identifier of the record holder; absent on synthetic records.
    #[serde(default)]
    pub member_id: Option<String>,
    /// Timestamp of the first gym entry on this date, if any.
    #[serde(default)]
    pub gym_entry_time: Option<NaiveDateTime>,
    /// Timestamp of the first building-gate entry on this date, if any.
    #[serde(default)]
    pub gate_entry_time: Option<NaiveDateTime>,
}

impl DailyRecord {
    /// Creates an empty record for a date that had no upstream data.
    pub fn synthetic(date: NaiveDate) -> Self {
        Self {
            date,
            member_id: None,
            gym_entry_time: None,
            gate_entry_time: None,
        }
    }

    /// Returns `true` if the record's date is a workday (Monday to Friday).
    pub fn is_workday(&self) -> bool {
        !matches!(self.date.weekday(), Weekday::Sat | Weekday::Sun)
    }
}
