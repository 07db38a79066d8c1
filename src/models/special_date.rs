//! Special calendar date model.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// The kind of a special calendar date.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SpecialDateKind {
    /// A national holiday falling on a workday; attendance is not expected.
    NationalHoliday,
    /// A designated non-workday that substitutes for a workday; attendance
    /// is still expected.
    MakeupDay,
}

/// An exceptional calendar date that overrides the plain weekday/weekend
/// distinction.
///
/// When the input list contains duplicate entries for a date, the first
/// entry by input order wins.
///
/// # Example
///
/// ```
/// use attendance_engine::models::{SpecialDate, SpecialDateKind};
/// use chrono::NaiveDate;
///
/// let holiday = SpecialDate {
///     date: NaiveDate::from_ymd_opt(2021, 1, 1).unwrap(),
///     kind: SpecialDateKind::NationalHoliday,
/// };
/// assert_eq!(holiday.kind, SpecialDateKind::NationalHoliday);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SpecialDate {
    /// The calendar date the entry applies to.
    pub date: NaiveDate,
    /// Whether the date is a holiday or a makeup day.
    pub kind: SpecialDateKind,
}
