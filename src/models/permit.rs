//! Access permit model.
//!
//! A permit is a time-bounded authorization granting facility access.
//! Permit validity drives the first rule of the classification chain: a day
//! with no active permit never counts toward the compliance ratio.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A time-bounded authorization record granting facility access.
///
/// An absent `invalid_to` means the permit is open-ended. When both bounds
/// are present, `valid_from <= invalid_to` is expected of the input data.
///
/// # Example
///
/// ```
/// use attendance_engine::models::Permit;
/// use chrono::NaiveDate;
/// use uuid::Uuid;
///
/// let permit = Permit {
///     id: Uuid::new_v4(),
///     valid_from: NaiveDate::from_ymd_opt(2021, 1, 1).unwrap(),
///     invalid_to: None,
/// };
/// assert!(permit.covers(NaiveDate::from_ymd_opt(2021, 6, 15).unwrap()));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Permit {
    /// Unique identifier of the permit.
    pub id: Uuid,
    /// First date (inclusive) on which the permit is active.
    pub valid_from: NaiveDate,
    /// Last date (inclusive) on which the permit is active; `None` means
    /// open-ended.
    #[serde(default)]
    pub invalid_to: Option<NaiveDate>,
}

impl Permit {
    /// Returns `true` if the permit is active on the given date.
    ///
    /// A permit covers a date when `valid_from <= date` and the end bound is
    /// either absent or on/after the date.
    pub fn covers(&self, date: NaiveDate) -> bool {
        self.valid_from <= date && self.invalid_to.map_or(true, |end| end >= date)
    }
}
