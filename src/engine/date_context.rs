//! Holiday and makeup-day lookup for a date.

use chrono::NaiveDate;

use crate::models::{SpecialDate, SpecialDateKind};

/// Calendar flags for a single date, consumed by the classification chain.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct DateContext {
    /// The date is flagged as a national holiday.
    pub is_holiday: bool,
    /// The date is flagged as a makeup day.
    pub is_makeup_day: bool,
}

/// Resolves the holiday/makeup-day flags for a date.
///
/// At most the first entry matching the date (by input order) determines
/// the result; both flags are `false` when nothing matches.
///
/// # Example
///
/// ```
/// use attendance_engine::engine::resolve_date_context;
/// use attendance_engine::models::{SpecialDate, SpecialDateKind};
/// use chrono::NaiveDate;
///
/// let date = NaiveDate::from_ymd_opt(2021, 1, 1).unwrap();
/// let list = vec![SpecialDate { date, kind: SpecialDateKind::NationalHoliday }];
///
/// let ctx = resolve_date_context(date, &list);
/// assert!(ctx.is_holiday);
/// assert!(!ctx.is_makeup_day);
/// ```
pub fn resolve_date_context(date: NaiveDate, special_dates: &[SpecialDate]) -> DateContext {
    let mut context = DateContext::default();

    if let Some(entry) = special_dates.iter().find(|s| s.date == date) {
        match entry.kind {
            SpecialDateKind::NationalHoliday => context.is_holiday = true,
            SpecialDateKind::MakeupDay => context.is_makeup_day = true,
        }
    }

    context
}
