//! The ordered classification rule chain.

use chrono::{Duration, NaiveDateTime, NaiveTime};

use crate::models::{Classification, DailyRecord};

use super::DateContext;

/// Classifies a single reporting day, first matching rule wins.
///
/// The chain is evaluated in this order:
///
/// 1. No active permit → [`Classification::InvalidTime`]
/// 2. Date on or after the import cutoff minus one day →
///    [`Classification::ImportNotYet`]
/// 3. Weekend and not a makeup day → [`Classification::SkipNonWorkday`]
/// 4. Workday flagged as holiday → [`Classification::SkipHoliday`]
/// 5. Makeup day without a gym entry → [`Classification::NoMakeupDay`]
/// 6. Workday with neither timestamp → [`Classification::NoRecord`]
/// 7. Otherwise `None`: the accumulator resolves the day to `Yes`/`No` from
///    the presence of a gym-entry timestamp.
///
/// The ordering is load-bearing: rules 3 and 4 short-circuit
/// record-absence handling so holidays and weekends are never counted as
/// non-compliant, and rules 5 and 6 only fire when no earlier exception
/// applies.
///
/// # Example
///
/// ```
/// use attendance_engine::engine::{classify_day, DateContext};
/// use attendance_engine::models::{Classification, DailyRecord};
/// use chrono::NaiveDate;
///
/// // A weekday with an active permit and no timestamps at all
/// let record = DailyRecord::synthetic(NaiveDate::from_ymd_opt(2021, 1, 4).unwrap());
/// let classification = classify_day(&record, true, DateContext::default(), None);
/// assert_eq!(classification, Some(Classification::NoRecord));
/// ```
pub fn classify_day(
    record: &DailyRecord,
    permit_active: bool,
    context: DateContext,
    import_cutoff: Option<NaiveDateTime>,
) -> Option<Classification> {
    if !permit_active {
        return Some(Classification::InvalidTime);
    }

    if let Some(cutoff) = import_cutoff {
        // Records are ingested with a one-day lag: a day whose midnight is
        // past cutoff - 1 day has no source data yet.
        if record.date.and_time(NaiveTime::MIN) > cutoff - Duration::days(1) {
            return Some(Classification::ImportNotYet);
        }
    }

    if !record.is_workday() && !context.is_makeup_day {
        return Some(Classification::SkipNonWorkday);
    }

    if record.is_workday() && context.is_holiday {
        return Some(Classification::SkipHoliday);
    }

    if context.is_makeup_day && record.gym_entry_time.is_none() {
        return Some(Classification::NoMakeupDay);
    }

    if record.is_workday() && record.gym_entry_time.is_none() && record.gate_entry_time.is_none() {
        return Some(Classification::NoRecord);
    }

    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn make_date(date_str: &str) -> NaiveDate {
        NaiveDate::parse_from_str(date_str, "%Y-%m-%d").unwrap()
    }

    fn make_datetime(s: &str) -> NaiveDateTime {
        NaiveDateTime::parse_from_str(s, "%Y-%m-%d %H:%M:%S").unwrap()
    }

    fn record_with_times(date: &str, gym: Option<&str>, gate: Option<&str>) -> DailyRecord {
        DailyRecord {
            date: make_date(date),
            member_id: Some("E12345".to_string()),
            gym_entry_time: gym.map(make_datetime),
            gate_entry_time: gate.map(make_datetime),
        }
    }

    const HOLIDAY: DateContext = DateContext {
        is_holiday: true,
        is_makeup_day: false,
    };

    const MAKEUP: DateContext = DateContext {
        is_holiday: false,
        is_makeup_day: true,
    };

    /// CL-001: no active permit beats everything
    #[test]
    fn test_invalid_permit_wins_over_all() {
        // Weekday holiday with a gym entry and a cutoff in the past; the
        // permit check still fires first.
        let record = record_with_times("2021-01-04", Some("2021-01-04 18:00:00"), None);
        let cutoff = Some(make_datetime("2021-01-01 00:00:00"));
        assert_eq!(
            classify_day(&record, false, HOLIDAY, cutoff),
            Some(Classification::InvalidTime)
        );
    }

    /// CL-002: date past the import cutoff
    #[test]
    fn test_import_not_yet() {
        let record = record_with_times("2021-01-05", None, None);
        let cutoff = Some(make_datetime("2021-01-05 08:00:00"));
        assert_eq!(
            classify_day(&record, true, DateContext::default(), cutoff),
            Some(Classification::ImportNotYet)
        );
    }

    /// CL-003: date just before the cutoff window is classified normally
    #[test]
    fn test_day_before_cutoff_window_unaffected() {
        // cutoff - 1 day = 2021-01-04 08:00; midnight of the 4th is before it
        let record = record_with_times("2021-01-04", None, None);
        let cutoff = Some(make_datetime("2021-01-05 08:00:00"));
        assert_eq!(
            classify_day(&record, true, DateContext::default(), cutoff),
            Some(Classification::NoRecord)
        );
    }

    /// CL-004: midnight cutoff fires from the cutoff date on
    #[test]
    fn test_midnight_cutoff_boundary() {
        let cutoff = Some(make_datetime("2021-01-05 00:00:00"));

        let day_before = record_with_times("2021-01-04", None, None);
        assert_eq!(
            classify_day(&day_before, true, DateContext::default(), cutoff),
            Some(Classification::NoRecord)
        );

        let cutoff_day = record_with_times("2021-01-05", None, None);
        assert_eq!(
            classify_day(&cutoff_day, true, DateContext::default(), cutoff),
            Some(Classification::ImportNotYet)
        );
    }

    /// CL-005: plain weekend day
    #[test]
    fn test_weekend_skipped() {
        // 2021-01-09 is a Saturday
        let record = record_with_times("2021-01-09", None, None);
        assert_eq!(
            classify_day(&record, true, DateContext::default(), None),
            Some(Classification::SkipNonWorkday)
        );
    }

    /// CL-006: weekday holiday, even with no record at all
    #[test]
    fn test_holiday_beats_no_record() {
        // 2021-01-01 is a Friday
        let record = record_with_times("2021-01-01", None, None);
        assert_eq!(
            classify_day(&record, true, HOLIDAY, None),
            Some(Classification::SkipHoliday)
        );
    }

    /// CL-007: makeup day without a gym entry
    #[test]
    fn test_makeup_day_without_gym_entry() {
        // 2021-02-20 is a Saturday designated as a makeup day
        let record = record_with_times("2021-02-20", None, Some("2021-02-20 08:00:00"));
        assert_eq!(
            classify_day(&record, true, MAKEUP, None),
            Some(Classification::NoMakeupDay)
        );
    }

    /// CL-008: makeup day with a gym entry is undetermined
    #[test]
    fn test_makeup_day_with_gym_entry_deferred() {
        let record = record_with_times("2021-02-20", Some("2021-02-20 18:00:00"), None);
        assert_eq!(classify_day(&record, true, MAKEUP, None), None);
    }

    /// CL-009: empty workday record means no office presence
    #[test]
    fn test_workday_no_record() {
        let record = record_with_times("2021-01-04", None, None);
        assert_eq!(
            classify_day(&record, true, DateContext::default(), None),
            Some(Classification::NoRecord)
        );
    }

    /// CL-010: workday with a gate entry only is undetermined
    #[test]
    fn test_workday_gate_only_deferred() {
        let record = record_with_times("2021-01-04", None, Some("2021-01-04 08:00:00"));
        assert_eq!(classify_day(&record, true, DateContext::default(), None), None);
    }

    /// CL-011: workday with a gym entry is undetermined
    #[test]
    fn test_workday_gym_entry_deferred() {
        let record = record_with_times("2021-01-04", Some("2021-01-04 18:00:00"), None);
        assert_eq!(classify_day(&record, true, DateContext::default(), None), None);
    }
}
