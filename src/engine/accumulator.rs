//! Per-period accumulation of classifications into a compliance percentage.

use chrono::{NaiveDate, NaiveDateTime};
use rust_decimal::{Decimal, RoundingStrategy};
use serde::Serialize;

use crate::models::{Classification, DailyRecord, DetailRow, Permit, SpecialDate};

use super::{classify_day, fill_missing_days, has_active_permit, resolve_date_context};

/// The result of processing one reporting period.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PeriodSummary {
    /// The compliance percentage after the last day of the period, rounded
    /// to one decimal place. `0` for an empty period.
    pub final_percentage: Decimal,
    /// One detail row per processed day, in ascending date order.
    pub rows: Vec<DetailRow>,
}

/// Runs the full per-day pipeline over a reporting period.
///
/// Missing dates in `[start_date, end_date]` are filled with synthetic
/// records, then all records are walked in ascending date order (stable, so
/// duplicate dates keep their input order). Each day is classified and
/// folded into the running counters:
///
/// - `NoRecord` counts as both eligible and compliant (no office presence
///   at all is not held against the employee).
/// - An undetermined day with a gym entry resolves to `Yes` and counts as
///   both; with only a gate entry it resolves to `No` and counts as
///   eligible only.
/// - Every other classification leaves the counters untouched; a gym-entry
///   timestamp is still surfaced on the row for display.
///
/// The percentage attached to each row is a cumulative snapshot through
/// that day; the period value is the snapshot from the last row.
///
/// # Example
///
/// ```
/// use attendance_engine::engine::process_period;
/// use chrono::NaiveDate;
///
/// let start = NaiveDate::from_ymd_opt(2021, 1, 1).unwrap();
/// let end = NaiveDate::from_ymd_opt(2021, 1, 31).unwrap();
///
/// // No permits: every day is excluded from the ratio
/// let summary = process_period(start, end, None, &[], Vec::new(), &[]);
/// assert_eq!(summary.rows.len(), 31);
/// assert_eq!(summary.final_percentage, rust_decimal::Decimal::ZERO);
/// ```
pub fn process_period(
    start_date: NaiveDate,
    end_date: NaiveDate,
    import_cutoff: Option<NaiveDateTime>,
    permits: &[Permit],
    mut records: Vec<DailyRecord>,
    special_dates: &[SpecialDate],
) -> PeriodSummary {
    fill_missing_days(&mut records, start_date, end_date);
    records.sort_by_key(|r| r.date);

    let mut counted_days = 0u32;
    let mut compliant_days = 0u32;
    let mut percentage = Decimal::ZERO;
    let mut rows = Vec::with_capacity(records.len());

    for record in &records {
        let context = resolve_date_context(record.date, special_dates);
        let permit_active = has_active_permit(permits, record.date);

        let mut classification = classify_day(record, permit_active, context, import_cutoff);
        let mut gym_entry_display = None;

        match classification {
            Some(Classification::NoRecord) => {
                counted_days += 1;
                compliant_days += 1;
            }
            None => {
                if record.gym_entry_time.is_some() || record.gate_entry_time.is_some() {
                    counted_days += 1;
                }
                if let Some(entered_at) = record.gym_entry_time {
                    compliant_days += 1;
                    gym_entry_display = Some(format_timestamp(entered_at));
                    classification = Some(Classification::Yes);
                } else if record.gate_entry_time.is_some() {
                    classification = Some(Classification::No);
                }
            }
            Some(_) => {
                // Excluded from the ratio, but the timestamp is still shown.
                gym_entry_display = record.gym_entry_time.map(format_timestamp);
            }
        }

        percentage = running_percentage(compliant_days, counted_days);

        rows.push(DetailRow {
            date: format_date(record.date),
            member_id: record.member_id.clone(),
            classification,
            gym_entry_time: gym_entry_display,
            running_percentage: format!("{}%", percentage.normalize()),
        });
    }

    PeriodSummary {
        final_percentage: percentage,
        rows,
    }
}

/// Computes the cumulative percentage, guarding the empty denominator.
///
/// Rounded to one decimal place, midpoints away from zero.
fn running_percentage(compliant_days: u32, counted_days: u32) -> Decimal {
    if counted_days == 0 {
        return Decimal::ZERO;
    }

    (Decimal::from(compliant_days) / Decimal::from(counted_days) * Decimal::ONE_HUNDRED)
        .round_dp_with_strategy(1, RoundingStrategy::MidpointAwayFromZero)
}

fn format_date(date: NaiveDate) -> String {
    date.format("%Y/%m/%d %a").to_string()
}

fn format_timestamp(timestamp: NaiveDateTime) -> String {
    timestamp.format("%Y/%m/%d %H:%M:%S").to_string()
}
