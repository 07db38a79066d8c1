//! Per-day report detail row.

use serde::{Deserialize, Serialize};

use super::Classification;

/// One formatted line of the per-day compliance report.
///
/// Rows are built once per day by the accumulator, in ascending date order,
/// and are immutable after creation. The `running_percentage` is a
/// cumulative snapshot through that day, not a per-day rate.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DetailRow {
    /// The record date formatted as `YYYY/MM/DD Www` (e.g. `2021/01/04 Mon`).
    pub date: String,
    /// External identifier of the record holder, when known.
    #[serde(default)]
    pub member_id: Option<String>,
    /// The final classification for this day; `None` only when the rule
    /// chain deferred and neither timestamp was present.
    #[serde(default)]
    pub classification: Option<Classification>,
    /// The gym-entry timestamp formatted as `YYYY/MM/DD HH:MM:SS`, when the
    /// day had one. Present for display even on days excluded from the
    /// ratio.
    #[serde(default)]
    pub gym_entry_time: Option<String>,
    /// The cumulative compliance percentage through this day, e.g. `66.7%`.
    pub running_percentage: String,
}
