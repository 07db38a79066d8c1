//! Request types for the Attendance Compliance Engine API.

use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};

use crate::models::{DailyRecord, Permit, SpecialDate};

/// Request payload for the report endpoint.
///
/// Carries one employee's reporting period: the period bounds, the optional
/// import cutoff, the access permits, the raw daily records, and the special
/// calendar dates.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReportRequest {
    /// First date of the reporting period (inclusive).
    pub start_date: NaiveDate,
    /// Last date of the reporting period (inclusive).
    pub end_date: NaiveDate,
    /// Timestamp of the latest upstream import, when known. Days on or
    /// after `import_cutoff - 1 day` are reported as not yet ingested.
    #[serde(default)]
    pub import_cutoff: Option<NaiveDateTime>,
    /// The employee's access permits.
    #[serde(default)]
    pub permits: Vec<Permit>,
    /// The raw daily records for the period.
    #[serde(default)]
    pub records: Vec<DailyRecord>,
    /// Holiday and makeup-day entries.
    #[serde(default)]
    pub special_dates: Vec<SpecialDate>,
}
