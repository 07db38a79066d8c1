//! Response types and display labels for the Attendance Compliance Engine
//! API.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::engine::{BurdenAssessment, PeriodSummary};
use crate::models::{Classification, DetailRow};

/// Resolves the display label for a classification.
///
/// This is the presentation-boundary mapping from classification codes to
/// human-readable labels; the engine core never sees these strings. All
/// three skip kinds share the same label.
pub fn classification_label(classification: Classification) -> &'static str {
    match classification {
        Classification::No => "did not enter the gym",
        Classification::Yes => "entered the gym",
        Classification::NoRecord => "did not come to the office",
        Classification::SkipNonWorkday => "non-workday",
        Classification::SkipHoliday => "non-workday",
        Classification::NoMakeupDay => "non-workday",
        Classification::InvalidTime => "no active gym permit",
        Classification::ImportNotYet => "gym records not yet imported",
    }
}

/// One row of the report response: a detail row plus its display label.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReportRow {
    /// The record date formatted as `YYYY/MM/DD Www`.
    pub date: String,
    /// External identifier of the record holder, when known.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub member_id: Option<String>,
    /// The day's classification, when determined.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub classification: Option<Classification>,
    /// Display label for the classification; empty when undetermined.
    pub classification_label: String,
    /// The formatted gym-entry timestamp, when the day had one.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gym_entry_time: Option<String>,
    /// The cumulative compliance percentage through this day.
    pub running_percentage: String,
}

impl From<DetailRow> for ReportRow {
    fn from(row: DetailRow) -> Self {
        let classification_label = row
            .classification
            .map(classification_label)
            .unwrap_or_default()
            .to_string();
        Self {
            date: row.date,
            member_id: row.member_id,
            classification: row.classification,
            classification_label,
            gym_entry_time: row.gym_entry_time,
            running_percentage: row.running_percentage,
        }
    }
}

/// The burden tier section of the report response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BurdenPayload {
    /// The numeric tier code (0, 404 or 503).
    pub tier: u16,
    /// The remark attached to the tier, when any.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub remark: Option<String>,
}

impl From<BurdenAssessment> for BurdenPayload {
    fn from(assessment: BurdenAssessment) -> Self {
        Self {
            tier: assessment.tier.code(),
            remark: assessment.remark,
        }
    }
}

/// Response payload for the report endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReportResponse {
    /// The compliance percentage after the last day of the period.
    pub final_percentage: Decimal,
    /// The burden tier derived from the final percentage.
    pub burden: BurdenPayload,
    /// One row per processed day, ascending by date.
    pub rows: Vec<ReportRow>,
}

impl ReportResponse {
    /// Assembles the response from the engine outputs.
    pub fn from_summary(summary: PeriodSummary, assessment: BurdenAssessment) -> Self {
        Self {
            final_percentage: summary.final_percentage,
            burden: assessment.into(),
            rows: summary.rows.into_iter().map(Into::into).collect(),
        }
    }
}

/// API error response structure.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiError {
    /// Error code for programmatic handling.
    pub code: String,
    /// Human-readable error message.
    pub message: String,
}

impl ApiError {
    /// Creates a new API error.
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
        }
    }

    /// Creates a malformed JSON error response.
    pub fn malformed_json(message: impl Into<String>) -> Self {
        Self::new("MALFORMED_JSON", message)
    }

    /// Creates a validation error response.
    pub fn validation_error(message: impl Into<String>) -> Self {
        Self::new("VALIDATION_ERROR", message)
    }
}
