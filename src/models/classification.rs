//! Per-day attendance classification.

use serde::{Deserialize, Serialize};

/// The outcome of classifying one reporting day.
///
/// Each variant carries the fixed numeric code used by downstream systems.
/// Display labels are resolved at the presentation boundary, not here.
///
/// # Example
///
/// ```
/// use attendance_engine::models::Classification;
///
/// assert_eq!(Classification::Yes.code(), 10);
/// assert_eq!(Classification::ImportNotYet.code(), 999);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
#[repr(u16)]
pub enum Classification {
    /// Came to the office but did not enter the gym; counted, non-compliant.
    No = 0,
    /// Entered the gym; counted and compliant.
    Yes = 10,
    /// Workday with neither gym nor gate entry; did not come to the office
    /// at all. Counted and treated as compliant.
    NoRecord = 20,
    /// Weekend day that is not a makeup day; excluded from the ratio.
    SkipNonWorkday = 45,
    /// Workday flagged as a national holiday; excluded from the ratio.
    SkipHoliday = 46,
    /// Makeup day without a gym entry; excluded from the ratio.
    NoMakeupDay = 47,
    /// No access permit active on this date; excluded from the ratio.
    InvalidTime = 80,
    /// Source data for this date has not been ingested yet; excluded from
    /// the ratio.
    ImportNotYet = 999,
}

impl Classification {
    /// Returns the fixed numeric code for this classification.
    pub fn code(self) -> u16 {
        self as u16
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_numeric_codes_are_fixed() {
        assert_eq!(Classification::No.code(), 0);
        assert_eq!(Classification::Yes.code(), 10);
        assert_eq!(Classification::NoRecord.code(), 20);
        assert_eq!(Classification::SkipNonWorkday.code(), 45);
        assert_eq!(Classification::SkipHoliday.code(), 46);
        assert_eq!(Classification::NoMakeupDay.code(), 47);
        assert_eq!(Classification::InvalidTime.code(), 80);
        assert_eq!(Classification::ImportNotYet.code(), 999);
    }

    #[test]
    fn test_serializes_snake_case() {
        let json = serde_json::to_string(&Classification::SkipNonWorkday).unwrap();
        assert_eq!(json, "\"skip_non_workday\"");

        let deserialized: Classification = serde_json::from_str("\"import_not_yet\"").unwrap();
        assert_eq!(deserialized, Classification::ImportNotYet);
    }
}
