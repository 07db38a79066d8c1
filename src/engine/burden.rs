//! Burden tier calculation.
//!
//! Maps a final compliance percentage to the discrete tier code used by
//! downstream billing and alerting. The tier boundaries are fixed
//! constants, closed on the lower edge of the more lenient tier.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Ratio at or above which no burden applies.
pub const WAIVED_THRESHOLD: Decimal = Decimal::from_parts(59, 0, 0, false, 0);

/// Ratio at or above which (but below [`WAIVED_THRESHOLD`]) the reduced
/// burden applies.
pub const REDUCED_THRESHOLD: Decimal = Decimal::from_parts(44, 0, 0, false, 0);

/// Remark attached when the ratio is exactly zero.
pub const REASSIGNMENT_REMARK: &str = "needs gym reassignment";

/// The discrete burden tier derived from a compliance ratio.
///
/// Each variant carries the fixed numeric code used by downstream systems.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
#[repr(u16)]
pub enum BurdenTier {
    /// Compliance at or above 59 percent; no burden is charged.
    Waived = 0,
    /// Compliance in `[44, 59)`; a reduced burden is charged.
    Reduced = 404,
    /// Compliance below 44 percent; the full burden is charged.
    Full = 503,
}

impl BurdenTier {
    /// Returns the fixed numeric code for this tier.
    pub fn code(self) -> u16 {
        self as u16
    }
}

/// A burden tier together with its optional remark.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BurdenAssessment {
    /// The tier derived from the ratio.
    pub tier: BurdenTier,
    /// Set to [`REASSIGNMENT_REMARK`] when the ratio is exactly zero.
    #[serde(default)]
    pub remark: Option<String>,
}

/// Maps a compliance percentage to a burden tier.
///
/// Boundaries are closed on the lower edge of the more lenient tier:
/// exactly 59 is [`BurdenTier::Waived`], exactly 44 is
/// [`BurdenTier::Reduced`]. A ratio of exactly zero additionally carries
/// the reassignment remark.
///
/// # Example
///
/// ```
/// use attendance_engine::engine::{BurdenTier, calc_burden};
/// use rust_decimal::Decimal;
///
/// let assessment = calc_burden(Decimal::from(59));
/// assert_eq!(assessment.tier, BurdenTier::Waived);
/// assert!(assessment.remark.is_none());
/// ```
pub fn calc_burden(ratio: Decimal) -> BurdenAssessment {
    if ratio >= WAIVED_THRESHOLD {
        BurdenAssessment {
            tier: BurdenTier::Waived,
            remark: None,
        }
    } else if ratio >= REDUCED_THRESHOLD {
        BurdenAssessment {
            tier: BurdenTier::Reduced,
            remark: None,
        }
    } else {
        BurdenAssessment {
            tier: BurdenTier::Full,
            remark: (ratio == Decimal::ZERO).then(|| REASSIGNMENT_REMARK.to_string()),
        }
    }
}
