//! Classification and accumulation core for the Attendance Compliance Engine.
//!
//! This module contains the decision and aggregation functions: filling a
//! period with one record per date, resolving holiday/makeup-day context,
//! checking permit validity, the ordered classification rule chain, the
//! per-period accumulator that produces detail rows and the running
//! compliance percentage, and the burden tier calculation.

mod accumulator;
mod burden;
mod classifier;
mod date_context;
mod day_filler;
mod permit_validator;

pub use accumulator::{PeriodSummary, process_period};
pub use burden::{
    BurdenAssessment, BurdenTier, REASSIGNMENT_REMARK, REDUCED_THRESHOLD, WAIVED_THRESHOLD,
    calc_burden,
};
pub use classifier::classify_day;
pub use date_context::{DateContext, resolve_date_context};
pub use day_filler::fill_missing_days;
pub use permit_validator::has_active_permit;
