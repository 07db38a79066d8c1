//! Core data models for the Attendance Compliance Engine.
//!
//! This module contains all the domain models used throughout the engine.

mod classification;
mod daily_record;
mod detail_row;
mod permit;
mod special_date;

pub use classification::Classification;
pub use daily_record::DailyRecord;
pub use detail_row::DetailRow;
pub use permit::Permit;
pub use special_date::{SpecialDate, SpecialDateKind};
