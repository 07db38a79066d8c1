//! Facility Attendance Compliance Engine
//!
//! This crate classifies per-day facility-attendance records against an
//! ordered rule chain, accumulates a running compliance percentage over a
//! reporting period, and maps the final percentage to a discrete burden tier
//! used for downstream billing and alerting decisions.

#![warn(missing_docs)]

pub mod api;
pub mod client;
pub mod engine;
pub mod error;
pub mod models;
