//! HTTP API for the Attendance Compliance Engine.
//!
//! This module provides the axum router, request/response types, and error
//! handling for the HTTP API.

mod handlers;
mod request;
mod response;

pub use handlers::create_router;
pub use request::ReportRequest;
pub use response::{ApiError, BurdenPayload, ReportResponse, ReportRow, classification_label};
