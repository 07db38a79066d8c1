//! HTTP request handlers for the Attendance Compliance Engine API.

use std::time::Instant;

use axum::{
    Json, Router,
    extract::rejection::JsonRejection,
    http::{StatusCode, header},
    response::IntoResponse,
    routing::post,
};
use tracing::{info, warn};
use uuid::Uuid;

use crate::engine::{calc_burden, process_period};

use super::request::ReportRequest;
use super::response::{ApiError, ReportResponse};

/// Creates the API router with all endpoints.
pub fn create_router() -> Router {
    Router::new().route("/report", post(report_handler))
}

/// Handler for the POST /report endpoint.
///
/// Accepts one employee's reporting period and returns the per-day detail
/// rows, the final compliance percentage, and the burden tier.
async fn report_handler(payload: Result<Json<ReportRequest>, JsonRejection>) -> impl IntoResponse {
    // Correlation ID for request tracking
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing report request");

    let request = match payload {
        Ok(Json(request)) => request,
        Err(rejection) => {
            let error = match rejection {
                JsonRejection::JsonDataError(err) => {
                    let body_text = err.body_text();
                    warn!(
                        correlation_id = %correlation_id,
                        error = %body_text,
                        "JSON data error"
                    );
                    if body_text.contains("missing field") {
                        ApiError::validation_error(body_text)
                    } else {
                        ApiError::malformed_json(body_text)
                    }
                }
                JsonRejection::JsonSyntaxError(err) => {
                    warn!(
                        correlation_id = %correlation_id,
                        error = %err,
                        "JSON syntax error"
                    );
                    ApiError::malformed_json(format!("Invalid JSON syntax: {}", err))
                }
                JsonRejection::MissingJsonContentType(_) => {
                    ApiError::new("MISSING_CONTENT_TYPE", "Content-Type must be application/json")
                }
                _ => ApiError::malformed_json("Failed to parse request body"),
            };
            return (
                StatusCode::BAD_REQUEST,
                [(header::CONTENT_TYPE, "application/json")],
                Json(error),
            )
                .into_response();
        }
    };

    let start_time = Instant::now();
    let summary = process_period(
        request.start_date,
        request.end_date,
        request.import_cutoff,
        &request.permits,
        request.records,
        &request.special_dates,
    );
    let assessment = calc_burden(summary.final_percentage);
    let duration = start_time.elapsed();

    info!(
        correlation_id = %correlation_id,
        rows = summary.rows.len(),
        final_percentage = %summary.final_percentage,
        burden_tier = assessment.tier.code(),
        duration_us = duration.as_micros(),
        "Report completed"
    );

    (
        StatusCode::OK,
        [(header::CONTENT_TYPE, "application/json")],
        Json(ReportResponse::from_summary(summary, assessment)),
    )
        .into_response()
}
