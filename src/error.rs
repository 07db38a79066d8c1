//! Error types for the Attendance Compliance Engine.
//!
//! This module provides strongly-typed errors using the `thiserror` crate.
//! The classification/accumulation core is total and never fails; these
//! errors cover the record-acquisition client and the API boundary.

use thiserror::Error;

/// The main error type for the Attendance Compliance Engine.
///
/// # Example
///
/// ```
/// use attendance_engine::error::EngineError;
///
/// let error = EngineError::RequestTimeout { seconds: 30 };
/// assert_eq!(error.to_string(), "request timed out after 30s");
/// ```
#[derive(Debug, Error)]
pub enum EngineError {
    /// The request did not complete within the configured timeout, and the
    /// retry budget is exhausted.
    #[error("request timed out after {seconds}s")]
    RequestTimeout {
        /// The configured timeout in seconds.
        seconds: u64,
    },

    /// The upstream kept returning a transient error status until the retry
    /// budget was exhausted, or returned a non-success status where a record
    /// payload was required.
    #[error("upstream returned status {status}")]
    UpstreamStatus {
        /// The last HTTP status code seen.
        status: u16,
    },

    /// A non-transient transport failure (connection, TLS, body decoding).
    #[error("transport error: {0}")]
    Transport(#[from] reqwest::Error),
}

/// A type alias for Results that return EngineError.
pub type EngineResult<T> = Result<T, EngineError>;
