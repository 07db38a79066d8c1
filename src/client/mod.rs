//! Record acquisition over HTTP.
//!
//! The engine core is pure; raw daily records come from an upstream badge
//! system over HTTP. This module provides the client that fetches them,
//! with a per-request timeout and a bounded exponential-backoff retry
//! policy for transient failures.

mod http;
mod retry;

pub use http::RecordClient;
pub use retry::RetryPolicy;
