//! HTTP client for fetching raw daily records.

use std::time::Duration;

use reqwest::{Client, Response, StatusCode};
use tracing::{debug, warn};

use crate::error::{EngineError, EngineResult};
use crate::models::DailyRecord;

use super::RetryPolicy;

const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// HTTP client wrapping a timeout and a transient-failure retry policy.
///
/// Transient outcomes (server error responses, request-timeout responses,
/// timeout expiry) are retried with the configured backoff. Every other response passes through unmodified without retry,
/// including non-408 client errors. Exhausting the retry budget surfaces
/// the last transient outcome as an error.
pub struct RecordClient {
    http: Client,
    timeout: Duration,
    retry: RetryPolicy,
}

impl RecordClient {
    /// Creates a client with the default timeout and retry policy.
    pub fn new() -> EngineResult<Self> {
        let http = Client::builder()
            .user_agent("AttendanceEngine/0.1")
            .build()?;
        Ok(Self {
            http,
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
            retry: RetryPolicy::default(),
        })
    }

    /// Creates a client around a caller-supplied `reqwest::Client` (for
    /// tests).
    pub fn with_http_client(http: Client) -> Self {
        Self {
            http,
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
            retry: RetryPolicy::default(),
        }
    }

    /// Sets the per-request timeout in seconds.
    pub fn with_timeout_secs(mut self, seconds: u64) -> Self {
        self.timeout = Duration::from_secs(seconds);
        self
    }

    /// Replaces the retry policy.
    pub fn with_retry_policy(mut self, retry: RetryPolicy) -> Self {
        self.retry = retry;
        self
    }

    /// Sends a GET request, retrying transient failures.
    ///
    /// Returns the response unmodified for any non-transient status. After
    /// the retry budget is exhausted the last transient outcome is
    /// surfaced: [`EngineError::RequestTimeout`] for timeout expiry,
    /// [`EngineError::UpstreamStatus`] for a transient status response.
    pub async fn get(&self, url: &str) -> EngineResult<Response> {
        let mut attempt = 0u32;

        loop {
            let delay = self.retry.delay_for_attempt(attempt);
            if !delay.is_zero() {
                debug!(url, attempt, delay_ms = delay.as_millis() as u64, "waiting before retry");
                tokio::time::sleep(delay).await;
            }

            match self.http.get(url).timeout(self.timeout).send().await {
                Ok(response) if is_transient_status(response.status()) => {
                    let status = response.status();
                    if attempt >= self.retry.max_retries {
                        warn!(url, status = status.as_u16(), "retry budget exhausted");
                        return Err(EngineError::UpstreamStatus {
                            status: status.as_u16(),
                        });
                    }
                    warn!(url, status = status.as_u16(), attempt, "transient status, will retry");
                }
                Ok(response) => return Ok(response),
                Err(error) if error.is_timeout() => {
                    if attempt >= self.retry.max_retries {
                        warn!(url, "request timed out, retry budget exhausted");
                        return Err(EngineError::RequestTimeout {
                            seconds: self.timeout.as_secs(),
                        });
                    }
                    warn!(url, attempt, "request timed out, will retry");
                }
                Err(error) => return Err(EngineError::Transport(error)),
            }

            attempt += 1;
        }
    }

    /// Fetches and decodes a JSON array of daily records.
    ///
    /// A final non-success status is surfaced as
    /// [`EngineError::UpstreamStatus`].
    pub async fn fetch_daily_records(&self, url: &str) -> EngineResult<Vec<DailyRecord>> {
        let response = self.get(url).await?;
        if !response.status().is_success() {
            return Err(EngineError::UpstreamStatus {
                status: response.status().as_u16(),
            });
        }
        let records = response.json::<Vec<DailyRecord>>().await?;
        debug!(url, count = records.len(), "fetched daily records");
        Ok(records)
    }
}

/// Transient statuses eligible for retry: 5xx and 408.
fn is_transient_status(status: StatusCode) -> bool {
    status.is_server_error() || status == StatusCode::REQUEST_TIMEOUT
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    fn fast_client() -> RecordClient {
        RecordClient::with_http_client(Client::new()).with_retry_policy(
            RetryPolicy::new(2)
                .with_initial_delay(Duration::from_millis(1))
                .with_jitter(false),
        )
    }

    #[test]
    fn test_transient_status_split() {
        assert!(is_transient_status(StatusCode::INTERNAL_SERVER_ERROR));
        assert!(is_transient_status(StatusCode::SERVICE_UNAVAILABLE));
        assert!(is_transient_status(StatusCode::REQUEST_TIMEOUT));
        assert!(!is_transient_status(StatusCode::OK));
        assert!(!is_transient_status(StatusCode::NOT_FOUND));
        assert!(!is_transient_status(StatusCode::BAD_REQUEST));
    }

    /// RC-001: success passes straight through
    #[tokio::test]
    async fn test_success_no_retry() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("GET", "/records")
            .with_status(200)
            .with_body("[]")
            .expect(1)
            .create_async()
            .await;

        let client = fast_client();
        let response = client.get(&format!("{}/records", server.url())).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        mock.assert_async().await;
    }

    /// RC-002: non-transient status passes through unmodified, no retry
    #[tokio::test]
    async fn test_non_transient_passthrough() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("GET", "/records")
            .with_status(404)
            .expect(1)
            .create_async()
            .await;

        let client = fast_client();
        let response = client.get(&format!("{}/records", server.url())).await.unwrap();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        mock.assert_async().await;
    }

    /// RC-003: transient status retried until the budget is exhausted
    #[tokio::test]
    async fn test_transient_status_exhausts_budget() {
        let mut server = mockito::Server::new_async().await;
        // 1 initial attempt + 2 retries
        let mock = server
            .mock("GET", "/records")
            .with_status(500)
            .expect(3)
            .create_async()
            .await;

        let client = fast_client();
        let error = client
            .get(&format!("{}/records", server.url()))
            .await
            .unwrap_err();
        match error {
            EngineError::UpstreamStatus { status } => assert_eq!(status, 500),
            other => panic!("expected UpstreamStatus, got {other:?}"),
        }
        mock.assert_async().await;
    }

    /// RC-004: 408 is treated as transient
    #[tokio::test]
    async fn test_request_timeout_status_is_transient() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("GET", "/records")
            .with_status(408)
            .expect(3)
            .create_async()
            .await;

        let client = fast_client();
        let error = client
            .get(&format!("{}/records", server.url()))
            .await
            .unwrap_err();
        match error {
            EngineError::UpstreamStatus { status } => assert_eq!(status, 408),
            other => panic!("expected UpstreamStatus, got {other:?}"),
        }
        mock.assert_async().await;
    }

    /// RC-005: fetch_daily_records decodes the payload
    #[tokio::test]
    async fn test_fetch_daily_records() {
        let mut server = mockito::Server::new_async().await;
        let body = r#"[
            {"date": "2021-01-04", "member_id": "E12345",
             "gym_entry_time": "2021-01-04T18:00:00"},
            {"date": "2021-01-05"}
        ]"#;
        let _mock = server
            .mock("GET", "/records")
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(body)
            .create_async()
            .await;

        let client = fast_client();
        let records = client
            .fetch_daily_records(&format!("{}/records", server.url()))
            .await
            .unwrap();
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].member_id.as_deref(), Some("E12345"));
        assert!(records[1].gym_entry_time.is_none());
    }

    /// RC-006: fetch_daily_records surfaces a final non-success status
    #[tokio::test]
    async fn test_fetch_daily_records_surfaces_status() {
        let mut server = mockito::Server::new_async().await;
        let _mock = server
            .mock("GET", "/records")
            .with_status(403)
            .create_async()
            .await;

        let client = fast_client();
        let error = client
            .fetch_daily_records(&format!("{}/records", server.url()))
            .await
            .unwrap_err();
        assert!(matches!(error, EngineError::UpstreamStatus { status: 403 }));
    }
}
