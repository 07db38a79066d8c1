//! Retry backoff policy.

use std::time::Duration;

/// Bounded exponential-backoff policy for transient request failures.
///
/// The delay before retry attempt `n` (1-indexed) is
/// `initial_delay * multiplier^(n-1)`, capped at `max_delay`, plus a small
/// random jitter to avoid retry synchronization across callers. With the
/// defaults the delays are 3 s, 9 s and 27 s.
///
/// # Example
///
/// ```
/// use std::time::Duration;
/// use attendance_engine::client::RetryPolicy;
///
/// let policy = RetryPolicy::default().with_jitter(false);
/// assert_eq!(policy.delay_for_attempt(1), Duration::from_secs(3));
/// assert_eq!(policy.delay_for_attempt(2), Duration::from_secs(9));
/// ```
#[derive(Debug, Clone)]
pub struct RetryPolicy {
    /// Maximum number of retries after the initial attempt.
    pub max_retries: u32,
    /// Delay before the first retry.
    pub initial_delay: Duration,
    /// Multiplier applied per retry attempt.
    pub multiplier: f64,
    /// Upper bound on the computed delay, before jitter.
    pub max_delay: Duration,
    /// Whether to add random jitter (up to 20 ms) to each delay.
    pub jitter: bool,
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self {
            max_retries: 3,
            initial_delay: Duration::from_secs(3),
            multiplier: 3.0,
            max_delay: Duration::from_secs(60),
            jitter: true,
        }
    }
}

impl RetryPolicy {
    /// Creates a policy with a custom retry budget and default backoff.
    pub fn new(max_retries: u32) -> Self {
        Self {
            max_retries,
            ..Default::default()
        }
    }

    /// Disables retries entirely.
    pub fn no_retry() -> Self {
        Self {
            max_retries: 0,
            ..Default::default()
        }
    }

    /// Sets the delay before the first retry.
    pub fn with_initial_delay(mut self, delay: Duration) -> Self {
        self.initial_delay = delay;
        self
    }

    /// Sets the backoff multiplier.
    pub fn with_multiplier(mut self, multiplier: f64) -> Self {
        self.multiplier = multiplier;
        self
    }

    /// Sets the upper bound on the computed delay.
    pub fn with_max_delay(mut self, delay: Duration) -> Self {
        self.max_delay = delay;
        self
    }

    /// Enables or disables jitter. Disable for deterministic tests.
    pub fn with_jitter(mut self, jitter: bool) -> Self {
        self.jitter = jitter;
        self
    }

    /// Calculates the delay before the given attempt (0 = initial attempt,
    /// which has no delay).
    pub fn delay_for_attempt(&self, attempt: u32) -> Duration {
        if attempt == 0 {
            return Duration::ZERO;
        }

        let base_millis = self.initial_delay.as_millis() as f64
            * self.multiplier.powi(attempt.saturating_sub(1) as i32);
        let capped_millis = base_millis.min(self.max_delay.as_millis() as f64);

        let final_millis = if self.jitter {
            capped_millis + rand::random::<f64>() * 20.0
        } else {
            capped_millis
        };

        Duration::from_millis(final_millis as u64)
    }
}
