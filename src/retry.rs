use std::time::Duration;

use crate::PodsiteError;

/// Decision returned by the retry policy for one failed attempt.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RetryDecision {
    /// Propagate the failure to the caller.
    GiveUp,
    /// Wait for the given delay, then run the next attempt.
    RetryAfter(Duration),
}

/// Exponential backoff schedule with a bounded attempt budget.
///
/// `delay(attempt) = initial_delay × backoff_multiplier^(attempt − 1)`,
/// with `attempt` 1-based (1 = first attempt).
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RetryPolicy {
    /// Maximum number of attempts, including the first. At least 1.
    pub max_attempts: u32,
    /// Delay before the second attempt.
    pub initial_delay: Duration,
    /// Geometric growth factor for successive delays. At least 1.
    pub backoff_multiplier: f64,
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self {
            max_attempts: 3,
            initial_delay: Duration::from_millis(1_000),
            backoff_multiplier: 2.0,
        }
    }
}

impl RetryPolicy {
    /// Builds a policy, clamping values into their valid ranges.
    pub fn new(max_attempts: u32, initial_delay: Duration, backoff_multiplier: f64) -> Self {
        Self {
            max_attempts: max_attempts.max(1),
            initial_delay,
            backoff_multiplier: backoff_multiplier.max(1.0),
        }
    }

    /// Backoff delay after a failed `attempt` (1-based).
    pub fn delay(&self, attempt: u32) -> Duration {
        // Exponent capped so mul_f64 stays finite even for runaway counters.
        let exponent = attempt.saturating_sub(1).min(16) as i32;
        self.initial_delay.mul_f64(self.backoff_multiplier.powi(exponent))
    }

    /// Whether to retry after `attempt` (1-based) failed with `error`.
    ///
    /// Non-retryable failures and an exhausted attempt budget both end the
    /// loop; the caller propagates the error it already holds.
    pub fn decide(&self, attempt: u32, error: &PodsiteError) -> RetryDecision {
        if !error.is_retryable() || attempt >= self.max_attempts {
            return RetryDecision::GiveUp;
        }
        RetryDecision::RetryAfter(self.delay(attempt))
    }
}
