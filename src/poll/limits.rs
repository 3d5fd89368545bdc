//! Validation for caller-supplied poll budgets and intervals

use std::time::Duration;

use thiserror::Error;

/// Maximum interval between evaluations (10 seconds)
/// Anything longer makes a suite feel hung rather than polling
pub const MAX_POLL_INTERVAL_MS: u64 = 10_000;

/// Maximum attempt budget (600 attempts)
/// At the default 100ms cadence this is a one-minute ceiling
pub const MAX_POLL_ATTEMPTS: u32 = 600;

#[derive(Error, Debug)]
pub enum LimitError {
    #[error("Poll interval cannot exceed {MAX_POLL_INTERVAL_MS}ms. Received: {0}ms")]
    IntervalTooLong(u64),

    #[error("Attempt budget cannot exceed {MAX_POLL_ATTEMPTS}. Received: {0}")]
    BudgetTooLarge(u32),
}

/// Validate an optional caller-supplied interval, falling back to a default.
///
/// # Arguments
/// * `interval_ms` - Optional interval in milliseconds
/// * `default_ms` - Default interval if None provided
///
/// # Returns
/// * `Ok(Duration)` - Validated interval
/// * `Err(LimitError)` - If the interval exceeds MAX_POLL_INTERVAL_MS
pub fn validate_poll_interval(
    interval_ms: Option<u64>,
    default_ms: u64,
) -> Result<Duration, LimitError> {
    let ms = interval_ms.unwrap_or(default_ms);

    if ms > MAX_POLL_INTERVAL_MS {
        return Err(LimitError::IntervalTooLong(ms));
    }

    Ok(Duration::from_millis(ms))
}

/// Validate an optional caller-supplied attempt budget, falling back to a
/// default.
pub fn validate_attempt_budget(
    max_attempts: Option<u32>,
    default_attempts: u32,
) -> Result<u32, LimitError> {
    let attempts = max_attempts.unwrap_or(default_attempts);

    if attempts > MAX_POLL_ATTEMPTS {
        return Err(LimitError::BudgetTooLarge(attempts));
    }

    Ok(attempts)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn interval_within_cap_passes() {
        assert_eq!(
            validate_poll_interval(Some(250), 100).unwrap(),
            Duration::from_millis(250)
        );
        assert_eq!(
            validate_poll_interval(None, 100).unwrap(),
            Duration::from_millis(100)
        );
    }

    #[test]
    fn interval_over_cap_is_rejected() {
        assert!(validate_poll_interval(Some(MAX_POLL_INTERVAL_MS + 1), 100).is_err());
    }

    #[test]
    fn budget_over_cap_is_rejected() {
        assert_eq!(validate_attempt_budget(None, 30).unwrap(), 30);
        assert!(validate_attempt_budget(Some(MAX_POLL_ATTEMPTS + 1), 30).is_err());
    }
}
