//! Exponential backoff with jitter.

use rand::Rng;
use std::time::Duration;

use crate::config::RetryConfig;

/// Delay before the attempt following `attempt` (1-based) under `policy`.
///
/// Doubles from `base_delay_ms`, caps at `max_delay_ms`, then adds up to 10% jitter.
pub fn calculate_backoff(attempt: u32, policy: &RetryConfig) -> Duration {
    if attempt == 0 {
        return Duration::ZERO;
    }

    let factor = 2u64.saturating_pow(attempt - 1);
    let capped = policy
        .base_delay_ms
        .saturating_mul(factor)
        .min(policy.max_delay_ms);

    let jitter_range = capped / 10;
    let jitter = if jitter_range > 0 {
        rand::thread_rng().gen_range(0..jitter_range)
    } else {
        0
    };

    Duration::from_millis(capped + jitter)
}
