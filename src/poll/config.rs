//! Poll cadence configuration

use std::time::Duration;

use serde::{Deserialize, Serialize};

/// Cadence and budget for a condition wait.
///
/// Defaults match the classic widget-test helper: 30 attempts at 100ms, a
/// 3-second ceiling. There is no backoff; the cadence is fixed.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PollConfig {
    /// Predicate evaluations allowed before the wait gives up
    #[serde(default = "default_max_attempts")]
    pub max_attempts: u32,

    /// Milliseconds between evaluations
    #[serde(default = "default_interval_ms")]
    pub interval_ms: u64,
}

fn default_max_attempts() -> u32 {
    30
}

fn default_interval_ms() -> u64 {
    100
}

impl Default for PollConfig {
    fn default() -> Self {
        Self {
            max_attempts: default_max_attempts(),
            interval_ms: default_interval_ms(),
        }
    }
}

impl PollConfig {
    pub fn interval(&self) -> Duration {
        Duration::from_millis(self.interval_ms)
    }

    /// Effective timeout of a session: `max_attempts * interval`.
    pub fn ceiling(&self) -> Duration {
        Duration::from_millis(self.interval_ms.saturating_mul(u64::from(self.max_attempts)))
    }
}
