//! Test-support utilities for asynchronous widget UI suites
//!
//! Provides a bounded condition-wait primitive (poll a predicate on a fixed
//! cadence until it holds or a retry budget runs out, then hand control to
//! the next test step) and a privileged lookup for internal elements of
//! video-player widgets.

pub mod dom;
pub mod poll;
pub mod report;

use std::fs;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};

pub use dom::{
    CONTROL_SURFACE_INDEX, DomIntrospector, IntrospectError, anonymous_element_within_video,
};
pub use poll::{
    CompletionKind, ConditionPoller, LimitError, PollConfig, PollSession, PredicateError,
    TickOutcome, validate_attempt_budget, validate_poll_interval,
};
pub use report::{AssertionReporter, RecordingReporter, Report, TracingReporter};

/// Harness configuration, loadable from `config.yaml`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub poll: PollConfig,
}

/// Load config from config.yaml in package root
pub fn load_yaml_config() -> anyhow::Result<Config> {
    let config_path = PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("config.yaml");

    if config_path.exists() {
        let contents = fs::read_to_string(&config_path)?;
        let config: Config = serde_yaml::from_str(&contents)?;
        Ok(config)
    } else {
        Ok(Config::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_config_yaml_yields_defaults() {
        let config: Config = serde_yaml::from_str("{}").unwrap();
        assert_eq!(config.poll.max_attempts, 30);
        assert_eq!(config.poll.interval_ms, 100);
    }

    #[test]
    fn partial_poll_section_is_filled_in() {
        let config: Config = serde_yaml::from_str("poll:\n  interval_ms: 50\n").unwrap();
        assert_eq!(config.poll.interval_ms, 50);
        assert_eq!(config.poll.max_attempts, 30);
    }
}
