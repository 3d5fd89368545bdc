//! Bounded condition polling
//!
//! The core wait primitive: [`PollSession`] is the timer-free state machine,
//! [`ConditionPoller`] drives it on a tokio interval.

mod config;
mod limits;
mod poller;
mod session;

pub use config::PollConfig;
pub use limits::{
    LimitError, MAX_POLL_ATTEMPTS, MAX_POLL_INTERVAL_MS, validate_attempt_budget,
    validate_poll_interval,
};
pub use poller::ConditionPoller;
pub use session::{CompletionKind, PollSession, PredicateError, TickOutcome};
