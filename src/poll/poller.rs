//! Condition polling driver
//!
//! Drives a [`PollSession`] on a fixed-cadence tokio interval. This is the
//! piece test steps call: hand it a predicate and a continuation, and the
//! continuation runs exactly once after the condition holds or the retry
//! budget runs out.

use tokio::time::{self, Instant, MissedTickBehavior};
use tracing::debug;

use crate::poll::config::PollConfig;
use crate::poll::session::{PollSession, PredicateError, TickOutcome};
use crate::report::AssertionReporter;

/// Repeatedly evaluates a predicate on a fixed cadence until it returns true
/// or the attempt budget is exhausted.
///
/// Failures (budget exhaustion, predicate errors) surface through the
/// reporter, never through a return value: the caller's flow resumes via the
/// continuation either way, matching how a test harness moves to the next
/// step regardless of whether the assertion held.
///
/// There is no early-cancellation API. A session always runs to one of its
/// two natural exits.
///
/// # Example
/// ```no_run
/// use widget_test_harness::{ConditionPoller, TracingReporter};
///
/// # async fn demo() {
/// let poller = ConditionPoller::new(TracingReporter);
/// poller
///     .wait(
///         || Ok(video_is_playing()),
///         || println!("next step"),
///         "video never started playing",
///     )
///     .await;
/// # }
/// # fn video_is_playing() -> bool { true }
/// ```
pub struct ConditionPoller<R> {
    config: PollConfig,
    reporter: R,
}

impl<R: AssertionReporter> ConditionPoller<R> {
    /// Poller with the default cadence: 100ms interval, 30 attempts
    /// (a 3-second ceiling).
    pub fn new(reporter: R) -> Self {
        Self {
            config: PollConfig::default(),
            reporter,
        }
    }

    pub fn with_config(config: PollConfig, reporter: R) -> Self {
        Self { config, reporter }
    }

    pub fn config(&self) -> &PollConfig {
        &self.config
    }

    /// Poll `predicate` until it returns `Ok(true)` or the budget runs out,
    /// then invoke `continuation` exactly once.
    ///
    /// The first evaluation happens one full interval after the call, and
    /// each tick runs to completion before the next is scheduled. A
    /// predicate `Err` is reported and treated as false for that tick;
    /// polling continues. Once the session completes the ticker is dropped,
    /// so no further evaluations occur.
    pub async fn wait<P, C>(&self, mut predicate: P, continuation: C, failure_message: &str)
    where
        P: FnMut() -> Result<bool, PredicateError>,
        C: FnOnce(),
    {
        let mut session = PollSession::new(self.config.max_attempts, failure_message);
        let period = self.config.interval();

        debug!(
            interval_ms = period.as_millis() as u64,
            max_attempts = self.config.max_attempts,
            "starting poll session"
        );

        // setInterval semantics: no immediate tick
        let mut ticker = time::interval_at(Instant::now() + period, period);
        ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);

        loop {
            ticker.tick().await;
            if let TickOutcome::Done(kind) = session.tick(&mut predicate, &self.reporter) {
                debug!(
                    attempts = session.attempts_used(),
                    ?kind,
                    "poll session finished"
                );
                drop(ticker);
                continuation();
                return;
            }
        }
    }
}
