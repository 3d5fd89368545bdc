//! Poll session state machine
//!
//! A `PollSession` is the explicit state behind one `wait` call: an attempt
//! counter, a retry budget, and a {Polling, Done} state. Each call to
//! [`PollSession::tick`] is one evaluation cycle of the polling timer. The
//! session holds no timer itself, so tests (and alternative drivers) can step
//! it directly without real clocks.

use std::fmt;

use tracing::{debug, trace};

use crate::report::AssertionReporter;

/// Error raised by a predicate during a tick.
///
/// Carries the error message and an optional diagnostic trace; when reported,
/// the two are combined into a single message, trace below the message. A
/// predicate error never terminates the session - it counts as a failed
/// attempt and polling continues.
#[derive(Debug, Clone)]
pub struct PredicateError {
    message: String,
    trace: Option<String>,
}

impl fmt::Display for PredicateError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.trace {
            Some(trace) => write!(f, "{}\n{}", self.message, trace),
            None => f.write_str(&self.message),
        }
    }
}

impl std::error::Error for PredicateError {}

impl PredicateError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            trace: None,
        }
    }

    /// Attach a diagnostic trace (stack, error chain) to the message.
    pub fn with_trace(message: impl Into<String>, trace: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            trace: Some(trace.into()),
        }
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn trace(&self) -> Option<&str> {
        self.trace.as_deref()
    }
}

impl From<anyhow::Error> for PredicateError {
    fn from(err: anyhow::Error) -> Self {
        // {:?} renders the full error chain, which stands in for a stack trace
        Self::with_trace(err.to_string(), format!("{err:?}"))
    }
}

/// How a finished session completed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CompletionKind {
    /// The predicate returned true.
    ConditionMet,
    /// The retry budget ran out before the predicate returned true.
    BudgetExhausted,
}

/// Result of driving one tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickOutcome {
    /// Keep polling; schedule another tick.
    Continue,
    /// The session is finished; cancel the timer and run the continuation.
    Done(CompletionKind),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum PollState {
    Polling,
    Done(CompletionKind),
}

/// State for one condition-wait: attempt counter, budget, failure message.
///
/// Created per wait request and discarded once the session completes. The
/// exit paths are mutually exclusive: the tick that exhausts the budget does
/// not evaluate the predicate (first-checked-wins), so a budget report and a
/// success can never come from the same tick.
#[derive(Debug)]
pub struct PollSession {
    attempts_used: u32,
    max_attempts: u32,
    failure_message: String,
    state: PollState,
}

impl PollSession {
    pub fn new(max_attempts: u32, failure_message: impl Into<String>) -> Self {
        Self {
            attempts_used: 0,
            max_attempts,
            failure_message: failure_message.into(),
            state: PollState::Polling,
        }
    }

    /// Predicate evaluations performed so far. Never exceeds the budget.
    pub fn attempts_used(&self) -> u32 {
        self.attempts_used
    }

    /// Completion kind once the session is done, `None` while polling.
    pub fn completion(&self) -> Option<CompletionKind> {
        match self.state {
            PollState::Polling => None,
            PollState::Done(kind) => Some(kind),
        }
    }

    /// Run one evaluation cycle.
    ///
    /// Tick order:
    /// 1. Budget check first. An exhausted budget reports the session's
    ///    failure message and completes without evaluating the predicate.
    /// 2. Otherwise the predicate runs. An `Err` is reported (message plus
    ///    trace) and counts as a false result for this tick; the session
    ///    keeps polling.
    /// 3. `Ok(true)` completes the session with no report.
    ///
    /// Ticking a finished session is a no-op: it returns the recorded
    /// completion and neither evaluates the predicate nor reports.
    pub fn tick<P, R>(&mut self, predicate: &mut P, reporter: &R) -> TickOutcome
    where
        P: FnMut() -> Result<bool, PredicateError>,
        R: AssertionReporter + ?Sized,
    {
        if let PollState::Done(kind) = self.state {
            return TickOutcome::Done(kind);
        }

        if self.attempts_used >= self.max_attempts {
            debug!(
                attempts = self.attempts_used,
                "poll budget exhausted: {}", self.failure_message
            );
            reporter.report(false, &self.failure_message);
            self.state = PollState::Done(CompletionKind::BudgetExhausted);
            return TickOutcome::Done(CompletionKind::BudgetExhausted);
        }

        let passed = match predicate() {
            Ok(passed) => passed,
            Err(err) => {
                reporter.report(false, &err.to_string());
                false
            }
        };
        self.attempts_used += 1;

        if passed {
            debug!(attempts = self.attempts_used, "condition met");
            self.state = PollState::Done(CompletionKind::ConditionMet);
            TickOutcome::Done(CompletionKind::ConditionMet)
        } else {
            trace!(
                attempts = self.attempts_used,
                max = self.max_attempts,
                "condition not met yet"
            );
            TickOutcome::Continue
        }
    }
}
