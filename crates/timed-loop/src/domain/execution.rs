//! Per-invocation loop state.

use std::time::{Duration, Instant};

use super::config::LoopConfig;
use super::errors::LoopTimeout;

/// What to do after an attempt.
#[derive(Debug)]
pub enum Verdict<T> {
    /// Leave the loop with this outcome.
    Return(Result<T, LoopTimeout<T>>),

    /// Sleep for the retry delay, then call the operation again.
    Retry,
}

/// State of one running invocation.
///
/// Created when an invocation starts and dropped when it returns. Never shared
/// between invocations.
#[derive(Debug, Clone)]
pub struct LoopExecution {
    started_at: Instant,

    /// `None` when `started_at + max_duration` is not representable.
    deadline: Option<Instant>,

    attempts: u32,
}

impl LoopExecution {
    pub fn start<T>(config: &LoopConfig<T>, now: Instant) -> Self {
        Self {
            started_at: now,
            deadline: now.checked_add(config.max_duration()),
            attempts: 0,
        }
    }

    pub fn started_at(&self) -> Instant {
        self.started_at
    }

    pub fn deadline(&self) -> Option<Instant> {
        self.deadline
    }

    /// Number of attempts judged so far.
    pub fn attempts(&self) -> u32 {
        self.attempts
    }

    pub fn elapsed(&self, now: Instant) -> Duration {
        now.saturating_duration_since(self.started_at)
    }

    /// Strictly after the deadline. Reaching it exactly still allows a retry.
    pub fn is_past_deadline(&self, now: Instant) -> bool {
        self.deadline.is_some_and(|deadline| now > deadline)
    }

    /// Judge the result of one attempt.
    ///
    /// The clock is only read when `result` equals the continue value, so a
    /// successful attempt returns without touching it.
    pub fn judge<T, N>(&mut self, result: T, config: &LoopConfig<T>, now: N) -> Verdict<T>
    where
        T: PartialEq,
        N: FnOnce() -> Instant,
    {
        self.attempts = self.attempts.saturating_add(1);

        if result != config.continue_value {
            return Verdict::Return(Ok(result));
        }

        let now = now();
        if !self.is_past_deadline(now) {
            tracing::trace!(attempt = self.attempts, "continue value returned, retrying");
            return Verdict::Retry;
        }

        let elapsed_secs = self.elapsed(now).as_secs_f64();
        tracing::debug!(
            attempts = self.attempts,
            elapsed_secs,
            limit_secs = config.max_seconds,
            throw = config.throw_on_timeout,
            "loop deadline exceeded"
        );

        if config.throw_on_timeout {
            Verdict::Return(Err(LoopTimeout::new(
                elapsed_secs,
                config.max_seconds,
                result,
                self.attempts,
            )))
        } else {
            Verdict::Return(Ok(result))
        }
    }
}
