//! Error types.

use std::time::Duration;

use thiserror::Error;

/// The loop ran out of time while the operation kept returning the continue value.
#[derive(Debug, Clone, PartialEq, Error)]
#[error(
    "Loop timed out after {elapsed_secs:.3} seconds (limit: {limit_secs:.3} seconds) not returning {continue_value:?}"
)]
pub struct LoopTimeout<T> {
    elapsed_secs: f64,
    limit_secs: f64,
    continue_value: T,
    attempts: u32,
}

impl<T> LoopTimeout<T> {
    pub fn new(elapsed_secs: f64, limit_secs: f64, continue_value: T, attempts: u32) -> Self {
        Self {
            elapsed_secs,
            limit_secs,
            continue_value,
            attempts,
        }
    }

    /// Seconds between the start of the invocation and the failing check.
    pub fn elapsed_secs(&self) -> f64 {
        self.elapsed_secs
    }

    pub fn elapsed(&self) -> Duration {
        Duration::from_secs_f64(self.elapsed_secs)
    }

    /// Configured limit, as given to `for_maximum_seconds`.
    pub fn limit_secs(&self) -> f64 {
        self.limit_secs
    }

    /// The value the operation was still returning.
    pub fn continue_value(&self) -> &T {
        &self.continue_value
    }

    pub fn into_continue_value(self) -> T {
        self.continue_value
    }

    /// Operation calls made before giving up.
    pub fn attempts(&self) -> u32 {
        self.attempts
    }
}

/// Failure of a loop over a fallible operation.
#[derive(Debug, Error)]
pub enum TryLoopError<T, E> {
    #[error("{0}")]
    Timeout(LoopTimeout<T>),

    /// Error returned by the operation. Not retried.
    #[error("operation failed: {0}")]
    Operation(E),
}

impl<T, E> From<LoopTimeout<T>> for TryLoopError<T, E> {
    fn from(timeout: LoopTimeout<T>) -> Self {
        TryLoopError::Timeout(timeout)
    }
}

impl<T, E> TryLoopError<T, E> {
    pub fn is_timeout(&self) -> bool {
        matches!(self, TryLoopError::Timeout(_))
    }

    /// The operation's own error, if that is what ended the loop.
    pub fn into_operation_error(self) -> Option<E> {
        match self {
            TryLoopError::Operation(err) => Some(err),
            TryLoopError::Timeout(_) => None,
        }
    }
}
