//! TimedLoop - call an operation until it stops returning the continue value.
//!
//! # Flow
//! 1. remember the start instant, deadline = start + max duration
//! 2. call the operation with the forwarded arguments
//! 3. anything other than the continue value is returned at once
//! 4. past the deadline: `LoopTimeout`, or the continue value when throwing is disabled
//! 5. otherwise sleep for the retry delay and go back to 2
//!
//! The deadline is checked after each call, never before, so the operation
//! always runs at least once.

use std::fmt::{self, Debug};

use crate::domain::{LoopConfig, LoopExecution, LoopTimeout, TryLoopError, Verdict};
use crate::ports::{Clock, Operation, Sleeper, SystemClock, ThreadSleeper};

/// Configurable loop executor.
///
/// # Usage
/// ```ignore
/// let ready = TimedLoop::new(|path: &Path| path.exists())
///     .for_maximum_seconds(5.0)
///     .retrying_after_microseconds(100_000)
///     .invoke((Path::new("/tmp/ready"),))?;
/// ```
///
/// Setters consume the loop and invocations borrow it mutably, so the
/// configuration cannot change while an invocation is running.
pub struct TimedLoop<F, T = bool, C = SystemClock, S = ThreadSleeper> {
    pub(crate) operation: F,
    pub(crate) config: LoopConfig<T>,
    pub(crate) clock: C,
    pub(crate) sleeper: S,
}

impl<F> TimedLoop<F> {
    /// Loop with the default configuration: continue while `false` is returned,
    /// 10 seconds limit, 50ms between attempts, fail on timeout.
    pub fn new(operation: F) -> Self {
        Self::with_config(operation, LoopConfig::new(false))
    }

    /// One-shot helper: default configuration, forward `args`, invoke once.
    pub fn run<Args>(operation: F, args: Args) -> Result<bool, LoopTimeout<bool>>
    where
        F: Operation<Args, Output = bool>,
    {
        Self::new(operation).call(args)
    }
}

impl<F, T> TimedLoop<F, T> {
    pub fn with_config(operation: F, config: LoopConfig<T>) -> Self {
        Self {
            operation,
            config,
            clock: SystemClock,
            sleeper: ThreadSleeper,
        }
    }
}

impl<F, T, C, S> TimedLoop<F, T, C, S> {
    /// Set the overall time limit.
    ///
    /// Zero or negative values put the deadline at the start instant: the
    /// operation still runs once, and the loop gives up on or before the first retry.
    pub fn for_maximum_seconds(mut self, seconds: f64) -> Self {
        self.config.max_seconds = seconds;
        self
    }

    /// Set the pause between an unsuccessful attempt and the next one.
    pub fn retrying_after_microseconds(mut self, microseconds: u64) -> Self {
        self.config.retry_delay_us = microseconds;
        self
    }

    /// Replace the continue value. The new value may be of a different type.
    pub fn until_it_returns_something_else_than<U>(self, value: U) -> TimedLoop<F, U, C, S> {
        TimedLoop {
            operation: self.operation,
            config: self.config.with_continue_value(value),
            clock: self.clock,
            sleeper: self.sleeper,
        }
    }

    /// On timeout, return the last result instead of failing.
    pub fn without_throwing_exception(mut self) -> Self {
        self.config.throw_on_timeout = false;
        self
    }

    pub fn with_clock<C2: Clock>(self, clock: C2) -> TimedLoop<F, T, C2, S> {
        TimedLoop {
            operation: self.operation,
            config: self.config,
            clock,
            sleeper: self.sleeper,
        }
    }

    pub fn with_sleeper<S2: Sleeper>(self, sleeper: S2) -> TimedLoop<F, T, C, S2> {
        TimedLoop {
            operation: self.operation,
            config: self.config,
            clock: self.clock,
            sleeper,
        }
    }

    pub fn config(&self) -> &LoopConfig<T> {
        &self.config
    }
}

impl<F, T, C, S> TimedLoop<F, T, C, S>
where
    T: PartialEq,
    C: Clock,
    S: Sleeper,
{
    /// Run the loop, forwarding `args` to every call of the operation.
    pub fn call<Args>(&mut self, args: Args) -> Result<T, LoopTimeout<T>>
    where
        F: Operation<Args, Output = T>,
    {
        let mut execution = LoopExecution::start(&self.config, self.clock.now());
        loop {
            let result = self.operation.call_with(&args);
            match execution.judge(result, &self.config, || self.clock.now()) {
                Verdict::Return(outcome) => return outcome,
                Verdict::Retry => self.sleeper.sleep(self.config.retry_delay()),
            }
        }
    }

    /// Named alias of [`TimedLoop::call`].
    pub fn invoke<Args>(&mut self, args: Args) -> Result<T, LoopTimeout<T>>
    where
        F: Operation<Args, Output = T>,
    {
        self.call(args)
    }

    /// Loop over a fallible operation.
    ///
    /// `Ok` values are compared with the continue value. The first `Err` ends
    /// the loop immediately and is handed back untouched; it is never retried.
    pub fn try_call<Args, E>(&mut self, args: Args) -> Result<T, TryLoopError<T, E>>
    where
        F: Operation<Args, Output = Result<T, E>>,
    {
        let mut execution = LoopExecution::start(&self.config, self.clock.now());
        loop {
            let result = self
                .operation
                .call_with(&args)
                .map_err(TryLoopError::Operation)?;
            match execution.judge(result, &self.config, || self.clock.now()) {
                Verdict::Return(outcome) => return outcome.map_err(TryLoopError::Timeout),
                Verdict::Retry => self.sleeper.sleep(self.config.retry_delay()),
            }
        }
    }

    /// Turn the loop into a plain closure, so it can be called like a function.
    pub fn into_fn<Args>(mut self) -> impl FnMut(Args) -> Result<T, LoopTimeout<T>>
    where
        F: Operation<Args, Output = T>,
    {
        move |args| self.call(args)
    }
}

impl<F, T: Debug, C: Debug, S: Debug> Debug for TimedLoop<F, T, C, S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TimedLoop")
            .field("operation", &"<operation>")
            .field("config", &self.config)
            .field("clock", &self.clock)
            .field("sleeper", &self.sleeper)
            .finish()
    }
}
