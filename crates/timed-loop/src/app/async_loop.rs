//! Async entry point.
//!
//! Same loop as [`TimedLoop::call`], but the operation returns a future and the
//! pause between attempts is a `tokio::time::sleep`, so the worker thread is
//! free while waiting. The configured sleeper is not used here.

use std::future::Future;

use crate::app::TimedLoop;
use crate::domain::{LoopExecution, LoopTimeout, Verdict};
use crate::ports::{Clock, Operation};

impl<F, T, C, S> TimedLoop<F, T, C, S>
where
    T: PartialEq,
    C: Clock,
{
    /// Run the loop over an async operation.
    ///
    /// Pair with [`TokioClock`](crate::ports::TokioClock) when the runtime's
    /// time is paused, otherwise the deadline follows real time.
    pub async fn invoke_async<Args, Fut>(&mut self, args: Args) -> Result<T, LoopTimeout<T>>
    where
        F: Operation<Args, Output = Fut>,
        Fut: Future<Output = T>,
    {
        let mut execution = LoopExecution::start(&self.config, self.clock.now());
        loop {
            let result = self.operation.call_with(&args).await;
            match execution.judge(result, &self.config, || self.clock.now()) {
                Verdict::Return(outcome) => return outcome,
                Verdict::Retry => tokio::time::sleep(self.config.retry_delay()).await,
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::app::TimedLoop;
    use crate::ports::TokioClock;
    use std::sync::Arc;
    use std::sync::atomic::{AtomicU32, Ordering};
    use std::time::Duration;

    #[tokio::test(start_paused = true)]
    async fn returns_after_n_attempts() {
        let calls = Arc::new(AtomicU32::new(0));
        let counter = Arc::clone(&calls);
        let op = move || {
            let counter = Arc::clone(&counter);
            async move { counter.fetch_add(1, Ordering::SeqCst) + 1 >= 4 }
        };

        let started = tokio::time::Instant::now();
        let result = TimedLoop::new(op)
            .with_clock(TokioClock)
            .invoke_async(())
            .await;

        assert_eq!(result, Ok(true));
        assert_eq!(calls.load(Ordering::SeqCst), 4);
        let waited = started.elapsed();
        assert!(waited >= Duration::from_millis(150) && waited < Duration::from_millis(160));
    }

    #[tokio::test(start_paused = true)]
    async fn times_out_like_the_blocking_loop() {
        let calls = Arc::new(AtomicU32::new(0));
        let counter = Arc::clone(&calls);
        let op = move || {
            counter.fetch_add(1, Ordering::SeqCst);
            async { false }
        };

        let err = TimedLoop::new(op)
            .for_maximum_seconds(1.05)
            .retrying_after_microseconds(100_000)
            .with_clock(TokioClock)
            .invoke_async(())
            .await
            .unwrap_err();

        // attempts at t = 0.0 ..= 1.0 fit the limit, the one at t = 1.1 does not
        assert_eq!(calls.load(Ordering::SeqCst), 12);
        assert_eq!(err.attempts(), 12);
        assert!((err.elapsed_secs() - 1.1).abs() < 0.02);
    }

    #[tokio::test(start_paused = true)]
    async fn forwards_arguments_and_honours_custom_sentinel() {
        let calls = Arc::new(AtomicU32::new(0));
        let counter = Arc::clone(&calls);
        let op = move |name: &'static str, ready_after: u32| {
            let attempt = counter.fetch_add(1, Ordering::SeqCst) + 1;
            async move {
                if attempt >= ready_after { Some(format!("hello {name}")) } else { None }
            }
        };

        let result = TimedLoop::new(op)
            .until_it_returns_something_else_than(None)
            .without_throwing_exception()
            .with_clock(TokioClock)
            .invoke_async(("loop", 3))
            .await;

        assert_eq!(result, Ok(Some("hello loop".to_string())));
        assert_eq!(calls.load(Ordering::SeqCst), 3);
    }
}
