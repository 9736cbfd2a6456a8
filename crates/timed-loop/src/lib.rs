//! timed-loop
//!
//! Call an operation again and again until it returns something other than a
//! "continue" value, within a time limit and with a fixed pause between attempts.
//!
//! ```ignore
//! use timed_loop::TimedLoop;
//!
//! let status = TimedLoop::new(|| service.poll_status())
//!     .until_it_returns_something_else_than(Status::Starting)
//!     .for_maximum_seconds(30.0)
//!     .retrying_after_microseconds(250_000)
//!     .invoke(())?;
//! ```
//!
//! # Modules
//! - **domain**: `LoopConfig`, `LoopExecution`, `LoopTimeout`, `TryLoopError`
//! - **ports**: `Operation` (argument forwarding), `Clock`, `Sleeper`
//! - **app**: `TimedLoop` and its blocking/async entry points
//! - **impls**: `ManualClock` for deterministic tests

pub mod app;
pub mod domain;
pub mod impls;
pub mod ports;

pub use app::TimedLoop;
pub use domain::{LoopConfig, LoopTimeout, TryLoopError};
pub use impls::ManualClock;
pub use ports::{Clock, Operation, Sleeper, SystemClock, ThreadSleeper, TokioClock};
