//! Application layer - the loop executor.
//!
//! - **timed_loop**: `TimedLoop` builder and the blocking entry points
//! - **async_loop**: `invoke_async` for operations returning futures

pub mod async_loop;
pub mod timed_loop;

pub use self::timed_loop::TimedLoop;
