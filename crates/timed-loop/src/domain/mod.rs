//! Domain model (configuration, per-invocation state, errors).

pub mod config;
pub mod errors;
pub mod execution;

pub use self::config::{DEFAULT_MAX_SECONDS, DEFAULT_RETRY_DELAY_US, LoopConfig};
pub use self::errors::{LoopTimeout, TryLoopError};
pub use self::execution::{LoopExecution, Verdict};
