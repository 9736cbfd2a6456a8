//! Ports - seams between the loop and the outside world.
//!
//! - `Operation`: the caller's callable and its forwarded arguments
//! - `Clock`: where "now" comes from
//! - `Sleeper`: how the pause between attempts is spent

pub mod clock;
pub mod operation;
pub mod sleeper;

pub use self::clock::{Clock, SystemClock, TokioClock};
pub use self::operation::Operation;
pub use self::sleeper::{Sleeper, ThreadSleeper};
