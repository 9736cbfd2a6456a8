//! Implementations of the ports that are not part of the default setup.

pub mod manual_clock;

pub use self::manual_clock::ManualClock;
