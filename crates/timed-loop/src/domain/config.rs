//! Loop configuration.

use std::time::Duration;

use serde::{Deserialize, Serialize};

/// Default overall time limit in seconds.
pub const DEFAULT_MAX_SECONDS: f64 = 10.0;

/// Default pause between attempts in microseconds.
pub const DEFAULT_RETRY_DELAY_US: u64 = 50_000;

/// Parameters of a timed loop.
///
/// `T` is the type of the continue value (the sentinel). As long as the looped
/// operation returns a value equal to `continue_value`, the loop keeps going.
///
/// Missing fields fall back to their defaults when deserializing:
/// ```ignore
/// let config: LoopConfig<bool> = serde_json::from_str(r#"{ "max_seconds": 2.5 }"#)?;
/// assert!(!config.continue_value);
/// assert_eq!(config.retry_delay_us, 50_000);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoopConfig<T = bool> {
    /// Value that keeps the loop going.
    pub continue_value: T,

    /// Maximum runtime before the timeout disposition applies.
    pub max_seconds: f64,

    /// Pause after an unsuccessful attempt, before the next one.
    pub retry_delay_us: u64,

    /// Fail with `LoopTimeout` (true) or hand back the last result (false).
    pub throw_on_timeout: bool,
}

impl<T> LoopConfig<T> {
    /// Default timing with the given continue value.
    pub fn new(continue_value: T) -> Self {
        Self {
            continue_value,
            max_seconds: DEFAULT_MAX_SECONDS,
            retry_delay_us: DEFAULT_RETRY_DELAY_US,
            throw_on_timeout: true,
        }
    }

    /// Same timing, different continue value (possibly of another type).
    pub fn with_continue_value<U>(self, continue_value: U) -> LoopConfig<U> {
        LoopConfig {
            continue_value,
            max_seconds: self.max_seconds,
            retry_delay_us: self.retry_delay_us,
            throw_on_timeout: self.throw_on_timeout,
        }
    }

    /// `max_seconds` as a `Duration`.
    ///
    /// Zero, negative and NaN limits become `Duration::ZERO`, so the deadline is
    /// the start instant itself. Limits too large for a `Duration` saturate.
    pub fn max_duration(&self) -> Duration {
        if !(self.max_seconds > 0.0) {
            return Duration::ZERO;
        }
        Duration::try_from_secs_f64(self.max_seconds).unwrap_or(Duration::MAX)
    }

    pub fn retry_delay(&self) -> Duration {
        Duration::from_micros(self.retry_delay_us)
    }
}

impl<T: Default> Default for LoopConfig<T> {
    fn default() -> Self {
        Self::new(T::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[test]
    fn default_config_matches_documented_values() {
        let config = LoopConfig::<bool>::default();
        assert!(!config.continue_value);
        assert_eq!(config.max_seconds, 10.0);
        assert_eq!(config.retry_delay_us, 50_000);
        assert!(config.throw_on_timeout);
        assert_eq!(config.retry_delay(), Duration::from_millis(50));
    }

    #[test]
    fn default_continue_value_for_option_is_none() {
        let config = LoopConfig::<Option<u8>>::default();
        assert_eq!(config.continue_value, None);
    }

    #[test]
    fn with_continue_value_keeps_timing() {
        let config = LoopConfig::new(false);
        let config = LoopConfig {
            max_seconds: 1.5,
            retry_delay_us: 7,
            throw_on_timeout: false,
            ..config
        };

        let changed = config.with_continue_value("pending");
        assert_eq!(changed.continue_value, "pending");
        assert_eq!(changed.max_seconds, 1.5);
        assert_eq!(changed.retry_delay_us, 7);
        assert!(!changed.throw_on_timeout);
    }

    #[rstest]
    #[case::positive(0.25, Duration::from_millis(250))]
    #[case::zero(0.0, Duration::ZERO)]
    #[case::negative(-3.0, Duration::ZERO)]
    #[case::nan(f64::NAN, Duration::ZERO)]
    #[case::infinite(f64::INFINITY, Duration::MAX)]
    #[case::huge(1e300, Duration::MAX)]
    fn max_duration_conversion(#[case] seconds: f64, #[case] expected: Duration) {
        let config = LoopConfig {
            max_seconds: seconds,
            ..LoopConfig::new(false)
        };
        assert_eq!(config.max_duration(), expected);
    }

    #[test]
    fn deserialize_fills_missing_fields_with_defaults() {
        let config: LoopConfig<bool> =
            serde_json::from_str(r#"{ "max_seconds": 2.5, "throw_on_timeout": false }"#).unwrap();
        assert_eq!(config.max_seconds, 2.5);
        assert!(!config.throw_on_timeout);
        assert_eq!(config.retry_delay_us, DEFAULT_RETRY_DELAY_US);
        assert!(!config.continue_value);
    }

    #[test]
    fn deserialize_custom_continue_value() {
        let config: LoopConfig<Option<String>> =
            serde_json::from_str(r#"{ "continue_value": "busy", "retry_delay_us": 10 }"#).unwrap();
        assert_eq!(config.continue_value.as_deref(), Some("busy"));
        assert_eq!(config.retry_delay_us, 10);
        assert_eq!(config.max_seconds, DEFAULT_MAX_SECONDS);
    }
}
