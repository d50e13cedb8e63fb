//! The per-tick clock value and the display mode it is rendered in.

use chrono::{Local, Timelike};
use serde::{Deserialize, Serialize};

/// How the clock is presented.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize, clap::ValueEnum,
)]
#[serde(rename_all = "lowercase")]
pub enum Mode {
    /// Hands projected from a centre point.
    #[default]
    Analog,
    /// Numeric time rendered as a big-text banner.
    Digital,
}

impl Mode {
    /// The other mode.
    pub fn toggle(self) -> Self {
        match self {
            Mode::Analog => Mode::Digital,
            Mode::Digital => Mode::Analog,
        }
    }

    /// Returns the display label for this mode.
    pub fn label(&self) -> &'static str {
        match self {
            Mode::Analog => "Analog",
            Mode::Digital => "Digital",
        }
    }
}

/// Snapshot of the wall clock for a single tick.
///
/// `hour` is already wrapped to the 12-hour dial and `second` carries the
/// sub-second fraction so the second hand moves smoothly. A new value is
/// derived every tick; nothing mutates one in place.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ClockState {
    /// Hour on the dial, `0..=11`.
    pub hour: u32,
    /// Minute, `0..=59`.
    pub minute: u32,
    /// Seconds including the fractional part, `[0, 60)`.
    pub second: f64,
    pub mode: Mode,
}

impl ClockState {
    /// Build a state from already-split components.
    ///
    /// The hour is wrapped onto the dial, the minute is clamped to 59 and the
    /// second is clamped into `[0, 60)`.
    pub fn new(hour: u32, minute: u32, second: f64, mode: Mode) -> Self {
        Self {
            hour: hour % 12,
            minute: minute.min(59),
            second: second.clamp(0.0, 59.999_999),
            mode,
        }
    }

    /// Derive a state from any chrono time value.
    ///
    /// Leap-second nanoseconds (`>= 1_000_000_000`) are folded into the last
    /// representable instant of the minute.
    pub fn from_time<T: Timelike>(time: &T, mode: Mode) -> Self {
        let nanos = time.nanosecond().min(999_999_999);
        let second = time.second() as f64 + nanos as f64 / 1_000_000_000.0;
        Self::new(time.hour(), time.minute(), second, mode)
    }

    /// Read the local system clock.
    pub fn now(mode: Mode) -> Self {
        Self::from_time(&Local::now(), mode)
    }

    /// Same instant, different mode.
    pub fn with_mode(self, mode: Mode) -> Self {
        Self { mode, ..self }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveTime;

    #[test]
    fn test_toggle_twice_is_identity() {
        assert_eq!(Mode::Analog.toggle().toggle(), Mode::Analog);
        assert_eq!(Mode::Digital.toggle().toggle(), Mode::Digital);
        assert_eq!(Mode::Analog.toggle(), Mode::Digital);
    }

    #[test]
    fn test_from_time_wraps_hour() {
        let time = NaiveTime::from_hms_milli_opt(14, 5, 9, 500).unwrap();
        let state = ClockState::from_time(&time, Mode::Digital);
        assert_eq!(state.hour, 2);
        assert_eq!(state.minute, 5);
        assert!((state.second - 9.5).abs() < 1e-9);
        assert_eq!(state.mode, Mode::Digital);
    }

    #[test]
    fn test_leap_second_stays_below_sixty() {
        let time = NaiveTime::from_hms_nano_opt(23, 59, 59, 1_500_000_000).unwrap();
        let state = ClockState::from_time(&time, Mode::Analog);
        assert!(state.second < 60.0);
        assert_eq!(state.hour, 11);
    }

    #[test]
    fn test_mode_deserializes_lowercase() {
        let mode: Mode = serde_json::from_str("\"digital\"").unwrap();
        assert_eq!(mode, Mode::Digital);
    }
}
