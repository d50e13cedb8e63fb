//! Time-to-angle mapping for the three hands.

use serde::Serialize;

use super::ClockState;

/// Degrees in a full turn of the dial.
const FULL_TURN: f64 = 360.0;

/// One of the three clock hands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Hand {
    Hour,
    Minute,
    Second,
}

impl Hand {
    /// Drawing order: later hands overwrite earlier ones.
    pub const ALL: [Hand; 3] = [Hand::Hour, Hand::Minute, Hand::Second];
}

/// Angles of the three hands in degrees.
///
/// `0°` points at twelve o'clock and angles grow clockwise. Every field is
/// always within `[0, 360)`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct HandAngles {
    pub hour: f64,
    pub minute: f64,
    pub second: f64,
}

impl HandAngles {
    /// Compute hand angles from dial components.
    ///
    /// The hour hand advances continuously with minutes and seconds, the
    /// minute hand with seconds.
    pub fn from_time(hour: u32, minute: u32, second: f64) -> Self {
        let (hour, minute) = (hour as f64, minute as f64);
        Self {
            hour: normalize((hour + minute / 60.0 + second / 3600.0) * 30.0),
            minute: normalize((minute + second / 60.0) * 6.0),
            second: normalize(second * 6.0),
        }
    }

    /// Angles for a clock state.
    pub fn of(state: &ClockState) -> Self {
        Self::from_time(state.hour, state.minute, state.second)
    }

    /// Angle of a single hand.
    pub fn get(&self, hand: Hand) -> f64 {
        match hand {
            Hand::Hour => self.hour,
            Hand::Minute => self.minute,
            Hand::Second => self.second,
        }
    }
}

/// Fold an angle into `[0, 360)`.
fn normalize(degrees: f64) -> f64 {
    let wrapped = degrees.rem_euclid(FULL_TURN);
    // rem_euclid can round up to exactly 360.0 for tiny negative inputs
    if wrapped >= FULL_TURN {
        0.0
    } else {
        wrapped
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_midnight_is_zero() {
        let angles = HandAngles::from_time(0, 0, 0.0);
        assert_eq!(angles.hour, 0.0);
        assert_eq!(angles.minute, 0.0);
        assert_eq!(angles.second, 0.0);
    }

    #[test]
    fn test_three_oclock() {
        assert_eq!(HandAngles::from_time(3, 0, 0.0).hour, 90.0);
    }

    #[test]
    fn test_half_past() {
        assert_eq!(HandAngles::from_time(7, 30, 0.0).minute, 180.0);
    }

    #[test]
    fn test_fifteen_seconds() {
        assert_eq!(HandAngles::from_time(0, 0, 15.0).second, 90.0);
    }

    #[test]
    fn test_hour_hand_advances_with_minutes() {
        let angles = HandAngles::from_time(2, 30, 0.0);
        assert!((angles.hour - 75.0).abs() < 1e-9);
        assert_eq!(angles.get(Hand::Hour), angles.hour);
    }

    #[test]
    fn test_out_of_domain_input_still_wraps() {
        let angles = HandAngles::from_time(12, 0, 0.0);
        assert_eq!(angles.hour, 0.0);
        assert_eq!(normalize(-1e-20), 0.0);
    }

    proptest! {
        #[test]
        fn angles_stay_in_range(
            hour in 0u32..12,
            minute in 0u32..60,
            second in 0.0f64..60.0
        ) {
            let angles = HandAngles::from_time(hour, minute, second);
            for hand in Hand::ALL {
                let a = angles.get(hand);
                prop_assert!((0.0..360.0).contains(&a), "{:?} = {}", hand, a);
            }
        }
    }
}
