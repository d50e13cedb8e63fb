//! Clock kernel: the time-derived state and the geometry of the hands.
//!
//! Everything in here is pure. A [`ClockState`] is rebuilt from the system
//! clock on every tick, [`HandAngles`] turns it into degrees (`0°` is twelve
//! o'clock, increasing clockwise) and [`project`] maps an angle and a hand
//! length onto a drawing surface.
//!
//! ```
//! use termclock::clock::{project, ClockState, HandAngles, Mode, Point};
//!
//! let state = ClockState::new(3, 0, 0.0, Mode::Analog);
//! let angles = HandAngles::of(&state);
//! assert_eq!(angles.hour, 90.0);
//!
//! let tip = project(Point::new(10.0, 10.0), angles.hour, 5.0);
//! assert!((tip.x - 15.0).abs() < 1e-9);
//! ```

pub mod angles;
pub mod projector;
pub mod state;

pub use angles::{Hand, HandAngles};
pub use projector::{project, Point};
pub use state::{ClockState, Mode};
