//! # termclock
//!
//! An analog and digital clock for the terminal, with file generators for an
//! SVG face and a standalone HTML page.
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                        Application                          │
//! │  ┌─────────┐    ┌──────────┐    ┌─────────┐    ┌─────────┐ │
//! │  │ control │───▶│   app    │───▶│   ui    │───▶│ Terminal│ │
//! │  │(commands)    │ (state)  │    │(ratatui)│    │         │ │
//! │  └─────────┘    └────┬─────┘    └────┬────┘    └─────────┘ │
//! │                      │               │                      │
//! │                      ▼               ▼                      │
//! │                 ┌─────────┐    ┌──────────┐                 │
//! │                 │  clock  │───▶│  render  │──▶ host::plain  │
//! │                 │ (kernel)│    │(grid/svg)│──▶ export       │
//! │                 └─────────┘    └──────────┘                 │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! - **[`clock`]**: [`ClockState`], hand angles and endpoint projection
//! - **[`render`]**: character grid, vector shapes and big-text banner
//! - **[`control`]**: [`Command`]s, the [`CommandSource`] trait, the stdin
//!   listener and the interrupt flag
//! - **[`host`]**: the plain-terminal render loop
//! - **[`export`]**: SVG, HTML and JSON file generation
//! - **[`ui`]**: ratatui rendering for the interactive clock
//!
//! ## Usage
//!
//! ### As a CLI tool
//!
//! ```bash
//! # Interactive clock
//! termclock
//!
//! # Start in digital mode, plain output with line commands on stdin
//! termclock digital --plain
//!
//! # Write an SVG face or a browser clock and exit
//! termclock --gui
//! termclock --web clock.html
//! ```
//!
//! ### As a library
//!
//! ```
//! use termclock::clock::{ClockState, Mode};
//! use termclock::render::{CharGrid, GridFace};
//!
//! let state = ClockState::new(10, 10, 30.0, Mode::Analog);
//! let mut grid = CharGrid::new(40, 20);
//! GridFace::centered(40, 20, 2.0).stamp(&mut grid, &state);
//! for line in grid.to_lines() {
//!     println!("{line}");
//! }
//! ```

pub mod app;
pub mod clock;
pub mod config;
pub mod control;
pub mod error;
pub mod events;
pub mod export;
pub mod host;
pub mod render;
pub mod telemetry;
pub mod ui;

// Re-export main types for convenience
pub use app::App;
pub use clock::{ClockState, HandAngles, Mode};
pub use config::ClockConfig;
pub use control::{ChannelSource, Command, CommandSource, LoopState, ShutdownFlag};
pub use error::{ClockError, Result};
