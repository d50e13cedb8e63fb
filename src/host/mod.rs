//! Display hosts that drive the renderer on a cadence.
//!
//! The interactive ratatui host lives in the binary next to terminal setup;
//! the plain host is here so it can be driven from tests.

pub mod plain;

pub use plain::{run_plain, Display, PlainSettings, TerminalDisplay, GOODBYE};
