//! One-shot file generation: SVG face, HTML page and JSON state.
//!
//! These run instead of the interactive loop and only write a file.

pub mod svg;
pub mod web;

pub use svg::render_svg;
pub use web::{render_html, PageOptions};

use std::fs;
use std::path::Path;

use chrono::NaiveDateTime;
use serde::Serialize;

use crate::clock::{ClockState, HandAngles, Mode};
use crate::config::ClockConfig;
use crate::error::Result;

/// Default file names written to the working directory.
pub const DEFAULT_SVG: &str = "termclock.svg";
pub const DEFAULT_HTML: &str = "termclock.html";

/// Serializable view of one tick.
#[derive(Debug, Serialize)]
pub struct ClockSnapshot {
    /// Local time, `YYYY-MM-DDTHH:MM:SS%.3f`.
    pub time: String,
    pub state: ClockState,
    pub angles: HandAngles,
}

impl ClockSnapshot {
    pub fn capture(now: &NaiveDateTime, mode: Mode) -> Self {
        let state = ClockState::from_time(now, mode);
        Self {
            time: now.format("%Y-%m-%dT%H:%M:%S%.3f").to_string(),
            state,
            angles: HandAngles::of(&state),
        }
    }
}

/// Write the SVG face for `now` to `path`.
pub fn write_svg(path: &Path, now: &NaiveDateTime, config: &ClockConfig) -> Result<()> {
    let state = ClockState::from_time(now, Mode::Analog);
    let svg = render_svg(&state, &config.page, config.face.lengths, config.face.widths);
    fs::write(path, svg)?;
    tracing::info!(path = %path.display(), "wrote svg face");
    Ok(())
}

/// Write the standalone HTML clock to `path`.
pub fn write_html(path: &Path, mode: Mode, config: &ClockConfig) -> Result<()> {
    let options = PageOptions {
        start_mode: mode,
        twenty_four_hour: config.clock.twenty_four_hour,
        lengths: config.face.lengths,
        widths: config.face.widths,
    };
    fs::write(path, render_html(&config.page, &options))?;
    tracing::info!(path = %path.display(), "wrote html clock");
    Ok(())
}

/// Write the JSON snapshot for `now` to `path`.
pub fn write_snapshot(path: &Path, now: &NaiveDateTime, mode: Mode) -> Result<()> {
    let json = serde_json::to_string_pretty(&ClockSnapshot::capture(now, mode))?;
    fs::write(path, json)?;
    tracing::info!(path = %path.display(), "exported clock state");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn now() -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2024, 3, 15).unwrap().and_hms_milli_opt(15, 30, 15, 0).unwrap()
    }

    #[test]
    fn test_snapshot_json() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("state.json");
        write_snapshot(&path, &now(), Mode::Digital).unwrap();

        let value: serde_json::Value =
            serde_json::from_str(&std::fs::read_to_string(&path).unwrap()).unwrap();
        assert_eq!(value["time"], "2024-03-15T15:30:15.000");
        assert_eq!(value["state"]["hour"], 3);
        assert_eq!(value["state"]["mode"], "digital");
        assert_eq!(value["angles"]["second"], 90.0);
        assert_eq!(value["angles"]["minute"], 181.5);
    }

    #[test]
    fn test_generated_files() {
        let dir = tempfile::tempdir().unwrap();
        let config = ClockConfig::default();

        let svg = dir.path().join(DEFAULT_SVG);
        write_svg(&svg, &now(), &config).unwrap();
        assert!(std::fs::read_to_string(&svg).unwrap().contains("<svg"));

        let html = dir.path().join(DEFAULT_HTML);
        write_html(&html, Mode::Analog, &config).unwrap();
        assert!(std::fs::read_to_string(&html).unwrap().contains("<canvas"));
    }

    #[test]
    fn test_unwritable_path() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing").join("x.svg");
        assert!(write_svg(&path, &now(), &ClockConfig::default()).is_err());
    }
}
