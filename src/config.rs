//! Layered configuration.
//!
//! Values come from, in increasing priority: built-in defaults, an optional
//! TOML file, and `TERMCLOCK__<SECTION>__<KEY>` environment variables.
//!
//! ```toml
//! [clock]
//! start_mode = "digital"
//! twenty_four_hour = false
//!
//! [refresh]
//! tick_ms = 1000
//! poll_ms = 100
//!
//! [face]
//! style = "canvas"
//! aspect = 2.0
//!
//! [face.glyphs]
//! second = "*"
//! ```

use std::path::Path;
use std::time::Duration;

use config::{Config, Environment, File};
use serde::Deserialize;

use crate::clock::Mode;
use crate::error::Result;
use crate::render::{FaceGlyphs, HandLengths, HandWidths};

/// Prefix of environment overrides.
pub const ENV_PREFIX: &str = "TERMCLOCK";

/// Complete runtime configuration.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct ClockConfig {
    pub clock: ClockSection,
    pub refresh: RefreshSection,
    pub face: FaceSection,
    pub theme: ThemeChoice,
    pub page: PageSection,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct ClockSection {
    pub start_mode: Mode,
    pub twenty_four_hour: bool,
}

impl Default for ClockSection {
    fn default() -> Self {
        Self {
            start_mode: Mode::Analog,
            twenty_four_hour: true,
        }
    }
}

/// Render cadence.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct RefreshSection {
    /// Milliseconds between full repaints.
    pub tick_ms: u64,
    /// Milliseconds between input polls. Quit lands within one poll.
    pub poll_ms: u64,
}

impl Default for RefreshSection {
    fn default() -> Self {
        Self {
            tick_ms: 1000,
            poll_ms: 100,
        }
    }
}

impl RefreshSection {
    pub fn tick(&self) -> Duration {
        Duration::from_millis(self.tick_ms.max(1))
    }

    pub fn poll(&self) -> Duration {
        Duration::from_millis(self.poll_ms.clamp(1, self.tick_ms.max(1)))
    }
}

/// How analog mode is drawn in the interactive UI.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum FaceStyle {
    /// Character cells.
    #[default]
    Grid,
    /// Braille vector canvas.
    Canvas,
}

impl FaceStyle {
    pub fn next(self) -> Self {
        match self {
            FaceStyle::Grid => FaceStyle::Canvas,
            FaceStyle::Canvas => FaceStyle::Grid,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            FaceStyle::Grid => "grid",
            FaceStyle::Canvas => "canvas",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct FaceSection {
    pub style: FaceStyle,
    /// Horizontal stretch for character grids.
    pub aspect: f64,
    /// Degrees between ring markers.
    pub ring_step: u32,
    pub lengths: HandLengths,
    pub widths: HandWidths,
    pub glyphs: FaceGlyphs,
    /// Plain-terminal grid size.
    pub width: usize,
    pub height: usize,
}

impl Default for FaceSection {
    fn default() -> Self {
        Self {
            style: FaceStyle::Grid,
            aspect: 2.0,
            ring_step: 5,
            lengths: HandLengths::default(),
            widths: HandWidths::default(),
            glyphs: FaceGlyphs::default(),
            width: 60,
            height: 30,
        }
    }
}

/// Colour scheme selection.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemeChoice {
    #[default]
    Auto,
    Dark,
    Light,
}

/// Colours and size of generated files (SVG and HTML).
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct PageSection {
    pub title: String,
    pub background: String,
    pub foreground: String,
    /// Edge length of the square drawing, in pixels.
    pub size: u32,
    pub margin: f64,
}

impl Default for PageSection {
    fn default() -> Self {
        Self {
            title: "Terminal Clock".to_string(),
            background: "#0b66ff".to_string(),
            foreground: "#ffffff".to_string(),
            size: 300,
            margin: 15.0,
        }
    }
}

impl ClockConfig {
    /// Load defaults, then `path` if given, then the environment.
    ///
    /// A path that does not exist is an error; omit it to skip the file layer.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let mut builder = Config::builder();
        if let Some(path) = path {
            builder = builder.add_source(File::from(path));
        }
        let config = builder
            .add_source(
                Environment::with_prefix(ENV_PREFIX)
                    .prefix_separator("__")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        let loaded: ClockConfig = config.try_deserialize()?;
        tracing::debug!(?loaded, "configuration loaded");
        Ok(loaded)
    }
}
