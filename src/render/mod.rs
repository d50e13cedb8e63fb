//! Presentation-neutral renderers built on the [`clock`](crate::clock) kernel.
//!
//! - [`grid`]: character-grid rasterizer for the analog face
//! - [`canvas`]: vector shape list for the analog face
//! - [`bigtext`]: five-row block-letter banner for digital mode
//! - [`text`]: whole plain-terminal frames composed from the above

pub mod bigtext;
pub mod canvas;
pub mod grid;
pub mod text;

pub use bigtext::big_text;
pub use canvas::{CanvasFace, HandWidths, Shape, Stroke};
pub use grid::{CharGrid, FaceGlyphs, GridFace};

use serde::Deserialize;

use crate::clock::Hand;

/// Hand lengths as fractions of the face radius.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(default)]
pub struct HandLengths {
    pub hour: f64,
    pub minute: f64,
    pub second: f64,
}

impl Default for HandLengths {
    fn default() -> Self {
        Self {
            hour: 0.5,
            minute: 0.7,
            second: 0.8,
        }
    }
}

impl HandLengths {
    pub fn get(&self, hand: Hand) -> f64 {
        match hand {
            Hand::Hour => self.hour,
            Hand::Minute => self.minute,
            Hand::Second => self.second,
        }
    }
}
