//! Vector rendering of the analog face as a list of shapes.
//!
//! The shape list is backend-neutral: the TUI paints it on a braille
//! canvas and the SVG exporter serializes it. Coordinates use a y axis that
//! grows downward; backends with an upward y axis flip it themselves.

use serde::Deserialize;

use super::HandLengths;
use crate::clock::{project, ClockState, Hand, HandAngles, Point};

/// Stroke widths of the three hands. Purely presentational.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(default)]
pub struct HandWidths {
    pub hour: f64,
    pub minute: f64,
    pub second: f64,
}

impl Default for HandWidths {
    fn default() -> Self {
        Self {
            hour: 4.0,
            minute: 2.0,
            second: 1.0,
        }
    }
}

impl HandWidths {
    pub fn get(&self, hand: Hand) -> f64 {
        match hand {
            Hand::Hour => self.hour,
            Hand::Minute => self.minute,
            Hand::Second => self.second,
        }
    }
}

/// What a shape depicts, so backends can style it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stroke {
    Face,
    Tick,
    Hand(Hand),
    Pivot,
}

/// A drawing primitive.
#[derive(Debug, Clone, PartialEq)]
pub enum Shape {
    Circle {
        center: Point,
        radius: f64,
        width: f64,
        stroke: Stroke,
    },
    Line {
        from: Point,
        to: Point,
        width: f64,
        stroke: Stroke,
    },
}

/// Analog face laid out on a `width × height` vector surface.
#[derive(Debug, Clone, PartialEq)]
pub struct CanvasFace {
    pub width: f64,
    pub height: f64,
    /// Gap between the surface edge and the face ring.
    pub margin: f64,
    pub lengths: HandLengths,
    pub widths: HandWidths,
}

impl CanvasFace {
    pub fn new(width: f64, height: f64) -> Self {
        Self {
            width,
            height,
            margin: 20.0,
            lengths: HandLengths::default(),
            widths: HandWidths::default(),
        }
    }

    pub fn with_margin(mut self, margin: f64) -> Self {
        self.margin = margin;
        self
    }

    pub fn with_lengths(mut self, lengths: HandLengths) -> Self {
        self.lengths = lengths;
        self
    }

    pub fn with_widths(mut self, widths: HandWidths) -> Self {
        self.widths = widths;
        self
    }

    pub fn center(&self) -> Point {
        Point::new(self.width / 2.0, self.height / 2.0)
    }

    /// Ring radius. Zero or negative when the surface is too small.
    pub fn radius(&self) -> f64 {
        let c = self.center();
        c.x.min(c.y) - self.margin
    }

    /// Shapes for the face only (ring and the twelve hour ticks).
    pub fn dial(&self) -> Vec<Shape> {
        let radius = self.radius();
        if !(radius.is_finite() && radius > 0.0) {
            return Vec::new();
        }
        let center = self.center();

        let mut shapes = Vec::with_capacity(13);
        shapes.push(Shape::Circle {
            center,
            radius,
            width: 2.0,
            stroke: Stroke::Face,
        });
        for h in 0..12 {
            let angle = h as f64 * 30.0;
            shapes.push(Shape::Line {
                from: project(center, angle, radius * 0.85),
                to: project(center, angle, radius * 0.95),
                width: 2.0,
                stroke: Stroke::Tick,
            });
        }
        shapes
    }

    /// Full face plus hands for `state`.
    ///
    /// Returns an empty list when the surface is degenerate.
    pub fn shapes(&self, state: &ClockState) -> Vec<Shape> {
        let mut shapes = self.dial();
        if shapes.is_empty() {
            return shapes;
        }

        let center = self.center();
        let radius = self.radius();
        let angles = HandAngles::of(state);
        for hand in Hand::ALL {
            shapes.push(Shape::Line {
                from: center,
                to: project(center, angles.get(hand), radius * self.lengths.get(hand)),
                width: self.widths.get(hand),
                stroke: Stroke::Hand(hand),
            });
        }
        shapes.push(Shape::Circle {
            center,
            radius: (radius * 0.03).max(1.0),
            width: 1.0,
            stroke: Stroke::Pivot,
        });
        shapes
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clock::Mode;

    fn hand_tip(shapes: &[Shape], hand: Hand) -> Point {
        shapes
            .iter()
            .find_map(|s| match s {
                Shape::Line { to, stroke, .. } if *stroke == Stroke::Hand(hand) => Some(*to),
                _ => None,
            })
            .expect("hand present")
    }

    #[test]
    fn test_face_layout() {
        let face = CanvasFace::new(300.0, 300.0).with_margin(15.0);
        assert_eq!(face.radius(), 135.0);
        let shapes = face.shapes(&ClockState::new(0, 0, 0.0, Mode::Analog));
        // ring + 12 ticks + 3 hands + pivot
        assert_eq!(shapes.len(), 17);

        let tip = hand_tip(&shapes, Hand::Second);
        assert!((tip.x - 150.0).abs() < 1e-9);
        assert!((tip.y - (150.0 - 135.0 * 0.8)).abs() < 1e-9);
    }

    #[test]
    fn test_hand_widths_are_carried() {
        let face = CanvasFace::new(200.0, 100.0);
        let shapes = face.shapes(&ClockState::new(6, 15, 30.0, Mode::Analog));
        let widths: Vec<f64> = shapes
            .iter()
            .filter_map(|s| match s {
                Shape::Line { width, stroke: Stroke::Hand(_), .. } => Some(*width),
                _ => None,
            })
            .collect();
        assert_eq!(widths, vec![4.0, 2.0, 1.0]);
    }

    #[test]
    fn test_degenerate_surface_is_empty() {
        let face = CanvasFace::new(30.0, 30.0);
        assert!(face.radius() <= 0.0);
        assert!(face.shapes(&ClockState::new(1, 1, 1.0, Mode::Analog)).is_empty());
        assert!(face.dial().is_empty());
    }
}
