//! Character-grid rasterizer for the analog face.
//!
//! The face is stamped in a fixed order: ring, hour labels, hands (hour,
//! minute, second) and finally the centre marker. Every write goes through
//! [`CharGrid::set`], which drops anything outside the grid, so no radius or
//! angle can write out of bounds.

use serde::Deserialize;

use super::HandLengths;
use crate::clock::{project, ClockState, Hand, HandAngles, Point};

/// Labels for the twelve hour positions, starting at the top.
const HOUR_LABELS: [&str; 12] = ["12", "1", "2", "3", "4", "5", "6", "7", "8", "9", "10", "11"];

/// Fixed-size grid of characters, row-major.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CharGrid {
    width: usize,
    height: usize,
    cells: Vec<char>,
}

impl CharGrid {
    /// Create a grid filled with spaces.
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            width,
            height,
            cells: vec![' '; width * height],
        }
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    /// Character at a cell, `None` when out of bounds.
    pub fn get(&self, x: usize, y: usize) -> Option<char> {
        if x < self.width && y < self.height {
            Some(self.cells[y * self.width + x])
        } else {
            None
        }
    }

    /// Write one cell. Returns `false` (and writes nothing) when the
    /// coordinate falls outside the grid.
    pub fn set(&mut self, x: i64, y: i64, ch: char) -> bool {
        if x < 0 || y < 0 {
            return false;
        }
        let (x, y) = (x as usize, y as usize);
        if x >= self.width || y >= self.height {
            return false;
        }
        self.cells[y * self.width + x] = ch;
        true
    }

    /// Write a string left to right starting at a cell, clipping per char.
    pub fn put_str(&mut self, x: i64, y: i64, s: &str) {
        for (i, ch) in s.chars().enumerate() {
            self.set(x.saturating_add(i as i64), y, ch);
        }
    }

    /// Count of non-space cells.
    pub fn filled(&self) -> usize {
        self.cells.iter().filter(|c| **c != ' ').count()
    }

    /// Rows as strings, top to bottom.
    pub fn to_lines(&self) -> Vec<String> {
        if self.width == 0 {
            return vec![String::new(); self.height];
        }
        self.cells.chunks(self.width).map(|row| row.iter().collect()).collect()
    }
}

/// Characters used to draw each element of the face.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct FaceGlyphs {
    pub ring: char,
    pub center: char,
    pub hour: char,
    pub minute: char,
    pub second: char,
}

impl Default for FaceGlyphs {
    fn default() -> Self {
        Self {
            ring: '●',
            center: '●',
            hour: 'H',
            minute: 'M',
            second: 'S',
        }
    }
}

impl FaceGlyphs {
    pub fn hand(&self, hand: Hand) -> char {
        match hand {
            Hand::Hour => self.hour,
            Hand::Minute => self.minute,
            Hand::Second => self.second,
        }
    }
}

/// Geometry of an analog face laid onto a [`CharGrid`].
#[derive(Debug, Clone, PartialEq)]
pub struct GridFace {
    /// Centre cell (fractional coordinates are rounded per write).
    pub center: Point,
    /// Ring radius in rows.
    pub radius: f64,
    /// Horizontal stretch applied to projected offsets. Terminal cells are
    /// roughly twice as tall as wide, so hosts usually pass `2.0`.
    pub aspect: f64,
    /// Degrees between ring markers.
    pub ring_step: u32,
    pub lengths: HandLengths,
    pub glyphs: FaceGlyphs,
}

impl GridFace {
    /// A face centred in a `width × height` grid, leaving a two-cell margin.
    ///
    /// The radius may come out zero or negative on tiny grids; [`stamp`]
    /// then leaves the grid untouched.
    ///
    /// [`stamp`]: GridFace::stamp
    pub fn centered(width: usize, height: usize, aspect: f64) -> Self {
        let aspect = if aspect.is_finite() && aspect > 0.0 { aspect } else { 1.0 };
        let cx = (width / 2) as f64;
        let cy = (height / 2) as f64;
        Self {
            center: Point::new(cx, cy),
            radius: (cx / aspect).min(cy) - 2.0,
            aspect,
            ring_step: 5,
            lengths: HandLengths::default(),
            glyphs: FaceGlyphs::default(),
        }
    }

    pub fn with_glyphs(mut self, glyphs: FaceGlyphs) -> Self {
        self.glyphs = glyphs;
        self
    }

    pub fn with_lengths(mut self, lengths: HandLengths) -> Self {
        self.lengths = lengths;
        self
    }

    pub fn with_ring_step(mut self, step: u32) -> Self {
        self.ring_step = step;
        self
    }

    /// Whether the geometry can be drawn at all.
    pub fn is_drawable(&self) -> bool {
        self.radius.is_finite() && self.radius > 0.0
    }

    /// Cell hit by a projection of `length` at `angle`.
    fn cell(&self, angle: f64, length: f64) -> (i64, i64) {
        let offset = project(Point::default(), angle, length);
        let x = (self.center.x + offset.x * self.aspect).round() as i64;
        let y = (self.center.y + offset.y).round() as i64;
        (x, y)
    }

    /// Stamp the full face for `state` onto `grid`.
    pub fn stamp(&self, grid: &mut CharGrid, state: &ClockState) {
        if !self.is_drawable() {
            return;
        }

        // Ring
        let step = self.ring_step.clamp(1, 360) as usize;
        for angle in (0..360).step_by(step) {
            let (x, y) = self.cell(angle as f64, self.radius);
            grid.set(x, y, self.glyphs.ring);
        }

        // Hour labels
        let label_radius = if self.radius > 1.0 { self.radius - 1.0 } else { self.radius };
        for (i, label) in HOUR_LABELS.iter().enumerate() {
            let (x, y) = self.cell(i as f64 * 30.0, label_radius);
            grid.put_str(x - label.len() as i64 / 2, y, label);
        }

        // Hands
        let angles = HandAngles::of(state);
        for hand in Hand::ALL {
            let length = self.radius * self.lengths.get(hand);
            self.stamp_hand(grid, angles.get(hand), length, self.glyphs.hand(hand));
        }

        // Centre
        let (x, y) = self.cell(0.0, 0.0);
        grid.set(x, y, self.glyphs.center);
    }

    /// Straight run of `ch` from the centre out to the projected endpoint.
    fn stamp_hand(&self, grid: &mut CharGrid, angle: f64, length: f64, ch: char) {
        if !(length.is_finite() && length > 0.0) {
            return;
        }
        // Half-cell sampling, stretched with the aspect so wide faces have no gaps
        let samples = (length * 2.0 * self.aspect.max(1.0)).ceil().min(10_000.0) as u32;
        for i in 1..=samples {
            let r = length * i as f64 / samples as f64;
            let (x, y) = self.cell(angle, r);
            grid.set(x, y, ch);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clock::Mode;
    use proptest::prelude::*;

    fn state(h: u32, m: u32, s: f64) -> ClockState {
        ClockState::new(h, m, s, Mode::Analog)
    }

    #[test]
    fn test_set_discards_out_of_bounds() {
        let mut grid = CharGrid::new(4, 3);
        assert!(!grid.set(-1, 0, 'x'));
        assert!(!grid.set(0, 3, 'x'));
        assert!(!grid.set(4, 0, 'x'));
        assert!(grid.set(3, 2, 'x'));
        assert_eq!(grid.filled(), 1);
        assert_eq!(grid.get(3, 2), Some('x'));
        assert_eq!(grid.get(4, 2), None);
    }

    #[test]
    fn test_put_str_clips() {
        let mut grid = CharGrid::new(3, 1);
        grid.put_str(1, 0, "abc");
        assert_eq!(grid.to_lines(), vec![" ab".to_string()]);
        grid.put_str(-2, 0, "xyz");
        assert_eq!(grid.to_lines(), vec!["zab".to_string()]);
    }

    #[test]
    fn test_face_at_three_oclock() {
        let mut grid = CharGrid::new(41, 41);
        let face = GridFace::centered(41, 41, 1.0);
        face.stamp(&mut grid, &state(3, 0, 0.0));

        // Centre marker wins over every hand at the origin
        assert_eq!(grid.get(20, 20), Some('●'));
        // Hour hand points right along the centre row
        assert_eq!(grid.get(22, 20), Some('H'));
        // Minute hand points straight up, second hand shares it and wins
        assert_eq!(grid.get(20, 15), Some('S'));
        // "12" sits at the top of the dial, one row inside the ring
        let top = grid.to_lines()[(20.0 - (face.radius - 1.0)) as usize].clone();
        assert!(top.contains("12"), "{top:?}");
    }

    #[test]
    fn test_hands_use_distinct_characters() {
        let mut grid = CharGrid::new(61, 31);
        GridFace::centered(61, 31, 2.0).stamp(&mut grid, &state(3, 30, 45.0));
        let text: String = grid.to_lines().concat();
        assert!(text.contains('H'));
        assert!(text.contains('M'));
        assert!(text.contains('S'));
    }

    #[test]
    fn test_degenerate_radius_draws_nothing() {
        let mut grid = CharGrid::new(3, 3);
        let face = GridFace::centered(3, 3, 1.0);
        assert!(!face.is_drawable());
        face.stamp(&mut grid, &state(1, 2, 3.0));
        assert_eq!(grid.filled(), 0);
    }

    #[test]
    fn test_recovers_after_resize() {
        let tiny = GridFace::centered(2, 2, 2.0);
        let mut grid = CharGrid::new(2, 2);
        tiny.stamp(&mut grid, &state(0, 0, 0.0));
        assert_eq!(grid.filled(), 0);

        let mut grid = CharGrid::new(40, 20);
        GridFace::centered(40, 20, 2.0).stamp(&mut grid, &state(0, 0, 0.0));
        assert!(grid.filled() > 12);
    }

    #[test]
    fn test_zero_width_grid() {
        let mut grid = CharGrid::new(0, 2);
        let face = GridFace {
            radius: 5.0,
            ..GridFace::centered(0, 2, 1.0)
        };
        face.stamp(&mut grid, &state(4, 4, 4.0));
        assert_eq!(grid.to_lines(), vec![String::new(), String::new()]);
    }

    proptest! {
        #[test]
        fn stamping_never_leaves_the_grid(
            width in 0usize..50,
            height in 0usize..30,
            radius in -5.0f64..200.0,
            aspect in 0.5f64..3.0,
            hour in 0u32..12,
            minute in 0u32..60,
            second in 0.0f64..60.0,
        ) {
            let mut grid = CharGrid::new(width, height);
            let face = GridFace {
                radius,
                ..GridFace::centered(width, height, aspect)
            };
            face.stamp(&mut grid, &state(hour, minute, second));

            prop_assert_eq!(grid.to_lines().len(), height);

            // Same face on a grid with a border all round, shifted into it.
            // A write that escaped or wrapped inside the small grid would
            // differ from the framed copy.
            const PAD: usize = 3;
            let mut framed = CharGrid::new(width + 2 * PAD, height + 2 * PAD);
            let shifted = GridFace {
                center: Point::new(face.center.x + PAD as f64, face.center.y + PAD as f64),
                ..face.clone()
            };
            shifted.stamp(&mut framed, &state(hour, minute, second));
            for y in 0..height {
                for x in 0..width {
                    prop_assert_eq!(
                        grid.get(x, y),
                        framed.get(x + PAD, y + PAD),
                        "cell ({}, {})",
                        x,
                        y
                    );
                }
            }
        }
    }
}
