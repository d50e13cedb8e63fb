//! Projection of a hand angle onto a drawing surface.

use serde::Serialize;

/// A point on a surface whose y axis grows downward.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// Endpoint of a hand of `length` at `angle_deg`, starting from `center`.
///
/// The y component is subtracted because screen rows grow downward while
/// angle zero points up.
pub fn project(center: Point, angle_deg: f64, length: f64) -> Point {
    let rad = angle_deg.to_radians();
    Point {
        x: center.x + length * rad.sin(),
        y: center.y - length * rad.cos(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f64 = 1e-9;

    fn close(a: Point, b: Point) -> bool {
        (a.x - b.x).abs() < EPS && (a.y - b.y).abs() < EPS
    }

    #[test]
    fn test_cardinal_directions() {
        let c = Point::new(10.0, 10.0);
        assert!(close(project(c, 0.0, 4.0), Point::new(10.0, 6.0)));
        assert!(close(project(c, 90.0, 4.0), Point::new(14.0, 10.0)));
        assert!(close(project(c, 180.0, 4.0), Point::new(10.0, 14.0)));
        assert!(close(project(c, 270.0, 4.0), Point::new(6.0, 10.0)));
    }

    #[test]
    fn test_zero_length_is_center() {
        let c = Point::new(3.5, 7.25);
        assert!(close(project(c, 123.0, 0.0), c));
    }

    #[test]
    fn test_repeated_calls_agree() {
        let c = Point::new(30.0, 15.0);
        assert_eq!(project(c, 217.3, 11.0), project(c, 217.3, 11.0));
    }
}
