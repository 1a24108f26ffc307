use crate::color::Color;
use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Copy, Clone, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Point { x, y }
    }

    pub fn distance(&self, other: &Self) -> f64 {
        let xs = self.x - other.x;
        let ys = self.y - other.y;
        ((xs * xs) + (ys * ys)).sqrt()
    }
}

impl fmt::Debug for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Point")
            .field("x", &self.x)
            .field("y", &self.y)
            .finish()
    }
}

/// A randomly placed anchor that pulls nearby pixels towards its color.
/// Owned by a single render pass and regenerated on every request.
#[derive(Debug, Copy, Clone)]
pub struct ControlPoint {
    pub position: Point,
    pub color: Color,
}

impl ControlPoint {
    pub fn new(position: Point, color: Color) -> Self {
        ControlPoint { position, color }
    }
}
