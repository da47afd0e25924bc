//! Integer screen-space geometry: points, color-carrying vertices and rectangles

use crate::color::Color;
use serde::{Deserialize, Serialize};

/// A position in integer screen coordinates
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

impl Point {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Translate by (dx, dy), saturating at the i32 range
    pub const fn offset(self, dx: i32, dy: i32) -> Self {
        Self {
            x: self.x.saturating_add(dx),
            y: self.y.saturating_add(dy),
        }
    }
}

impl From<(i32, i32)> for Point {
    fn from((x, y): (i32, i32)) -> Self {
        Self { x, y }
    }
}

/// A position plus the color interpolated along lines and polygon edges
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Vertex {
    pub position: Point,
    pub color: Color,
}

impl Vertex {
    pub const fn new(position: Point, color: Color) -> Self {
        Self { position, color }
    }

    pub const fn at(x: i32, y: i32, color: Color) -> Self {
        Self {
            position: Point::new(x, y),
            color,
        }
    }
}

/// Axis-aligned rectangle with its origin at the top-left corner
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Rect {
    pub x: i32,
    pub y: i32,
    pub width: u32,
    pub height: u32,
}

impl Rect {
    pub const fn new(x: i32, y: i32, width: u32, height: u32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// True only when BOTH dimensions are zero.
    /// A zero-width rect with positive height is not empty under this rule.
    pub fn is_empty(&self) -> bool {
        self.width == 0 && self.height == 0
    }

    /// Last column covered by the rect (inclusive), saturating at `i32::MAX`
    pub fn right(&self) -> i32 {
        inclusive_end(self.x, self.width)
    }

    /// Last row covered by the rect (inclusive), saturating at `i32::MAX`
    pub fn bottom(&self) -> i32 {
        inclusive_end(self.y, self.height)
    }

    pub fn contains(&self, p: Point) -> bool {
        self.width > 0
            && self.height > 0
            && p.x >= self.x
            && p.x <= self.right()
            && p.y >= self.y
            && p.y <= self.bottom()
    }
}

fn inclusive_end(start: i32, length: u32) -> i32 {
    let end = i64::from(start) + i64::from(length) - 1;
    end.clamp(i64::from(i32::MIN), i64::from(i32::MAX)) as i32
}
