//! Rasterization primitives
//!
//! Every primitive funnels into `Bitmap::put_point`, which alpha-composites
//! one color over whatever is already in the buffer. Geometry is never
//! pre-clipped: each write is bounds checked instead, so shapes that hang
//! off the edge of the bitmap simply lose their off-screen pixels.
//!
//! Drawing is order dependent. Later primitives blend over earlier ones,
//! and a translucent pixel written twice is darkened twice.

mod circle;
mod line;
mod polygon;

use crate::bitmap::Bitmap;
use crate::color::Color;
use crate::geometry::Point;

/// Narrow a coordinate computed in i64 back to i32, saturating at the ends
#[inline]
fn saturate(value: i64) -> i32 {
    value.clamp(i64::from(i32::MIN), i64::from(i32::MAX)) as i32
}

/// Steps `i` in `0..=steps` for which `origin + direction * i` lands in `0..extent`.
/// `direction` is +1 or -1. Returns None when no step is visible.
fn visible_steps(origin: i64, direction: i64, extent: u32, steps: i64) -> Option<(i64, i64)> {
    let last_cell = i64::from(extent) - 1;
    let (first, last) = if direction >= 0 {
        (-origin, last_cell - origin)
    } else {
        (origin - last_cell, origin)
    };
    let (first, last) = (first.max(0), last.min(steps));
    (first <= last).then_some((first, last))
}

impl Bitmap {
    /// Composite `color` over the pixel at `position` using its alpha.
    /// Transparent colors and out-of-bounds positions are skipped.
    #[inline]
    pub fn put_point(&mut self, position: Point, color: Color) {
        if color.is_transparent() {
            return;
        }
        if let Some(existing) = self.get(position.x, position.y) {
            self.put(position.x, position.y, existing.blend(color));
        }
    }
}
