//! Circle outline and fill via octant symmetry

use std::collections::BTreeMap;

use crate::bitmap::Bitmap;
use crate::color::Color;
use crate::geometry::Point;

/// Integer points of the 0-45 degree octant, as offsets from the center.
///
/// Starts at (0, radius) and advances x every step; y drops by one whenever
/// the midpoint (x + 1, y - 0.5) lies outside the circle. Stops once x > y.
fn octant(radius: i32) -> Vec<(i32, i32)> {
    let mut points = Vec::with_capacity(radius.max(0) as usize + 1);
    let r2 = (radius as f32) * (radius as f32);
    let mut x = 0;
    let mut y = radius;

    while x <= y {
        points.push((x, y));
        let mx = (x + 1) as f32;
        let my = y as f32 - 0.5;
        if mx * mx + my * my > r2 {
            y -= 1;
        }
        x += 1;
    }
    points
}

impl Bitmap {
    /// Draw a circle outline as the eight mirrored copies of one octant.
    /// This is a point set, so very small radii may show gaps.
    pub fn draw_circle(&mut self, center: Point, radius: i32, color: Color) {
        for (x, y) in octant(radius) {
            for (dx, dy) in [
                (x, y),
                (y, x),
                (-y, x),
                (-x, y),
                (-x, -y),
                (-y, -x),
                (y, -x),
                (x, -y),
            ] {
                self.put_point(center.offset(dx, dy), color);
            }
        }
    }

    /// Fill a circle with one vertical line per column.
    ///
    /// Columns are deduplicated (keeping the tallest half-height) so no pixel
    /// is composited twice.
    pub fn fill_circle(&mut self, center: Point, radius: i32, color: Color) {
        let mut columns: BTreeMap<i32, i32> = BTreeMap::new();
        for (x, y) in octant(radius) {
            for (dx, h) in [(x, y), (-x, y), (y, x), (-y, x)] {
                let entry = columns.entry(dx).or_insert(h);
                *entry = (*entry).max(h);
            }
        }

        for (dx, h) in columns {
            self.line_solid(center.offset(dx, h), center.offset(dx, -h), color);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color::Pixel;

    const BACKGROUND: Color = Color::rgb(0, 0, 0);

    fn canvas() -> Bitmap {
        let mut bitmap = Bitmap::with_size(100, 100);
        bitmap.clear(Pixel::from(BACKGROUND));
        bitmap
    }

    fn painted(bitmap: &Bitmap) -> Vec<(i32, i32)> {
        let bg = Some(Pixel::from(BACKGROUND));
        let mut out = Vec::new();
        for y in 0..bitmap.height() as i32 {
            for x in 0..bitmap.width() as i32 {
                if bitmap.get(x, y) != bg {
                    out.push((x, y));
                }
            }
        }
        out
    }

    #[test]
    fn test_octant_radius_10() {
        assert_eq!(
            octant(10),
            vec![(0, 10), (1, 10), (2, 10), (3, 10), (4, 9), (5, 9), (6, 8), (7, 7)]
        );
    }

    #[test]
    fn test_octant_degenerate() {
        assert_eq!(octant(0), vec![(0, 0)]);
        assert!(octant(-3).is_empty());
    }

    #[test]
    fn test_outline_subset_of_fill() {
        let center = Point::new(50, 50);

        let mut outline = canvas();
        outline.draw_circle(center, 10, Color::WHITE);
        let outline_px = painted(&outline);

        let mut fill = canvas();
        fill.fill_circle(center, 10, Color::WHITE);
        let fill_px = painted(&fill);

        assert!(fill_px.len() > outline_px.len());
        for p in &outline_px {
            assert!(fill_px.contains(p), "outline pixel {:?} not in fill", p);
        }
    }

    #[test]
    fn test_outline_extremes() {
        let mut bitmap = canvas();
        bitmap.draw_circle(Point::new(50, 50), 10, Color::WHITE);
        let white = Some(Pixel::from(Color::WHITE));
        assert_eq!(bitmap.get(50, 40), white);
        assert_eq!(bitmap.get(50, 60), white);
        assert_eq!(bitmap.get(40, 50), white);
        assert_eq!(bitmap.get(60, 50), white);
        assert_eq!(bitmap.get(57, 57), white);
        assert_ne!(bitmap.get(50, 50), white);
    }

    #[test]
    fn test_fill_is_solid_and_bounded() {
        let mut bitmap = canvas();
        bitmap.fill_circle(Point::new(50, 50), 10, Color::WHITE);
        let white = Some(Pixel::from(Color::WHITE));
        assert_eq!(bitmap.get(50, 50), white);
        assert_eq!(bitmap.get(50, 40), white);
        assert_eq!(bitmap.get(60, 50), white);
        assert_eq!(bitmap.get(57, 57), white);
        assert_ne!(bitmap.get(58, 58), white);
        assert_ne!(bitmap.get(61, 50), white);
        assert_ne!(bitmap.get(50, 39), white);
    }

    #[test]
    fn test_translucent_fill_composites_once() {
        let mut bitmap = canvas();
        let color = Color::rgba(255, 255, 255, 128);
        bitmap.fill_circle(Point::new(50, 50), 10, color);
        let once = Some(Pixel::from(BACKGROUND).blend(color));
        for (x, y) in painted(&bitmap) {
            assert_eq!(bitmap.get(x, y), once, "({}, {})", x, y);
        }
    }

    #[test]
    fn test_radius_zero_is_single_point() {
        let mut bitmap = canvas();
        bitmap.fill_circle(Point::new(5, 5), 0, Color::RED);
        assert_eq!(painted(&bitmap), vec![(5, 5)]);
    }

    #[test]
    fn test_circle_clips_at_edges() {
        let mut bitmap = canvas();
        bitmap.fill_circle(Point::new(0, 0), 10, Color::RED);
        bitmap.draw_circle(Point::new(99, 99), 10, Color::RED);
        let px = painted(&bitmap);
        assert!(px.contains(&(0, 0)));
        assert!(px.contains(&(99, 89)));
        assert!(!px.is_empty());
    }

    #[test]
    fn test_circles_at_i32_extremes_are_clipped() {
        let mut bitmap = canvas();
        bitmap.draw_circle(Point::new(i32::MAX - 2, 0), 5, Color::RED);
        bitmap.fill_circle(Point::new(i32::MAX - 2, 0), 5, Color::RED);
        bitmap.draw_circle(Point::new(i32::MIN + 2, i32::MIN + 2), 5, Color::RED);
        bitmap.fill_circle(Point::new(i32::MIN + 2, i32::MIN + 2), 5, Color::RED);
        assert!(painted(&bitmap).is_empty());
    }
}
