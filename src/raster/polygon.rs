//! Polygon outline and scan-line fill

use crate::bitmap::Bitmap;
use crate::color::Color;
use crate::geometry::Point;

/// A non-horizontal polygon edge, kept in its original direction
#[derive(Debug, Clone, Copy)]
struct Edge {
    x0: i32,
    y0: i32,
    y1: i32,
    inverse_slope: f64,
}

impl Edge {
    /// Horizontal edges return None; they would coincide with a scan-line
    fn new(from: Point, to: Point) -> Option<Self> {
        if from.y == to.y {
            return None;
        }
        Some(Self {
            x0: from.x,
            y0: from.y,
            y1: to.y,
            inverse_slope: (i64::from(to.x) - i64::from(from.x)) as f64
                / (i64::from(to.y) - i64::from(from.y)) as f64,
        })
    }

    fn intersect(&self, y: i32) -> Option<Intersection> {
        let top = self.y0.min(self.y1);
        let bottom = self.y0.max(self.y1);
        if y < top || y > bottom {
            return None;
        }
        let rows = (i64::from(y) - i64::from(self.y0)) as f64;
        let x = (self.inverse_slope * rows + f64::from(self.x0)).round() as i64;
        Some(Intersection {
            x: super::saturate(x),
            is_maximum: y == bottom,
            is_minimum: y == top,
        })
    }
}

/// Where an edge meets a scan-line, plus whether it meets it at one of its endpoints
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Intersection {
    x: i32,
    is_maximum: bool,
    is_minimum: bool,
}

/// How a run of intersections sharing one x coordinate is treated
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Hit {
    /// At least two edges peak (or bottom out) here: the scan-line only grazes a vertex
    Corner,
    /// Several edges pass through one pixel without a shared extremum
    Cross,
    /// Toggles inside/outside; paired into spans
    Crossing,
}

fn classify(group: &[Intersection]) -> Hit {
    let maxima = group.iter().filter(|hit| hit.is_maximum).count();
    let minima = group.iter().filter(|hit| hit.is_minimum).count();

    if maxima >= 2 || minima >= 2 {
        Hit::Corner
    } else if group.len() > 1 && (group.len() % 2 == 1 || (maxima == 0 && minima == 0)) {
        Hit::Cross
    } else {
        Hit::Crossing
    }
}

/// Split sorted intersections into span boundaries and lone points.
///
/// Corner and cross groups never bound a span. A crossing group contributes
/// its x once. An unpaired trailing crossing is demoted to a lone point.
///
/// A group that mixes a peak vertex with an unrelated mid-edge crossing is
/// classified as a corner, which swallows the crossing and can leave a gap
/// in the fill for that row.
fn split_scanline(intersections: &[Intersection], crossings: &mut Vec<i32>, points: &mut Vec<i32>) {
    crossings.clear();
    points.clear();

    let mut start = 0;
    while start < intersections.len() {
        let x = intersections[start].x;
        let mut end = start + 1;
        while end < intersections.len() && intersections[end].x == x {
            end += 1;
        }

        match classify(&intersections[start..end]) {
            Hit::Crossing => crossings.push(x),
            Hit::Corner | Hit::Cross => points.push(x),
        }
        start = end;
    }

    if crossings.len() % 2 == 1 {
        if let Some(x) = crossings.pop() {
            points.push(x);
        }
    }
}

impl Bitmap {
    /// Connect each vertex to the next (wrapping) with uniform-color lines
    pub fn draw_polygon(&mut self, vertices: &[Point], color: Color) {
        if vertices.len() < 3 {
            return;
        }
        let n = vertices.len();
        for i in 0..n {
            self.line_solid(vertices[i], vertices[(i + 1) % n], color);
        }
    }

    /// Fill a polygon (convex, concave or self-intersecting) with a scan-line sweep.
    ///
    /// A row that produced spans draws only those spans, so translucent
    /// fills are not composited twice at vertices. A row with no spans
    /// (a lone apex, for example) draws its corner points instead.
    pub fn fill_polygon(&mut self, vertices: &[Point], color: Color) {
        if vertices.len() < 3 {
            return;
        }

        let n = vertices.len();
        let edges: Vec<Edge> = (0..n)
            .filter_map(|i| Edge::new(vertices[i], vertices[(i + 1) % n]))
            .collect();

        // Bounds include vertices of horizontal edges
        let mut min_y = i32::MAX;
        let mut max_y = i32::MIN;
        for v in vertices {
            min_y = min_y.min(v.y);
            max_y = max_y.max(v.y);
        }

        // Rows off the bitmap can't produce visible pixels
        let min_y = min_y.max(0);
        let max_y = max_y.min(self.height() as i32 - 1);

        // Preallocate buffers (reused per scanline)
        let mut intersections = Vec::with_capacity(edges.len());
        let mut crossings = Vec::with_capacity(edges.len());
        let mut points = Vec::with_capacity(edges.len());

        for y in min_y..=max_y {
            intersections.clear();
            intersections.extend(edges.iter().filter_map(|edge| edge.intersect(y)));
            intersections.sort_by_key(|hit| hit.x);

            split_scanline(&intersections, &mut crossings, &mut points);

            if crossings.is_empty() {
                for &x in &points {
                    self.put_point(Point::new(x, y), color);
                }
            } else {
                for pair in crossings.chunks_exact(2) {
                    self.line_solid(Point::new(pair[0], y), Point::new(pair[1], y), color);
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color::Pixel;

    const BACKGROUND: Color = Color::rgb(7, 7, 7);
    const FILL: Color = Color::rgb(200, 40, 40);

    fn canvas(width: u32, height: u32) -> Bitmap {
        let mut bitmap = Bitmap::with_size(width, height);
        bitmap.clear(Pixel::from(BACKGROUND));
        bitmap
    }

    fn is_filled(bitmap: &Bitmap, x: i32, y: i32) -> bool {
        bitmap.get(x, y) == Some(Pixel::from(FILL))
    }

    fn filled_count(bitmap: &Bitmap) -> usize {
        let mut count = 0;
        for y in 0..bitmap.height() as i32 {
            for x in 0..bitmap.width() as i32 {
                if is_filled(bitmap, x, y) {
                    count += 1;
                }
            }
        }
        count
    }

    fn pts(coords: &[(i32, i32)]) -> Vec<Point> {
        coords.iter().map(|&c| Point::from(c)).collect()
    }

    fn hit(x: i32, is_maximum: bool, is_minimum: bool) -> Intersection {
        Intersection {
            x,
            is_maximum,
            is_minimum,
        }
    }

    #[test]
    fn test_horizontal_edges_are_dropped() {
        assert!(Edge::new(Point::new(0, 3), Point::new(9, 3)).is_none());
        let edge = Edge::new(Point::new(0, 0), Point::new(4, 8));
        assert!(edge.is_some());
    }

    #[test]
    fn test_edge_intersection_flags() {
        // Edge running upward keeps its direction but flags use its own extremes
        let edge = Edge::new(Point::new(10, 10), Point::new(0, 0)).unwrap();
        assert_eq!(edge.intersect(10), Some(hit(10, true, false)));
        assert_eq!(edge.intersect(0), Some(hit(0, false, true)));
        assert_eq!(edge.intersect(5), Some(hit(5, false, false)));
        assert_eq!(edge.intersect(11), None);
        assert_eq!(edge.intersect(-1), None);
    }

    #[test]
    fn test_classify() {
        // Apex of a triangle
        assert_eq!(classify(&[hit(5, false, true), hit(5, false, true)]), Hit::Corner);
        // Side vertex of a diamond: one edge ends, the next begins
        assert_eq!(classify(&[hit(5, true, false), hit(5, false, true)]), Hit::Crossing);
        // Two edges crossing mid-way
        assert_eq!(classify(&[hit(5, false, false), hit(5, false, false)]), Hit::Cross);
        // Pass-through vertex plus an unrelated crossing
        assert_eq!(
            classify(&[hit(5, true, false), hit(5, false, true), hit(5, false, false)]),
            Hit::Cross
        );
        assert_eq!(classify(&[hit(5, false, false)]), Hit::Crossing);
        assert_eq!(classify(&[hit(5, true, false)]), Hit::Crossing);
    }

    #[test]
    fn test_triangle_centroid_filled() {
        let mut bitmap = canvas(100, 100);
        // (0,-10), (10,10), (-10,10) moved to screen space around (50, 50)
        let triangle: Vec<Point> = pts(&[(0, -10), (10, 10), (-10, 10)])
            .into_iter()
            .map(|p| p.offset(50, 50))
            .collect();
        bitmap.fill_polygon(&triangle, FILL);

        assert!(is_filled(&bitmap, 50, 53));
        // Apex and bottom row
        assert!(is_filled(&bitmap, 50, 40));
        assert!(is_filled(&bitmap, 40, 60));
        assert!(is_filled(&bitmap, 60, 60));
        // Well outside
        assert!(!is_filled(&bitmap, 20, 20));
        assert!(!is_filled(&bitmap, 41, 45));
        assert!(!is_filled(&bitmap, 50, 61));
    }

    #[test]
    fn test_square_matches_fill_rect() {
        let mut poly = canvas(8, 8);
        poly.fill_polygon(&pts(&[(1, 1), (4, 1), (4, 4), (1, 4)]), FILL);

        let mut rect = canvas(8, 8);
        rect.fill_rect(crate::geometry::Rect::new(1, 1, 4, 4), FILL);

        assert_eq!(poly.as_bytes(), rect.as_bytes());
        assert_eq!(filled_count(&poly), 16);
    }

    #[test]
    fn test_diamond_side_vertices_fill_full_row() {
        let mut bitmap = canvas(12, 12);
        bitmap.fill_polygon(&pts(&[(5, 0), (10, 5), (5, 10), (0, 5)]), FILL);
        for x in 0..=10 {
            assert!(is_filled(&bitmap, x, 5), "x={}", x);
        }
        assert!(is_filled(&bitmap, 5, 0));
        assert!(is_filled(&bitmap, 5, 10));
        assert!(!is_filled(&bitmap, 0, 0));
        assert!(!is_filled(&bitmap, 11, 5));
    }

    #[test]
    fn test_concave_notch_left_open() {
        let mut bitmap = canvas(12, 12);
        // Square with a V cut up from the bottom edge to (5, 5)
        bitmap.fill_polygon(&pts(&[(0, 0), (10, 0), (10, 10), (5, 5), (0, 10)]), FILL);

        assert!(is_filled(&bitmap, 5, 2));
        assert!(is_filled(&bitmap, 5, 5));
        assert!(is_filled(&bitmap, 2, 7));
        assert!(is_filled(&bitmap, 8, 7));
        // Inside the notch
        assert!(!is_filled(&bitmap, 5, 7));
        assert!(!is_filled(&bitmap, 5, 9));
        // Leg tips on the bottom row
        assert!(is_filled(&bitmap, 0, 10));
        assert!(is_filled(&bitmap, 10, 10));
        assert!(!is_filled(&bitmap, 5, 10));
    }

    #[test]
    fn test_self_intersecting_bowtie() {
        let mut bitmap = canvas(24, 24);
        bitmap.fill_polygon(&pts(&[(2, 2), (20, 20), (20, 2), (2, 20)]), FILL);
        // Both lobes filled, centre row spans the whole width
        assert!(is_filled(&bitmap, 18, 11));
        assert!(is_filled(&bitmap, 4, 11));
        assert!(is_filled(&bitmap, 11, 11));
        // Between the lobes above the crossing
        assert!(!is_filled(&bitmap, 11, 4));
    }

    #[test]
    fn test_translucent_fill_composites_once() {
        let mut bitmap = canvas(16, 16);
        let translucent = Color::rgba(255, 255, 255, 128);
        bitmap.fill_polygon(&pts(&[(2, 2), (12, 2), (12, 12), (2, 12)]), translucent);
        let expected = Pixel::from(BACKGROUND).blend(translucent);
        for y in 2..=12 {
            for x in 2..=12 {
                assert_eq!(bitmap.get(x, y), Some(expected), "({}, {})", x, y);
            }
        }
    }

    #[test]
    fn test_fill_clips_offscreen_rows() {
        let mut bitmap = canvas(10, 10);
        bitmap.fill_polygon(&pts(&[(-5, -5), (20, -5), (20, 20), (-5, 20)]), FILL);
        assert_eq!(filled_count(&bitmap), 100);
    }

    #[test]
    fn test_fill_with_i32_extreme_vertices_covers_bitmap() {
        let mut bitmap = canvas(10, 10);
        let corners = [
            (i32::MIN, i32::MIN),
            (i32::MAX, i32::MIN),
            (i32::MAX, i32::MAX),
            (i32::MIN, i32::MAX),
        ];
        bitmap.fill_polygon(&pts(&corners), FILL);
        assert_eq!(filled_count(&bitmap), 100);

        let mut outline = canvas(10, 10);
        outline.draw_polygon(&pts(&corners), FILL);
        assert_eq!(filled_count(&outline), 0);
    }

    #[test]
    fn test_degenerate_vertex_counts_draw_nothing() {
        let mut bitmap = canvas(8, 8);
        bitmap.fill_polygon(&pts(&[(0, 0), (7, 7)]), FILL);
        bitmap.draw_polygon(&pts(&[(0, 0), (7, 7)]), FILL);
        bitmap.fill_polygon(&[], FILL);
        assert_eq!(filled_count(&bitmap), 0);
    }

    #[test]
    fn test_outline_wraps_to_first_vertex() {
        let mut bitmap = canvas(12, 12);
        bitmap.draw_polygon(&pts(&[(1, 1), (9, 1), (9, 9)]), FILL);
        // Closing edge (9,9) -> (1,1)
        assert!(is_filled(&bitmap, 5, 5));
        assert!(is_filled(&bitmap, 5, 1));
        assert!(is_filled(&bitmap, 9, 5));
        // Interior of the outline is empty
        assert!(!is_filled(&bitmap, 7, 3));
    }

    // Known gap: on row 5 the peak vertex at (5, 5) shares its x with the
    // long diagonal's mid-edge crossing. The whole group is taken as a
    // corner, the row loses a span boundary, and only isolated points are
    // drawn. Rows above and below fill normally.
    #[test]
    fn test_corner_sharing_x_with_crossing_leaves_gap() {
        let mut bitmap = canvas(12, 12);
        bitmap.fill_polygon(&pts(&[(5, 5), (10, 0), (10, 10), (0, 0)]), FILL);

        assert!(is_filled(&bitmap, 7, 4));
        assert!(is_filled(&bitmap, 7, 6));
        assert!(!is_filled(&bitmap, 7, 5));
        // The corner and the dangling crossing are still drawn as points
        assert!(is_filled(&bitmap, 5, 5));
        assert!(is_filled(&bitmap, 10, 5));
    }
}
