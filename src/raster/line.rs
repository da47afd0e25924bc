use crate::bitmap::Bitmap;
use crate::color::Color;
use crate::geometry::{Point, Rect, Vertex};

impl Bitmap {
    /// Draw a line from `start` to `end`, interpolating the vertex colors.
    ///
    /// Vertical lines step y directly. Everything else uses DDA stepping
    /// along the axis with more pixels so the line never has gaps; the
    /// color factor is taken from that same axis.
    pub fn draw_line(&mut self, start: Vertex, end: Vertex) {
        let (p0, p1) = (start.position, end.position);

        if p0.x == p1.x {
            self.vertical_line(start, end);
            return;
        }

        // Deltas are taken in i64 so far off-screen endpoints can't overflow
        let (x0, y0) = (i64::from(p0.x), i64::from(p0.y));
        let dx = i64::from(p1.x) - x0;
        let dy = i64::from(p1.y) - y0;
        let x_major = dx.abs() >= dy.abs();
        let delta = dx.abs().max(dy.abs());
        let x_step = dx as f64 / delta as f64;
        let y_step = dy as f64 / delta as f64;

        // The major coordinate moves by exactly one per step, so only the
        // steps that land on a visible row or column need to be walked.
        let visible = if x_major {
            super::visible_steps(x0, dx.signum(), self.width(), delta)
        } else {
            super::visible_steps(y0, dy.signum(), self.height(), delta)
        };
        let Some((first, last)) = visible else {
            return;
        };

        for i in first..=last {
            let x = x0 + (i as f64 * x_step).round() as i64;
            let y = y0 + (i as f64 * y_step).round() as i64;
            let t = if x_major {
                (x - x0) as f64 / dx as f64
            } else {
                (y - y0) as f64 / dy as f64
            };
            let position = Point::new(super::saturate(x), super::saturate(y));
            self.put_point(position, start.color.lerp(end.color, t as f32));
        }
    }

    fn vertical_line(&mut self, start: Vertex, end: Vertex) {
        let (p0, p1) = (start.position, end.position);
        if p0.x < 0 || i64::from(p0.x) >= i64::from(self.width()) {
            return;
        }
        let y0 = i64::from(p0.y);
        let span = i64::from(p1.y) - y0;

        let visible = super::visible_steps(y0, span.signum(), self.height(), span.abs());
        let Some((first, last)) = visible else {
            return;
        };

        for i in first..=last {
            let y = y0 + span.signum() * i;
            // Degenerate (single point) line takes the start color
            let t = if span == 0 {
                0.0
            } else {
                (y - y0) as f64 / span as f64
            };
            let color = start.color.lerp(end.color, t as f32);
            self.put_point(Point::new(p0.x, super::saturate(y)), color);
        }
    }

    /// Uniform-color line, used by outlines and fill spans
    #[inline]
    pub(crate) fn line_solid(&mut self, from: Point, to: Point, color: Color) {
        self.draw_line(Vertex::new(from, color), Vertex::new(to, color));
    }

    /// Draw a 1px rectangle outline as four lines.
    /// Rects with a zero dimension cover no pixels and draw nothing.
    pub fn draw_rect(&mut self, rect: Rect, color: Color) {
        if rect.width == 0 || rect.height == 0 {
            return;
        }
        let top_left = Point::new(rect.x, rect.y);
        let top_right = Point::new(rect.right(), rect.y);
        let bottom_right = Point::new(rect.right(), rect.bottom());
        let bottom_left = Point::new(rect.x, rect.bottom());

        self.line_solid(top_left, top_right, color);
        self.line_solid(top_right, bottom_right, color);
        self.line_solid(bottom_right, bottom_left, color);
        self.line_solid(bottom_left, top_left, color);
    }

    /// Fill a rectangle with one horizontal line per row
    pub fn fill_rect(&mut self, rect: Rect, color: Color) {
        if rect.width == 0 || rect.height == 0 {
            return;
        }
        // Rows off the bitmap can't produce visible pixels
        let top = rect.y.max(0);
        let bottom = rect.bottom().min(super::saturate(i64::from(self.height()) - 1));
        for y in top..=bottom {
            self.line_solid(Point::new(rect.x, y), Point::new(rect.right(), y), color);
        }
    }
}
