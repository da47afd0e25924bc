use super::{hsv, Demo};
use softraster::{Color, Point, Rect, Renderer, Vertex};

/// Every primitive side by side, outline on top and filled below,
/// with a translucent bar sweeping over them to show compositing
pub struct Gallery {
    time: f32,
    width: u32,
    height: u32,
}

impl Gallery {
    pub fn new() -> Self {
        Self {
            time: 0.0,
            width: 0,
            height: 0,
        }
    }
}

impl Default for Gallery {
    fn default() -> Self {
        Self::new()
    }
}

impl Demo for Gallery {
    fn update(&mut self, dt: f32, width: u32, height: u32) {
        self.time += dt;
        self.width = width;
        self.height = height;
    }

    fn draw(&self, renderer: &mut Renderer) {
        let cell = (self.width / 4).min(self.height / 2) as i32;
        if cell < 8 {
            return;
        }
        let pad = cell / 8;
        let size = cell - 2 * pad;

        for row in 0..2 {
            let filled = row == 1;
            let top = row * cell + pad;
            let color = hsv(row as f32 * 180.0 + 30.0, 0.7, 0.95, 255);

            // Rectangle
            let rect = Rect::new(pad, top, size as u32, size as u32);
            if filled {
                renderer.draw_rect_fill(rect, color);
            } else {
                renderer.draw_rect(rect, color);
            }

            // Triangle
            let left = cell + pad;
            let a = Point::new(left + size / 2, top);
            let b = Point::new(left + size, top + size);
            let c = Point::new(left, top + size);
            if filled {
                renderer.draw_triangle_fill(a, b, c, color);
            } else {
                renderer.draw_triangle(a, b, c, color);
            }

            // Circle
            let center = Point::new(2 * cell + cell / 2, top + size / 2);
            if filled {
                renderer.draw_circle_fill(center, size / 2, color);
            } else {
                renderer.draw_circle(center, size / 2, color);
            }

            // Gradient line fan (same on both rows)
            let origin = Vertex::at(3 * cell + pad, top + size, Color::WHITE);
            for i in 0..8 {
                let end = Point::new(3 * cell + pad + size * i / 7, top);
                let tip = hsv(i as f32 * 45.0, 1.0, 1.0, 255);
                renderer.draw_line(origin, Vertex::new(end, tip));
            }
        }

        // Translucent sweep
        let sweep_w = (cell / 2).max(1);
        let travel = (self.width as i32 + sweep_w) as f32;
        let x = (self.time * 120.0) % travel - sweep_w as f32;
        renderer.draw_rect_fill(
            Rect::new(x as i32, 0, sweep_w as u32, self.height),
            Color::rgba(255, 255, 255, 64),
        );
    }

    fn name(&self) -> &str {
        "Gallery"
    }
}
