use super::{hsv, Demo};
use softraster::{Color, Point, Renderer};

const SPIKES: usize = 5;

/// Rotating concave star with a translucent copy drifting behind it
pub struct Star {
    angle: f32,
    hue: f32,
    center: (f32, f32),
    radius: f32,
}

impl Star {
    pub fn new() -> Self {
        Self {
            angle: 0.0,
            hue: 0.0,
            center: (0.0, 0.0),
            radius: 0.0,
        }
    }
}

/// Alternating outer and inner vertices
fn star_vertices(cx: f32, cy: f32, radius: f32, angle: f32) -> Vec<Point> {
    (0..SPIKES * 2)
        .map(|i| {
            let r = if i % 2 == 0 { radius } else { radius * 0.45 };
            let a = angle + i as f32 * std::f32::consts::PI / SPIKES as f32;
            Point::new((cx + r * a.cos()).round() as i32, (cy + r * a.sin()).round() as i32)
        })
        .collect()
}

impl Default for Star {
    fn default() -> Self {
        Self::new()
    }
}

impl Demo for Star {
    fn update(&mut self, dt: f32, width: u32, height: u32) {
        self.angle += dt * 0.8;
        self.hue = (self.hue + dt * 40.0) % 360.0;
        self.center = (width as f32 / 2.0, height as f32 / 2.0);
        self.radius = width.min(height) as f32 * 0.4;
    }

    fn draw(&self, renderer: &mut Renderer) {
        let (cx, cy) = self.center;

        // Shadow star, counter-rotating
        let shadow = star_vertices(cx + 12.0, cy + 12.0, self.radius, -self.angle * 0.5);
        renderer.draw_polygon_fill(&shadow, Color::rgba(0, 0, 0, 140));

        let star = star_vertices(cx, cy, self.radius, self.angle);
        renderer.draw_polygon_fill(&star, hsv(self.hue, 0.8, 0.9, 200));
        renderer.draw_polygon(&star, Color::WHITE);

        renderer.draw_circle(
            Point::new(cx as i32, cy as i32),
            (self.radius * 0.45) as i32,
            hsv(self.hue + 180.0, 0.6, 1.0, 255),
        );
    }

    fn name(&self) -> &str {
        "Star"
    }
}
