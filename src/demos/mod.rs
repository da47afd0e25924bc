mod bounce;
mod gallery;
mod star;

pub use bounce::Bounce;
pub use gallery::Gallery;
pub use star::Star;

use softraster::{Color, Renderer};

/// A scene that issues draw calls every frame
pub trait Demo {
    /// Advance animation state
    /// - dt: delta time in seconds
    /// - width/height: bitmap dimensions
    fn update(&mut self, dt: f32, width: u32, height: u32);

    /// Queue this frame's draw calls (the screen is already cleared)
    fn draw(&self, renderer: &mut Renderer);

    /// Demo name for logging
    fn name(&self) -> &str;
}

/// All demos in key order (1, 2, 3, ...)
pub fn all() -> Vec<Box<dyn Demo>> {
    vec![
        Box::new(Gallery::new()), // 1
        Box::new(Star::new()),    // 2
        Box::new(Bounce::new()),  // 3
    ]
}

/// HSV to RGB color conversion
/// h: 0-360, s: 0-1, v: 0-1
pub fn hsv(h: f32, s: f32, v: f32, alpha: u8) -> Color {
    let c = v * s;
    let h_prime = h.rem_euclid(360.0) / 60.0;
    let x = c * (1.0 - ((h_prime % 2.0) - 1.0).abs());
    let m = v - c;

    let (r1, g1, b1) = match h_prime as i32 {
        0 => (c, x, 0.0),
        1 => (x, c, 0.0),
        2 => (0.0, c, x),
        3 => (0.0, x, c),
        4 => (x, 0.0, c),
        _ => (c, 0.0, x),
    };

    Color::rgba(
        ((r1 + m) * 255.0) as u8,
        ((g1 + m) * 255.0) as u8,
        ((b1 + m) * 255.0) as u8,
        alpha,
    )
}
