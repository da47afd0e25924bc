//! Software rasterizer with a replay-once draw-command buffer.
//!
//! Draw calls go to a [`Renderer`], which queues them as [`DrawCommand`]s.
//! At the end of a frame `Renderer::render` replays the queue into a
//! [`Bitmap`] and clears it. The bitmap is then handed to whatever presents
//! it on screen.
//!
//! ```
//! use softraster::{Bitmap, Color, Point, Rect, Renderer};
//!
//! let mut bitmap = Bitmap::with_size(64, 64);
//! let mut renderer = Renderer::new();
//! renderer.clear_screen(Color::BLACK);
//! renderer.draw_rect_fill(Rect::new(4, 4, 8, 8), Color::GREEN);
//! renderer.draw_circle(Point::new(32, 32), 10, Color::WHITE);
//! renderer.render(&mut bitmap);
//! assert_eq!(renderer.pending(), 0);
//! ```

mod bitmap;
mod color;
pub mod config;
mod geometry;
mod raster;
mod renderer;

pub use bitmap::Bitmap;
pub use color::{Color, Pixel};
pub use config::Config;
pub use geometry::{Point, Rect, Vertex};
pub use renderer::{DrawCommand, Renderer};
