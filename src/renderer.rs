//! Draw-command buffer
//!
//! Draw calls are recorded as `DrawCommand`s and only touch pixels when the
//! frame is rendered. `render()` replays the queue in insertion order and
//! always leaves it empty, so nothing leaks into the next frame.

use log::{trace, warn};

use crate::bitmap::Bitmap;
use crate::color::{Color, Pixel};
use crate::geometry::{Point, Rect, Vertex};

/// One recorded draw call. The set of commands is closed.
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCommand {
    ClearScreen {
        color: Color,
    },
    DrawPoint {
        position: Point,
        color: Color,
    },
    DrawLine {
        a: Vertex,
        b: Vertex,
    },
    DrawRect {
        rect: Rect,
        color: Color,
        filled: bool,
    },
    DrawPolygon {
        vertices: Vec<Point>,
        color: Color,
        filled: bool,
    },
    DrawCircle {
        center: Point,
        radius: i32,
        color: Color,
        filled: bool,
    },
}

impl DrawCommand {
    /// Rasterize this command into `bitmap`
    fn execute(&self, bitmap: &mut Bitmap) {
        match self {
            DrawCommand::ClearScreen { color } => bitmap.clear(Pixel::from(*color)),
            DrawCommand::DrawPoint { position, color } => bitmap.put_point(*position, *color),
            DrawCommand::DrawLine { a, b } => bitmap.draw_line(*a, *b),
            DrawCommand::DrawRect {
                rect,
                color,
                filled,
            } => {
                if *filled {
                    bitmap.fill_rect(*rect, *color);
                } else {
                    bitmap.draw_rect(*rect, *color);
                }
            },
            DrawCommand::DrawPolygon {
                vertices,
                color,
                filled,
            } => {
                if *filled {
                    bitmap.fill_polygon(vertices, *color);
                } else {
                    bitmap.draw_polygon(vertices, *color);
                }
            },
            DrawCommand::DrawCircle {
                center,
                radius,
                color,
                filled,
            } => {
                if *filled {
                    bitmap.fill_circle(*center, *radius, *color);
                } else {
                    bitmap.draw_circle(*center, *radius, *color);
                }
            },
        }
    }
}

/// Records draw calls for one frame and replays them on `render()`.
///
/// The only state kept between frames is the pending queue, which is
/// empty after every render.
#[derive(Debug, Default)]
pub struct Renderer {
    commands: Vec<DrawCommand>,
    rejected: usize,
}

impl Renderer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of queued commands
    pub fn pending(&self) -> usize {
        self.commands.len()
    }

    /// Queued commands in replay order
    pub fn commands(&self) -> &[DrawCommand] {
        &self.commands
    }

    /// Draw calls dropped as malformed since the last render
    pub fn rejected(&self) -> usize {
        self.rejected
    }

    pub fn clear_screen(&mut self, color: Color) {
        self.commands.push(DrawCommand::ClearScreen { color });
    }

    pub fn draw_point(&mut self, vertex: Vertex) {
        self.commands.push(DrawCommand::DrawPoint {
            position: vertex.position,
            color: vertex.color,
        });
    }

    pub fn draw_line(&mut self, a: Vertex, b: Vertex) {
        self.commands.push(DrawCommand::DrawLine { a, b });
    }

    pub fn draw_rect(&mut self, rect: Rect, color: Color) {
        self.commands.push(DrawCommand::DrawRect {
            rect,
            color,
            filled: false,
        });
    }

    pub fn draw_rect_fill(&mut self, rect: Rect, color: Color) {
        self.commands.push(DrawCommand::DrawRect {
            rect,
            color,
            filled: true,
        });
    }

    pub fn draw_polygon(&mut self, vertices: &[Point], color: Color) {
        self.push_polygon(vertices, color, false);
    }

    pub fn draw_polygon_fill(&mut self, vertices: &[Point], color: Color) {
        self.push_polygon(vertices, color, true);
    }

    pub fn draw_triangle(&mut self, a: Point, b: Point, c: Point, color: Color) {
        self.push_polygon(&[a, b, c], color, false);
    }

    pub fn draw_triangle_fill(&mut self, a: Point, b: Point, c: Point, color: Color) {
        self.push_polygon(&[a, b, c], color, true);
    }

    pub fn draw_circle(&mut self, center: Point, radius: i32, color: Color) {
        self.commands.push(DrawCommand::DrawCircle {
            center,
            radius,
            color,
            filled: false,
        });
    }

    pub fn draw_circle_fill(&mut self, center: Point, radius: i32, color: Color) {
        self.commands.push(DrawCommand::DrawCircle {
            center,
            radius,
            color,
            filled: true,
        });
    }

    /// Polygons need at least three vertices; anything less is dropped with a warning
    fn push_polygon(&mut self, vertices: &[Point], color: Color, filled: bool) {
        if vertices.len() < 3 {
            warn!(
                "Renderer: dropping polygon with {} vertices (need at least 3)",
                vertices.len()
            );
            self.rejected += 1;
            return;
        }
        self.commands.push(DrawCommand::DrawPolygon {
            vertices: vertices.to_vec(),
            color,
            filled,
        });
    }

    /// Replay every queued command into `bitmap`, then empty the queue.
    /// Returns the number of commands replayed.
    pub fn render(&mut self, bitmap: &mut Bitmap) -> usize {
        // Taken up front so the queue is empty even if replay unwinds
        let commands = std::mem::take(&mut self.commands);
        self.rejected = 0;

        for command in &commands {
            command.execute(bitmap);
        }
        trace!("Renderer: replayed {} commands", commands.len());
        commands.len()
    }
}
