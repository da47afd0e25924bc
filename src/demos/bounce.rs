//! Bouncing translucent balls
//!
//! Balls bounce off the screen edges and jump to a new hue on each bounce.
//! Overlapping balls show the order-dependent alpha compositing.

use super::{hsv, Demo};
use softraster::{Point, Renderer, Vertex};

const BALL_COUNT: usize = 6;

struct Ball {
    x: f32,
    y: f32,
    vx: f32,
    vy: f32,
    radius: f32,
    hue: f32,
}

impl Ball {
    fn change_color(&mut self) {
        // Jump to a new hue on bounce
        self.hue = (self.hue + 45.0 + self.vx.abs() * 0.1) % 360.0;
    }
}

pub struct Bounce {
    balls: Vec<Ball>,
}

impl Bounce {
    pub fn new() -> Self {
        let balls = (0..BALL_COUNT)
            .map(|i| {
                let f = i as f32;
                Ball {
                    x: 60.0 + f * 70.0,
                    y: 60.0 + f * 35.0,
                    vx: 90.0 + f * 25.0,
                    vy: 70.0 - f * 30.0,
                    radius: 18.0 + f * 6.0,
                    hue: f * 60.0,
                }
            })
            .collect();
        Self { balls }
    }
}

impl Default for Bounce {
    fn default() -> Self {
        Self::new()
    }
}

impl Demo for Bounce {
    fn update(&mut self, dt: f32, width: u32, height: u32) {
        let screen_w = width as f32;
        let screen_h = height as f32;

        for ball in &mut self.balls {
            let new_x = ball.x + ball.vx * dt;
            let new_y = ball.y + ball.vy * dt;
            let mut bounced = false;

            if new_x - ball.radius <= 0.0 {
                ball.x = ball.radius;
                ball.vx = ball.vx.abs();
                bounced = true;
            } else if new_x + ball.radius >= screen_w {
                ball.x = screen_w - ball.radius;
                ball.vx = -ball.vx.abs();
                bounced = true;
            } else {
                ball.x = new_x;
            }

            if new_y - ball.radius <= 0.0 {
                ball.y = ball.radius;
                ball.vy = ball.vy.abs();
                bounced = true;
            } else if new_y + ball.radius >= screen_h {
                ball.y = screen_h - ball.radius;
                ball.vy = -ball.vy.abs();
                bounced = true;
            } else {
                ball.y = new_y;
            }

            if bounced {
                ball.change_color();
            }
        }
    }

    fn draw(&self, renderer: &mut Renderer) {
        for ball in &self.balls {
            let center = Point::new(ball.x as i32, ball.y as i32);
            renderer.draw_circle_fill(center, ball.radius as i32, hsv(ball.hue, 0.8, 1.0, 150));
            renderer.draw_circle(center, ball.radius as i32, hsv(ball.hue, 0.3, 1.0, 255));

            // Velocity whisker, fading out
            let tip = center.offset((ball.vx * 0.3) as i32, (ball.vy * 0.3) as i32);
            renderer.draw_line(
                Vertex::new(center, hsv(ball.hue, 0.2, 1.0, 255)),
                Vertex::new(tip, hsv(ball.hue, 0.2, 1.0, 0)),
            );
        }
    }

    fn name(&self) -> &str {
        "Bounce"
    }
}
