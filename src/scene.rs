//! Demo frame
//!
//! The frame drawn by the `canvas` binary: a bouncing rectangle, a fan of
//! lines and one triangle over a dark background. Coordinates are laid out
//! for an 800x600 canvas.

use crate::canvas::Canvas;
use crate::color::{Color, BLUE, DARK_GRAY, GREEN, RED};
use crate::error::{Error, Result};
use crate::geometry::{Point, Rect};
use crate::motion::Sprite;

/// Smallest canvas the fixed primitives fit in
pub const MIN_WIDTH: usize = 601;
pub const MIN_HEIGHT: usize = 600;

const VELOCITY: f64 = 240.0;

const LINES: [(Point, Point, Color); 6] = [
    (Point::new(50, 50), Point::new(300, 333), BLUE),
    (Point::new(100, 400), Point::new(500, 400), RED),
    (Point::new(100, 400), Point::new(100, 599), RED),
    (Point::new(50, 50), Point::new(15, 333), BLUE),
    (Point::new(300, 40), Point::new(600, 60), GREEN),
    (Point::new(300, 60), Point::new(600, 40), BLUE),
];

const TRIANGLE: [Point; 3] = [Point::new(200, 200), Point::new(150, 300), Point::new(250, 250)];

#[derive(Debug, Clone)]
pub struct Scene {
    pub sprite: Sprite,
}

impl Default for Scene {
    fn default() -> Self {
        Scene { sprite: Sprite::new(Rect::new(0, 0, 100, 100), (VELOCITY, VELOCITY), RED) }
    }
}

impl Scene {
    /// Clear, advance the sprite by `dt` seconds and draw everything
    pub fn draw(&mut self, canvas: &mut Canvas<'_>, dt: f64) -> Result<()> {
        if canvas.width() < MIN_WIDTH || canvas.height() < MIN_HEIGHT {
            return Err(Error::Layout {
                width: MIN_WIDTH,
                height: MIN_HEIGHT,
                stride: canvas.stride(),
                len: canvas.stride() * canvas.height(),
            });
        }
        canvas.clear(DARK_GRAY);

        self.sprite.animate(dt, canvas.width() as i64, canvas.height() as i64);
        canvas.set_color(self.sprite.color);
        canvas.fill_rect(self.sprite.rect);

        for &(a, b, color) in LINES.iter() {
            canvas.set_color(color);
            canvas.draw_line(a, b);
        }

        canvas.set_color(GREEN);
        canvas.draw_triangle(TRIANGLE[0], TRIANGLE[1], TRIANGLE[2]);
        Ok(())
    }
}
