//! Canvas

use log::trace;

use crate::blend::alpha_composite;
use crate::color::Color;
use crate::error::{Error, Result};
use crate::fill::{fill, flip_rows};
use crate::geometry::{Point, Rect};
use crate::line::{self, LineMode};
use crate::triangle;
use crate::PixelData;

/// Pixel buffer with dimensions, row stride and a current draw color
///
/// The buffer is borrowed; it usually lives in an [`Arena`](crate::Arena).
/// Pixel (`x`,`y`) is stored at `y * stride + x`.
///
/// Coordinates passed to drawing operations must lie inside
/// `0 <= x < width, 0 <= y < height`. This is only checked by debug
/// assertions; clipping is the caller's job.
#[derive(Debug)]
pub struct Canvas<'a> {
    pixels: &'a mut [u32],
    width: usize,
    height: usize,
    stride: usize,
    color: Color,
    line_mode: LineMode,
}

impl<'a> Canvas<'a> {
    /// Canvas of `width` x `height` with no row padding
    pub fn new(pixels: &'a mut [u32], width: usize, height: usize) -> Result<Self> {
        Self::with_stride(pixels, width, height, width)
    }

    /// Canvas whose rows are `stride` pixels apart
    pub fn with_stride(pixels: &'a mut [u32], width: usize, height: usize, stride: usize) -> Result<Self> {
        let needed = match height {
            0 => Some(0),
            h => stride.checked_mul(h - 1).and_then(|n| n.checked_add(width)),
        };
        let fits = matches!(needed, Some(n) if n <= pixels.len());
        if stride < width || !fits {
            return Err(Error::Layout { width, height, stride, len: pixels.len() });
        }
        Ok(Canvas {
            pixels,
            width,
            height,
            stride,
            color: Color::white(),
            line_mode: LineMode::default(),
        })
    }

    pub fn width(&self) -> usize {
        self.width
    }
    pub fn height(&self) -> usize {
        self.height
    }
    /// Pixels per row, including padding
    pub fn stride(&self) -> usize {
        self.stride
    }
    /// Current draw color
    pub fn color(&self) -> Color {
        self.color
    }
    pub fn set_color(&mut self, color: Color) {
        self.color = color;
    }
    pub fn line_mode(&self) -> LineMode {
        self.line_mode
    }
    /// Choose between anti-aliased lines and the aliased fast path
    pub fn set_line_mode(&mut self, mode: LineMode) {
        self.line_mode = mode;
    }

    #[inline]
    fn index(&self, x: usize, y: usize) -> usize {
        debug_assert!(x < self.width, "x {} >= width {}", x, self.width);
        debug_assert!(y < self.height, "y {} >= height {}", y, self.height);
        y * self.stride + x
    }

    /// Color of pixel (`x`,`y`)
    pub fn get(&self, x: usize, y: usize) -> Color {
        Color(self.pixels[self.index(x, y)])
    }

    /// Overwrite pixel (`x`,`y`) with `c`
    pub fn put(&mut self, x: usize, y: usize, c: Color) {
        let i = self.index(x, y);
        self.pixels[i] = c.0;
    }

    /// Composite the draw color over pixel (`x`,`y`) with `coverage`
    pub fn blend_pixel(&mut self, x: usize, y: usize, coverage: f64) {
        let i = self.index(x, y);
        self.pixels[i] = alpha_composite(self.color, Color(self.pixels[i]), coverage).0;
    }

    /// Row `y`, visible pixels only
    pub fn row(&self, y: usize) -> &[u32] {
        let start = self.index(0, y);
        &self.pixels[start..start + self.width]
    }

    /// Set every visible pixel to `color`
    pub fn clear(&mut self, color: Color) {
        if self.stride == self.width {
            let n = self.width * self.height;
            fill(&mut self.pixels[..n], color.0);
        } else {
            for y in 0..self.height {
                let start = y * self.stride;
                fill(&mut self.pixels[start..start + self.width], color.0);
            }
        }
    }

    /// Solid run from `x0` to `x1` inclusive on row `y` with the draw color
    pub fn fill_span(&mut self, y: usize, x0: usize, x1: usize) {
        let start = self.index(x0, y);
        let end = self.index(x1, y);
        fill(&mut self.pixels[start..=end], self.color.0);
    }

    /// Solid rectangle in the draw color
    pub fn fill_rect(&mut self, r: Rect) {
        if r.is_empty() {
            return;
        }
        trace!("fill_rect {:?}", r);
        for y in r.y..r.bottom() {
            self.fill_span(y as usize, r.x as usize, (r.right() - 1) as usize);
        }
    }

    /// Line from `p1` to `p2` using the current line mode
    pub fn draw_line(&mut self, p1: Point, p2: Point) {
        line::draw_line(self, p1, p2);
    }

    /// Solid triangle interior
    pub fn fill_triangle(&mut self, a: Point, b: Point, c: Point) {
        triangle::fill_triangle(self, a, b, c);
    }

    /// Triangle edges only
    pub fn stroke_triangle(&mut self, a: Point, b: Point, c: Point) {
        triangle::stroke_triangle(self, a, b, c);
    }

    /// Solid triangle with stroked edges
    pub fn draw_triangle(&mut self, a: Point, b: Point, c: Point) {
        triangle::draw_triangle(self, a, b, c);
    }

    /// Reverse the row order in place, as done before a texture upload
    pub fn flip_vertical(&mut self) {
        flip_rows(&mut *self.pixels, self.width, self.height, self.stride);
    }
}

impl<'a> PixelData for Canvas<'a> {
    fn pixeldata(&self) -> &[u32] {
        &*self.pixels
    }
    fn width(&self) -> usize {
        self.width
    }
    fn height(&self) -> usize {
        self.height
    }
    fn stride(&self) -> usize {
        self.stride
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color::{DARK_GRAY, RED};

    #[test]
    fn layout_checks() {
        let mut px = vec![0u32; 10];
        assert!(Canvas::new(&mut px, 5, 2).is_ok());
        assert!(Canvas::new(&mut px, 5, 3).is_err());
        assert!(Canvas::with_stride(&mut px, 4, 2, 6).is_ok());
        assert!(Canvas::with_stride(&mut px, 4, 2, 3).is_err());
        assert!(Canvas::new(&mut px, 0, 0).is_ok());
    }

    #[test]
    fn clear_skips_padding() {
        let mut px = vec![0u32; 3 * 5];
        {
            let mut c = Canvas::with_stride(&mut px, 3, 3, 5).unwrap();
            c.clear(DARK_GRAY);
            assert_eq!(c.row(2), &[DARK_GRAY.0; 3]);
        }
        assert_eq!(&px[3..5], &[0, 0]);
        assert_eq!(&px[8..10], &[0, 0]);
    }

    #[test]
    fn fill_rect_covers_exactly() {
        let mut px = vec![0u32; 6 * 5];
        let mut c = Canvas::new(&mut px, 6, 5).unwrap();
        c.set_color(RED);
        c.fill_rect(Rect::new(1, 1, 3, 2));
        for y in 0..5 {
            for x in 0..6 {
                let inside = Rect::new(1, 1, 3, 2).contains(Point::new(x as i64, y as i64));
                let want = if inside { RED } else { Color(0) };
                assert_eq!(c.get(x, y), want, "({},{})", x, y);
            }
        }
    }

    #[test]
    fn blend_pixel_uses_draw_color() {
        let mut px = vec![Color::black().0; 1];
        let mut c = Canvas::new(&mut px, 1, 1).unwrap();
        c.set_color(Color::new(200, 0, 0, 255));
        c.blend_pixel(0, 0, 0.5);
        assert_eq!(c.get(0, 0), Color::new(100, 0, 0, 255));
    }

    #[test]
    fn flip_vertical_swaps_rows() {
        let mut px = vec![1, 1, 2, 2];
        let mut c = Canvas::new(&mut px, 2, 2).unwrap();
        c.flip_vertical();
        assert_eq!(c.row(0), &[2, 2]);
        assert_eq!(c.row(1), &[1, 1]);
    }
}
