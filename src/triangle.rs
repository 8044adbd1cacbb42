//! Triangle scan conversion
//!
//! Vertices are sorted by y into `top`, `mid` and `bottom`. The long edge
//! `top–bottom` is cut at `mid.y` by a fourth point, the midpoint, which
//! splits the triangle into an upper half with a flat bottom and a lower
//! half with a flat top. Each half is filled row by row between the x
//! positions of its two edges at that row.
//!
//! ```text
//!     top
//!      |\
//!      | \  upper half: rows [top.y, mid.y)
//!  midpoint--mid
//!      |   /  lower half: rows [mid.y, bottom.y]
//!      |  /
//!     bottom
//! ```
//!
//! Interiors are filled solid; only stroked edges are anti-aliased.

use log::trace;

use crate::canvas::Canvas;
use crate::geometry::Point;
use crate::line::draw_line;

/// Edge expressed as `x = slope * y + intercept`
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct LineEquation {
    pub slope: f64,
    pub intercept: f64,
}

impl LineEquation {
    /// Stand-in for a zero-length segment; never an actual edge
    pub const IDENTITY: LineEquation = LineEquation { slope: 1.0, intercept: 0.0 };

    /// x position of the edge on row `y`
    pub fn x_at(&self, y: f64) -> f64 {
        self.slope * y + self.intercept
    }
}

/// Slope and intercept of the edge from `p1` to `p2`, with x as a function of y
///
/// A segment with no extent on either axis gives [`LineEquation::IDENTITY`].
/// A horizontal segment has no x-of-y form; it gives the constant `p1.x`,
/// which is exact on its only row at the one end that matters for a span.
pub fn line_equation(p1: Point, p2: Point) -> LineEquation {
    let dx = (p2.x - p1.x) as f64;
    let dy = (p2.y - p1.y) as f64;
    if dy == 0.0 {
        if dx == 0.0 {
            return LineEquation::IDENTITY;
        }
        return LineEquation { slope: 0.0, intercept: p1.x as f64 };
    }
    let slope = dx / dy;
    LineEquation { slope, intercept: p1.x as f64 - slope * p1.y as f64 }
}

fn sort_by_y(a: Point, b: Point, c: Point) -> (Point, Point, Point) {
    let mut v = [a, b, c];
    v.sort_by_key(|p| p.y);
    (v[0], v[1], v[2])
}

/// Report `(y, left, right)` for every row a triangle covers
///
/// Each row from `top.y` to `bottom.y` is reported once with
/// `left <= right`. A triangle of zero height reports nothing.
pub fn triangle_spans<F>(a: Point, b: Point, c: Point, mut span: F)
where
    F: FnMut(i64, i64, i64),
{
    let (top, mid, bottom) = sort_by_y(a, b, c);
    if top.y == bottom.y {
        return;
    }
    // The midpoint lies on the long edge, so both halves share it
    let long = line_equation(top, bottom);
    let midpoint_x = long.x_at(mid.y as f64);
    trace!("triangle {:?} {:?} {:?} midpoint x {:.2}", top, mid, bottom, midpoint_x);

    let mut row = |y: i64, e1: &LineEquation, e2: &LineEquation| {
        let x1 = e1.x_at(y as f64).round() as i64;
        let x2 = e2.x_at(y as f64).round() as i64;
        span(y, x1.min(x2), x1.max(x2));
    };

    let upper = line_equation(top, mid);
    for y in top.y..mid.y {
        row(y, &long, &upper);
    }
    let lower = line_equation(mid, bottom);
    for y in mid.y..=bottom.y {
        row(y, &lower, &long);
    }
}

/// Fill the interior of a triangle with the canvas draw color
pub fn fill_triangle(canvas: &mut Canvas<'_>, a: Point, b: Point, c: Point) {
    triangle_spans(a, b, c, |y, left, right| {
        canvas.fill_span(y as usize, left as usize, right as usize);
    });
}

/// Stroke the three edges of a triangle with the line rasterizer
pub fn stroke_triangle(canvas: &mut Canvas<'_>, a: Point, b: Point, c: Point) {
    draw_line(canvas, a, b);
    draw_line(canvas, a, c);
    draw_line(canvas, b, c);
}

/// Fill a triangle, then stroke its edges
pub fn draw_triangle(canvas: &mut Canvas<'_>, a: Point, b: Point, c: Point) {
    fill_triangle(canvas, a, b, c);
    stroke_triangle(canvas, a, b, c);
}
