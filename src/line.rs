//! Line rasterization
//!
//! Two algorithms turn a segment into pixel writes:
//!
//!   - [`wu_line`]: anti-aliased, two weighted pixels per step along the
//!     major axis ([Xiaolin Wu's line algorithm](https://en.wikipedia.org/wiki/Xiaolin_Wu%27s_line_algorithm))
//!   - [`aliased_line`]: one pixel per step, minor axis from the slope,
//!     truncated
//!
//! Both put the endpoints in a canonical order first, so A→B and B→A touch
//! the same pixels in the same sequence.

use crate::canvas::Canvas;
use crate::geometry::Point;

/// Which line algorithm [`draw_line`] uses
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum LineMode {
    /// Single pixel per step, no blending
    Aliased,
    /// Coverage-blended edges
    AntiAliased,
}

impl Default for LineMode {
    fn default() -> Self {
        LineMode::AntiAliased
    }
}

/// Draw a line in the canvas draw color using its [`LineMode`]
pub fn draw_line(canvas: &mut Canvas<'_>, p1: Point, p2: Point) {
    match canvas.line_mode() {
        LineMode::AntiAliased => draw_line_aa(canvas, p1, p2),
        LineMode::Aliased => draw_line_aliased(canvas, p1, p2),
    }
}

/// Draw an anti-aliased line from `p1` to `p2`
///
/// Each pixel is composited against what is already in the canvas.
/// Zero-coverage writes are skipped.
///
///     use softraster::{Canvas, Color, Point};
///
///     let mut px = vec![Color::black().0; 4 * 4];
///     let mut canvas = Canvas::new(&mut px, 4, 4).unwrap();
///     canvas.set_color(Color::white());
///     softraster::draw_line_aa(&mut canvas, Point::new(0, 0), Point::new(3, 1));
///     assert_eq!(canvas.get(0, 0), Color::white());
///     assert_eq!(canvas.get(3, 1), Color::white());
///
pub fn draw_line_aa(canvas: &mut Canvas<'_>, p1: Point, p2: Point) {
    wu_line(p1, p2, |x, y, coverage| {
        if coverage > 0.0 {
            canvas.blend_pixel(x as usize, y as usize, coverage);
        }
    });
}

/// Draw a line from `p1` to `p2` without anti-aliasing
pub fn draw_line_aliased(canvas: &mut Canvas<'_>, p1: Point, p2: Point) {
    let color = canvas.color();
    aliased_line(p1, p2, |x, y| canvas.put(x as usize, y as usize, color));
}

/// Fractional part of an f64 number
fn fpart(x: f64) -> f64 {
    x - x.floor()
}
/// Compute 1.0 - fractional part of an f64 number (remainder)
fn rfpart(x: f64) -> f64 {
    1.0 - fpart(x)
}
/// Compute integral part of an f64 number
fn ipart(x: f64) -> f64 {
    x.floor()
}

/// Walk a segment, reporting `(x, y, coverage)` for each pixel touched
///
/// Steep segments are transposed so the loop always steps along the major
/// axis in increasing order. At every step the exact minor coordinate is
/// split into an integer pixel and a fraction `f`; the pixel gets `1 - f`
/// and its neighbour one further along the minor axis gets `f`.
/// A zero-length segment reports nothing.
pub fn wu_line<F>(p1: Point, p2: Point, mut plot: F)
where
    F: FnMut(i64, i64, f64),
{
    let steep = (p2.y - p1.y).abs() > (p2.x - p1.x).abs();
    let (x1, y1, x2, y2) = if steep { (p1.y, p1.x, p2.y, p2.x) } else { (p1.x, p1.y, p2.x, p2.y) };
    let (x1, y1, x2, y2) = if x2 < x1 { (x2, y2, x1, y1) } else { (x1, y1, x2, y2) };
    let dx = x2 - x1;
    let dy = y2 - y1;
    if dx == 0 {
        return;
    }
    for x in x1..=x2 {
        // Integer numerator keeps endpoints exact
        let y = y1 as f64 + (dy * (x - x1)) as f64 / dx as f64;
        let yp = ipart(y) as i64;
        let (near, far) = (rfpart(y), fpart(y));
        if steep {
            plot(yp, x, near);
            plot(yp + 1, x, far);
        } else {
            plot(x, yp, near);
            plot(x, yp + 1, far);
        }
    }
}

/// Walk a segment one pixel per major-axis step, reporting `(x, y)`
///
/// Vertical and horizontal segments are walked directly; others step along
/// the axis with the larger delta and truncate the slope-accumulated minor
/// coordinate. A zero-length segment reports nothing.
pub fn aliased_line<F>(p1: Point, p2: Point, mut plot: F)
where
    F: FnMut(i64, i64),
{
    let dx = p2.x - p1.x;
    let dy = p2.y - p1.y;
    if dx == 0 && dy == 0 {
        return;
    }
    if dx == 0 {
        for y in p1.y.min(p2.y)..=p1.y.max(p2.y) {
            plot(p1.x, y);
        }
        return;
    }
    if dy == 0 {
        for x in p1.x.min(p2.x)..=p1.x.max(p2.x) {
            plot(x, p1.y);
        }
        return;
    }
    let steep = dy.abs() > dx.abs();
    let (x1, y1, x2, y2) = if steep { (p1.y, p1.x, p2.y, p2.x) } else { (p1.x, p1.y, p2.x, p2.y) };
    let (x1, y1, x2, y2) = if x2 < x1 { (x2, y2, x1, y1) } else { (x1, y1, x2, y2) };
    let (dx, dy) = (x2 - x1, y2 - y1);
    for x in x1..=x2 {
        let y = (y1 as f64 + (dy * (x - x1)) as f64 / dx as f64) as i64;
        if steep {
            plot(y, x);
        } else {
            plot(x, y);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn wu_points(p1: Point, p2: Point) -> Vec<(i64, i64, f64)> {
        let mut v = vec![];
        wu_line(p1, p2, |x, y, c| v.push((x, y, c)));
        v
    }

    #[test]
    fn zero_length_is_noop() {
        let p = Point::new(3, 3);
        assert!(wu_points(p, p).is_empty());
        let mut n = 0;
        aliased_line(p, p, |_, _| n += 1);
        assert_eq!(n, 0);
    }

    #[test]
    fn two_writes_per_step() {
        let v = wu_points(Point::new(0, 0), Point::new(10, 3));
        assert_eq!(v.len(), 2 * 11);
        for pair in v.chunks(2) {
            assert_eq!(pair[0].0, pair[1].0);
            assert_eq!(pair[0].1 + 1, pair[1].1);
            assert!((pair[0].2 + pair[1].2 - 1.0).abs() < 1e-12);
        }
    }

    #[test]
    fn steep_steps_along_y() {
        let v = wu_points(Point::new(2, 0), Point::new(3, 5));
        let ys: Vec<_> = v.iter().step_by(2).map(|p| p.1).collect();
        assert_eq!(ys, vec![0, 1, 2, 3, 4, 5]);
        // neighbour is offset along x
        assert_eq!(v[1].0, v[0].0 + 1);
    }

    #[test]
    fn endpoints_have_full_coverage() {
        let v = wu_points(Point::new(1, 1), Point::new(6, 4));
        assert_eq!(v.first().map(|p| (p.0, p.1, p.2)), Some((1, 1, 1.0)));
        let last = v[v.len() - 2];
        assert_eq!((last.0, last.1, last.2), (6, 4, 1.0));
    }

    #[test]
    fn aliased_dominant_axis() {
        let mut v = vec![];
        aliased_line(Point::new(0, 0), Point::new(2, 6), |x, y| v.push((x, y)));
        assert_eq!(v, vec![(0, 0), (0, 1), (0, 2), (1, 3), (1, 4), (1, 5), (2, 6)]);
    }

    #[test]
    fn aliased_reverse_matches() {
        let (a, b) = (Point::new(9, 1), Point::new(0, 4));
        let mut f = vec![];
        let mut r = vec![];
        aliased_line(a, b, |x, y| f.push((x, y)));
        aliased_line(b, a, |x, y| r.push((x, y)));
        assert_eq!(f, r);
    }
}
