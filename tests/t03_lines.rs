extern crate softraster;

use proptest::prelude::*;

use softraster::{aliased_line, wu_line, Canvas, Color, LineMode, Point, DARK_GRAY};

const SIZE: usize = 32;

fn wu_points(p1: Point, p2: Point) -> Vec<(i64, i64, f64)> {
    let mut v = Vec::new();
    wu_line(p1, p2, |x, y, c| v.push((x, y, c)));
    v
}

fn render(p1: Point, p2: Point, mode: LineMode) -> Vec<u32> {
    let mut px = vec![0u32; SIZE * SIZE];
    {
        let mut canvas = Canvas::new(&mut px, SIZE, SIZE).unwrap();
        canvas.clear(DARK_GRAY);
        canvas.set_line_mode(mode);
        canvas.set_color(Color::new(250, 200, 10, 255));
        canvas.draw_line(p1, p2);
    }
    px
}

fn point() -> impl Strategy<Value = Point> {
    (0..SIZE as i64, 0..SIZE as i64).prop_map(|(x, y)| Point::new(x, y))
}

#[test]
fn t03_horizontal_and_vertical() {
    let white = Color::white();
    for &mode in [LineMode::AntiAliased, LineMode::Aliased].iter() {
        let mut px = vec![0u32; SIZE * SIZE];
        let mut canvas = Canvas::new(&mut px, SIZE, SIZE).unwrap();
        canvas.clear(DARK_GRAY);
        canvas.set_line_mode(mode);
        canvas.set_color(white);
        canvas.draw_line(Point::new(3, 5), Point::new(20, 5));
        canvas.draw_line(Point::new(25, 30), Point::new(25, 2));
        for y in 0..SIZE {
            for x in 0..SIZE {
                let on = (y == 5 && (3..=20).contains(&x)) || (x == 25 && (2..=30).contains(&y));
                let want = if on { white } else { DARK_GRAY };
                assert_eq!(canvas.get(x, y), want, "{:?} ({},{})", mode, x, y);
            }
        }
    }
}

#[test]
fn t03_shallow_line_coverage() {
    // y = x / 4
    let pts = wu_points(Point::new(0, 0), Point::new(8, 2));
    assert_eq!(pts.len(), 18);
    assert_eq!(pts[0], (0, 0, 1.0));
    assert_eq!(pts[2], (1, 0, 0.75));
    assert_eq!(pts[3], (1, 1, 0.25));
    assert_eq!(pts[16], (8, 2, 1.0));
}

#[test]
fn t03_zero_length() {
    assert!(wu_points(Point::new(4, 4), Point::new(4, 4)).is_empty());
    let mut n = 0;
    aliased_line(Point::new(4, 4), Point::new(4, 4), |_, _| n += 1);
    assert_eq!(n, 0);
    assert_eq!(render(Point::new(4, 4), Point::new(4, 4), LineMode::AntiAliased), render(Point::new(0, 0), Point::new(0, 0), LineMode::Aliased));
}

proptest! {
    #[test]
    fn wu_is_symmetric(a in point(), b in point()) {
        prop_assert_eq!(wu_points(a, b), wu_points(b, a));
        prop_assert_eq!(render(a, b, LineMode::AntiAliased), render(b, a, LineMode::AntiAliased));
    }

    #[test]
    fn aliased_is_symmetric(a in point(), b in point()) {
        prop_assert_eq!(render(a, b, LineMode::Aliased), render(b, a, LineMode::Aliased));
    }

    #[test]
    fn coverage_sums_to_one(a in point(), b in point()) {
        let pts = wu_points(a, b);
        prop_assert_eq!(pts.len() % 2, 0);
        for pair in pts.chunks(2) {
            prop_assert!((pair[0].2 + pair[1].2 - 1.0).abs() < 1e-9);
            prop_assert!(pair[0].2 > 0.0);
        }
    }

    #[test]
    fn endpoints_are_exact(a in point(), b in point()) {
        prop_assume!(a != b);
        let px = render(a, b, LineMode::AntiAliased);
        let color = Color::new(250, 200, 10, 255).0;
        prop_assert_eq!(px[a.y as usize * SIZE + a.x as usize], color);
        prop_assert_eq!(px[b.y as usize * SIZE + b.x as usize], color);
    }
}
