extern crate softraster;

use softraster::{Canvas, Color, Point, DARK_GRAY, GREEN, RED};

#[test]
fn t00_end_to_end() {
    let (w, h) = (8, 8);
    let mut px = vec![0u32; w * h];
    let mut canvas = Canvas::new(&mut px, w, h).unwrap();

    canvas.clear(Color(0xff18_1818));
    canvas.set_color(RED);
    canvas.draw_line(Point::new(0, 0), Point::new(7, 7));

    for y in 0..h {
        for x in 0..w {
            let want = if x == y { RED } else { DARK_GRAY };
            assert_eq!(canvas.get(x, y), want, "pixel ({},{})", x, y);
        }
    }

    canvas.set_color(GREEN);
    canvas.fill_triangle(Point::new(0, 0), Point::new(7, 0), Point::new(0, 7));
    assert_eq!(canvas.get(1, 1), GREEN);
    assert_ne!(canvas.get(6, 6), GREEN);
    assert_eq!(canvas.get(6, 6), RED);
    assert_eq!(canvas.get(7, 7), RED);
}

#[test]
fn t00_end_to_end_padded() {
    let (w, h, stride) = (8, 8, 11);
    let mut px = vec![0u32; stride * h];
    {
        let mut canvas = Canvas::with_stride(&mut px, w, h, stride).unwrap();
        canvas.clear(DARK_GRAY);
        canvas.set_color(RED);
        canvas.draw_line(Point::new(7, 0), Point::new(0, 7));
        for i in 0..8 {
            assert_eq!(canvas.get(i, 7 - i), RED);
        }
    }
    for y in 0..h {
        assert!(px[y * stride + w..(y + 1) * stride].iter().all(|&p| p == 0));
    }
}
