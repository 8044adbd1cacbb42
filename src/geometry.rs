//! Points and rectangles

/// Integer pixel coordinate
#[derive(Debug, Default, Copy, Clone, PartialEq, Eq, Hash)]
pub struct Point {
    pub x: i64,
    pub y: i64,
}

impl Point {
    pub const fn new(x: i64, y: i64) -> Self {
        Point { x, y }
    }
}

impl From<(i64, i64)> for Point {
    fn from(p: (i64, i64)) -> Self {
        Point::new(p.0, p.1)
    }
}

/// Axis-aligned rectangle, `w` by `h` pixels with its corner at (`x`,`y`)
#[derive(Debug, Default, Copy, Clone, PartialEq, Eq, Hash)]
pub struct Rect {
    pub x: i64,
    pub y: i64,
    pub w: i64,
    pub h: i64,
}

impl Rect {
    pub const fn new(x: i64, y: i64, w: i64, h: i64) -> Self {
        Rect { x, y, w, h }
    }
    /// One past the last column
    pub const fn right(&self) -> i64 {
        self.x + self.w
    }
    /// One past the last row
    pub const fn bottom(&self) -> i64 {
        self.y + self.h
    }
    pub const fn is_empty(&self) -> bool {
        self.w <= 0 || self.h <= 0
    }
    pub const fn contains(&self, p: Point) -> bool {
        p.x >= self.x && p.x < self.right() && p.y >= self.y && p.y < self.bottom()
    }
}
