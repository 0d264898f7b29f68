//! Shape geometry and the bounds rules applied to shape centers.

use puppet_engine::coords::Vec2;

/// Integer point in window space.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq)]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

impl Point {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    pub fn translate(self, dx: i32, dy: i32) -> Self {
        Self::new(self.x.saturating_add(dx), self.y.saturating_add(dy))
    }

    /// Keeps a shape of half-extent `extent` inside `width x height`.
    pub fn clamp_within(self, extent: i32, width: i32, height: i32) -> Self {
        Self::new(clamp_axis(self.x, extent, width), clamp_axis(self.y, extent, height))
    }

    /// Pulls the center back in after a resize, touching only axes that now
    /// lie outside the window.
    pub fn refit(self, extent: i32, width: i32, height: i32) -> Self {
        Self::new(refit_axis(self.x, extent, width), refit_axis(self.y, extent, height))
    }

    pub fn to_vec2(self) -> Vec2 {
        Vec2::from_i32(self.x, self.y)
    }
}

/// `extent <= c <= size - extent`, never below zero.
///
/// The lower bound is applied first, so a window narrower than the shape
/// pins the center at `size - extent`.
pub fn clamp_axis(c: i32, extent: i32, size: i32) -> i32 {
    let mut c = c;
    if c < extent {
        c = extent;
    }
    let upper = size.saturating_sub(extent);
    if c > upper {
        c = upper;
    }
    c.max(0)
}

/// Resize rule: a center past the new edge moves to `size - extent`.
pub fn refit_axis(c: i32, extent: i32, size: i32) -> i32 {
    if c > size {
        size.saturating_sub(extent).max(0)
    } else {
        c
    }
}

/// Body vertices for a center and half-extent: top, bottom-left, bottom-right.
pub fn triangle(center: Point, size: i32) -> [Point; 3] {
    let Point { x, y } = center;
    [
        Point::new(x, y - size),
        Point::new(x - size, y + size),
        Point::new(x + size, y + size),
    ]
}
