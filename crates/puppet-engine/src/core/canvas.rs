use crate::coords::Vec2;

/// Drawing primitives available during a redraw.
///
/// Every fill uses the canvas' fixed foreground color; `clear` resets the
/// window to its background color.
pub trait Canvas {
    fn clear(&mut self);

    /// Fills a convex polygon given in logical pixels.
    fn fill_polygon(&mut self, points: &[Vec2]);

    /// Fills a full disc.
    fn fill_circle(&mut self, center: Vec2, radius: f32);
}
