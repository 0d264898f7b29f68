use crate::coords::Vec2;
use crate::core::Canvas;
use crate::paint::Color;

use super::DrawList;

/// [`Canvas`] that records into a [`DrawList`] with a fixed foreground color.
///
/// Degenerate input (fewer than three points, non-finite coordinates,
/// non-positive radius) is dropped here so renderers never see it.
pub struct Painter<'a> {
    list: &'a mut DrawList,
    foreground: Color,
}

impl<'a> Painter<'a> {
    pub fn new(list: &'a mut DrawList, foreground: Color) -> Self {
        Self { list, foreground }
    }
}

impl Canvas for Painter<'_> {
    fn clear(&mut self) {
        self.list.clear();
    }

    fn fill_polygon(&mut self, points: &[Vec2]) {
        if points.len() < 3 || !points.iter().all(|p| p.is_finite()) {
            log::trace!("skipping degenerate polygon ({} points)", points.len());
            return;
        }
        self.list.push_polygon(points, self.foreground);
    }

    fn fill_circle(&mut self, center: Vec2, radius: f32) {
        if !radius.is_finite() || radius <= 0.0 || !center.is_finite() {
            log::trace!("skipping degenerate circle (r = {radius})");
            return;
        }
        self.list.push_circle(center, radius, self.foreground);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scene::shapes::{CircleCmd, PolygonCmd};
    use crate::scene::DrawCmd;

    fn tri() -> [Vec2; 3] {
        [Vec2::new(10.0, 0.0), Vec2::new(0.0, 20.0), Vec2::new(20.0, 20.0)]
    }

    #[test]
    fn fills_record_in_call_order_with_foreground() {
        let mut list = DrawList::new();
        let mut painter = Painter::new(&mut list, Color::BLACK);

        painter.fill_polygon(&tri());
        painter.fill_circle(Vec2::new(5.0, 5.0), 3.0);

        assert_eq!(
            list.items(),
            &[
                DrawCmd::Polygon(PolygonCmd::new(tri().to_vec(), Color::BLACK)),
                DrawCmd::Circle(CircleCmd::new(Vec2::new(5.0, 5.0), 3.0, Color::BLACK)),
            ]
        );
    }

    #[test]
    fn clear_discards_previous_frame() {
        let mut list = DrawList::new();
        list.push_circle(Vec2::new(1.0, 1.0), 1.0, Color::WHITE);

        let mut painter = Painter::new(&mut list, Color::BLACK);
        painter.clear();
        painter.fill_circle(Vec2::new(2.0, 2.0), 1.0);

        assert_eq!(list.items().len(), 1);
        assert!(matches!(&list.items()[0], DrawCmd::Circle(c) if c.center == Vec2::new(2.0, 2.0)));
    }

    #[test]
    fn degenerate_shapes_are_dropped() {
        let mut list = DrawList::new();
        let mut painter = Painter::new(&mut list, Color::BLACK);

        painter.fill_polygon(&tri()[..2]);
        painter.fill_polygon(&[Vec2::new(f32::NAN, 0.0), Vec2::new(1.0, 1.0), Vec2::new(2.0, 0.0)]);
        painter.fill_circle(Vec2::new(1.0, 1.0), 0.0);
        painter.fill_circle(Vec2::new(1.0, 1.0), f32::NAN);

        assert!(list.items().is_empty());
    }
}
