use crate::coords::Vec2;
use crate::paint::Color;
use crate::scene::{DrawCmd, DrawList};

/// Filled convex polygon, vertices in logical pixels.
#[derive(Debug, Clone, PartialEq)]
pub struct PolygonCmd {
    pub points: Vec<Vec2>,
    pub color: Color,
}

impl PolygonCmd {
    #[inline]
    pub fn new(points: Vec<Vec2>, color: Color) -> Self {
        Self { points, color }
    }
}

impl DrawList {
    /// Records a filled convex polygon.
    #[inline]
    pub fn push_polygon(&mut self, points: &[Vec2], color: Color) {
        self.push(DrawCmd::Polygon(PolygonCmd::new(points.to_vec(), color)));
    }
}
