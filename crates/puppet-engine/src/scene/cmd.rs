use crate::scene::shapes::circle::CircleCmd;
use crate::scene::shapes::polygon::PolygonCmd;

/// Renderer-agnostic draw command stream.
///
/// Adding a shape means: a payload under `scene::shapes`, a variant here and
/// a renderer under `render::shapes`.
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCmd {
    Polygon(PolygonCmd),
    Circle(CircleCmd),
}
