pub(crate) mod circle;
pub(crate) mod polygon;

pub use circle::CircleCmd;
pub use polygon::PolygonCmd;
