//! Shape renderers.
//!
//! Paint order across renderers is fixed by the caller: polygons are drawn
//! before circles.

mod common;

pub mod circle;
pub mod polygon;
