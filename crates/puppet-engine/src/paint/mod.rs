//! Paint model shared between the scene and the renderers.
//!
//! Only solid fills exist: every shape is drawn with the painter's
//! foreground color.

pub mod color;

pub use color::Color;
