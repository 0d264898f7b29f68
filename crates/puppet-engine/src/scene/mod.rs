//! Scene (draw stream) types.
//!
//! Responsibilities:
//! - store renderer-agnostic draw commands in paint order
//! - record [`Canvas`](crate::core::Canvas) calls through [`Painter`]
//! - keep shape-specific helpers isolated per shape file under `scene::shapes`

mod cmd;
mod list;
mod painter;

pub mod shapes;

pub use cmd::DrawCmd;
pub use list::DrawList;
pub use painter::Painter;
