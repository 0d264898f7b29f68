//! Display connection, window and the polling loop.
//!
//! `Display` owns the winit `EventLoop` and `Window` and wires them to the
//! GPU layer; `Runtime` drives any [`Platform`](crate::core::Platform).

mod display;
mod runtime;

pub use display::Display;
pub use runtime::{Runtime, RuntimeConfig};

pub use winit::dpi::{LogicalPosition, LogicalSize};
