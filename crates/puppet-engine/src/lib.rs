//! Puppet engine crate.
//!
//! Owns the display connection, the window, the GPU drawing context and the
//! polling loop. The demo binary only implements [`core::App`].

pub mod core;
pub mod device;
pub mod input;
pub mod window;

pub mod coords;
pub mod logging;
pub mod paint;
pub mod render;
pub mod scene;
