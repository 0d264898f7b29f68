//! Core engine-facing contracts.
//!
//! This module defines the interface between the runtime (display + polling
//! loop) and the application, plus the drawing primitives the application
//! sees during a redraw.

mod app;
mod canvas;
mod platform;
mod session;

pub use app::{App, AppControl};
pub use canvas::Canvas;
pub use platform::{Platform, PlatformEvent};
pub use session::Session;
