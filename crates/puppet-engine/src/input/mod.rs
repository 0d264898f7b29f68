//! Input subsystem.
//!
//! Public API is platform-agnostic and does not expose winit types.
//! `platform::winit` translates winit keys into [`Key`].

pub(crate) mod platform;
mod types;

pub use types::Key;
