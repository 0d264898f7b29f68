use crate::core::{AppControl, Canvas};
use crate::input::Key;

/// Window-system events the runtime hands to the application.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum PlatformEvent {
    /// Part of the window was damaged and must be repainted.
    Exposed,

    /// New logical window size.
    Resized { width: u32, height: u32 },

    /// The window manager's close action for our window.
    CloseRequested,

    /// A key went down (auto-repeat included).
    KeyPressed(Key),
}

/// Display connection + window + drawing context, as seen by the runtime loop.
///
/// The three teardown steps are separate so [`Session`](super::Session) can
/// enforce their order.
pub trait Platform {
    /// Returns the next pending event without blocking.
    fn poll_event(&mut self) -> Option<PlatformEvent>;

    /// Runs `draw` against a fresh canvas and presents the result.
    ///
    /// `draw` is not called when the frame has to be skipped. Returns
    /// [`AppControl::Exit`] when drawing can no longer succeed.
    fn render<F>(&mut self, draw: F) -> AppControl
    where
        F: FnOnce(&mut dyn Canvas);

    fn release_context(&mut self);
    fn destroy_window(&mut self);
    fn close_connection(&mut self);
}
