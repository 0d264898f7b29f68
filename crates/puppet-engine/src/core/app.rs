use super::canvas::Canvas;
use super::platform::PlatformEvent;

/// Control directive returned by app callbacks.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum AppControl {
    Continue,
    Exit,
}

/// Application contract driven by `window::Runtime`.
pub trait App {
    /// Called once per dispatched platform event.
    fn on_event(&mut self, event: &PlatformEvent) -> AppControl;

    /// Whether the next loop iteration should redraw before polling.
    fn needs_redraw(&self) -> bool;

    /// Issues the frame's drawing commands. Implementations clear their dirty
    /// flag here; if the platform skips the frame this is not called.
    fn redraw(&mut self, canvas: &mut dyn Canvas);
}
