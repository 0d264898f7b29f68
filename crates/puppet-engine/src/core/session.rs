use super::platform::Platform;

/// Scoped ownership of a [`Platform`].
///
/// Teardown (drawing context, then window, then connection) runs exactly once:
/// on [`Session::close`] or, failing that, on drop. Unwinding out of the
/// runtime loop therefore still releases everything in order.
pub struct Session<P: Platform> {
    platform: P,
    closed: bool,
}

impl<P: Platform> Session<P> {
    pub fn new(platform: P) -> Self {
        Self {
            platform,
            closed: false,
        }
    }

    pub fn platform_mut(&mut self) -> &mut P {
        &mut self.platform
    }

    /// Tears the platform down. Later calls are no-ops.
    pub fn close(&mut self) {
        if self.closed {
            return;
        }
        self.closed = true;

        log::debug!("releasing drawing context");
        self.platform.release_context();
        log::debug!("destroying window");
        self.platform.destroy_window();
        log::debug!("closing display connection");
        self.platform.close_connection();
    }
}

impl<P: Platform> Drop for Session<P> {
    fn drop(&mut self) {
        self.close();
    }
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;
    use std::rc::Rc;

    use super::*;
    use crate::core::{AppControl, Canvas, PlatformEvent};

    #[derive(Default)]
    struct Recorder {
        calls: Rc<RefCell<Vec<&'static str>>>,
    }

    impl Platform for Recorder {
        fn poll_event(&mut self) -> Option<PlatformEvent> {
            None
        }

        fn render<F>(&mut self, _draw: F) -> AppControl
        where
            F: FnOnce(&mut dyn Canvas),
        {
            AppControl::Continue
        }

        fn release_context(&mut self) {
            self.calls.borrow_mut().push("release_context");
        }

        fn destroy_window(&mut self) {
            self.calls.borrow_mut().push("destroy_window");
        }

        fn close_connection(&mut self) {
            self.calls.borrow_mut().push("close_connection");
        }
    }

    const ORDER: [&str; 3] = ["release_context", "destroy_window", "close_connection"];

    #[test]
    fn close_runs_teardown_in_order() {
        let rec = Recorder::default();
        let calls = rec.calls.clone();
        let mut session = Session::new(rec);

        session.close();

        assert_eq!(*calls.borrow(), ORDER);
    }

    #[test]
    fn close_then_drop_tears_down_once() {
        let rec = Recorder::default();
        let calls = rec.calls.clone();
        let mut session = Session::new(rec);

        session.close();
        session.close();
        drop(session);

        assert_eq!(*calls.borrow(), ORDER);
    }

    #[test]
    fn drop_without_close_still_tears_down() {
        let rec = Recorder::default();
        let calls = rec.calls.clone();
        drop(Session::new(rec));

        assert_eq!(*calls.borrow(), ORDER);
    }

    #[test]
    fn panic_inside_session_still_tears_down() {
        let rec = Recorder::default();
        let calls = rec.calls.clone();

        let result = std::panic::catch_unwind(std::panic::AssertUnwindSafe(move || {
            let _session = Session::new(rec);
            panic!("event handler blew up");
        }));

        assert!(result.is_err());
        assert_eq!(*calls.borrow(), ORDER);
    }
}
