use std::time::Duration;

use anyhow::Result;
use winit::dpi::{LogicalPosition, LogicalSize};

use crate::core::{App, AppControl, Platform, Session};
use crate::device::GpuInit;
use crate::paint::Color;

use super::Display;

/// Window/runtime configuration.
#[derive(Debug, Clone)]
pub struct RuntimeConfig {
    pub title: String,
    pub initial_size: LogicalSize<f64>,
    /// Requested top-left screen position; window managers may ignore it.
    pub position: LogicalPosition<f64>,
    /// Color the window is cleared to.
    pub background: Color,
    /// Fill color for every shape.
    pub foreground: Color,
}

impl Default for RuntimeConfig {
    fn default() -> Self {
        Self {
            title: "puppet".to_string(),
            initial_size: LogicalSize::new(640.0, 480.0),
            position: LogicalPosition::new(100.0, 100.0),
            background: Color::WHITE,
            foreground: Color::BLACK,
        }
    }
}

/// Entry point for the runtime.
pub struct Runtime;

impl Runtime {
    /// Opens the display and drives `app` until it asks to exit.
    ///
    /// Fails only when the display, window or drawing context cannot be set
    /// up, or when drawing becomes impossible mid-run.
    pub fn run<A: App>(config: RuntimeConfig, gpu_init: GpuInit, app: &mut A, idle: Duration) -> Result<()> {
        let display = Display::open(config, gpu_init)?;
        Self::drive(display, app, idle)
    }

    /// The polling loop: redraw when dirty, then handle one pending event or
    /// sleep for `idle` when there is none.
    ///
    /// The platform is torn down (context, window, connection) before this
    /// returns, and also if `app` panics.
    pub fn drive<P: Platform, A: App>(platform: P, app: &mut A, idle: Duration) -> Result<()> {
        let mut session = Session::new(platform);

        let outcome = loop {
            if app.needs_redraw()
                && session.platform_mut().render(|canvas| app.redraw(canvas)) == AppControl::Exit
            {
                break Err(anyhow::anyhow!("drawing surface is no longer usable"));
            }

            match session.platform_mut().poll_event() {
                Some(event) => {
                    log::trace!("dispatching {event:?}");
                    if app.on_event(&event) == AppControl::Exit {
                        break Ok(());
                    }
                }
                None => std::thread::sleep(idle),
            }
        };

        log::info!("shutting down");
        session.close();
        outcome
    }
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;
    use std::collections::VecDeque;
    use std::rc::Rc;

    use super::*;
    use crate::coords::Vec2;
    use crate::core::{Canvas, PlatformEvent};
    use crate::input::Key;

    type Log = Rc<RefCell<Vec<String>>>;

    /// Platform replaying a fixed event script.
    struct Scripted {
        events: VecDeque<Option<PlatformEvent>>,
        frame: AppControl,
        skip_frames: bool,
        log: Log,
    }

    impl Scripted {
        fn new(events: Vec<Option<PlatformEvent>>, log: &Log) -> Self {
            Self {
                events: events.into(),
                frame: AppControl::Continue,
                skip_frames: false,
                log: log.clone(),
            }
        }
    }

    struct NullCanvas;

    impl Canvas for NullCanvas {
        fn clear(&mut self) {}
        fn fill_polygon(&mut self, _points: &[Vec2]) {}
        fn fill_circle(&mut self, _center: Vec2, _radius: f32) {}
    }

    impl Platform for Scripted {
        fn poll_event(&mut self) -> Option<PlatformEvent> {
            match self.events.pop_front() {
                Some(ev) => ev,
                None => panic!("script exhausted without exit"),
            }
        }

        fn render<F>(&mut self, draw: F) -> AppControl
        where
            F: FnOnce(&mut dyn Canvas),
        {
            self.log.borrow_mut().push("render".into());
            if !self.skip_frames && self.frame == AppControl::Continue {
                draw(&mut NullCanvas);
            }
            self.frame
        }

        fn release_context(&mut self) {
            self.log.borrow_mut().push("release_context".into());
        }

        fn destroy_window(&mut self) {
            self.log.borrow_mut().push("destroy_window".into());
        }

        fn close_connection(&mut self) {
            self.log.borrow_mut().push("close_connection".into());
        }
    }

    /// Redraws when dirty, marks dirty on `Exposed`, exits on close.
    struct Probe {
        dirty: bool,
        redraws: usize,
        seen: Vec<PlatformEvent>,
    }

    impl Probe {
        fn new() -> Self {
            Self {
                dirty: true,
                redraws: 0,
                seen: Vec::new(),
            }
        }
    }

    impl App for Probe {
        fn on_event(&mut self, event: &PlatformEvent) -> AppControl {
            self.seen.push(*event);
            match event {
                PlatformEvent::Exposed => self.dirty = true,
                PlatformEvent::CloseRequested => return AppControl::Exit,
                _ => {}
            }
            AppControl::Continue
        }

        fn needs_redraw(&self) -> bool {
            self.dirty
        }

        fn redraw(&mut self, _canvas: &mut dyn Canvas) {
            self.redraws += 1;
            self.dirty = false;
        }
    }

    const TEARDOWN: [&str; 3] = ["release_context", "destroy_window", "close_connection"];

    #[test]
    fn redraws_only_when_dirty_and_stops_on_exit() {
        let log = Log::default();
        let platform = Scripted::new(
            vec![
                Some(PlatformEvent::KeyPressed(Key::Char('x'))),
                None,
                Some(PlatformEvent::Exposed),
                Some(PlatformEvent::CloseRequested),
            ],
            &log,
        );
        let mut app = Probe::new();

        Runtime::drive(platform, &mut app, Duration::ZERO).unwrap();

        assert_eq!(app.redraws, 2);
        assert_eq!(app.seen.len(), 3);
        assert_eq!(
            *log.borrow(),
            ["render", "render", "release_context", "destroy_window", "close_connection"]
        );
    }

    #[test]
    fn close_first_with_no_completed_redraw_still_tears_down_once() {
        let log = Log::default();
        let mut platform = Scripted::new(vec![Some(PlatformEvent::CloseRequested)], &log);
        platform.skip_frames = true;
        let mut app = Probe::new();

        Runtime::drive(platform, &mut app, Duration::ZERO).unwrap();

        assert_eq!(app.redraws, 0);
        let calls = log.borrow();
        let teardown: Vec<_> = calls.iter().filter(|c| *c != "render").collect();
        assert_eq!(teardown, TEARDOWN);
    }

    #[test]
    fn unusable_surface_ends_the_loop_with_an_error() {
        let log = Log::default();
        let mut platform = Scripted::new(vec![], &log);
        platform.frame = AppControl::Exit;
        let mut app = Probe::new();

        let result = Runtime::drive(platform, &mut app, Duration::ZERO);

        assert!(result.is_err());
        assert_eq!(log.borrow()[1..], TEARDOWN);
    }

    #[test]
    fn panicking_app_still_tears_down() {
        struct Boom;
        impl App for Boom {
            fn on_event(&mut self, _event: &PlatformEvent) -> AppControl {
                panic!("handler failure");
            }
            fn needs_redraw(&self) -> bool {
                false
            }
            fn redraw(&mut self, _canvas: &mut dyn Canvas) {}
        }

        let log = Log::default();
        let platform = Scripted::new(vec![Some(PlatformEvent::Exposed)], &log);

        let result = std::panic::catch_unwind(std::panic::AssertUnwindSafe(|| {
            Runtime::drive(platform, &mut Boom, Duration::ZERO)
        }));

        assert!(result.is_err());
        assert_eq!(*log.borrow(), TEARDOWN);
    }

    // ── cadence ──────────────────────────────────────────────────────────

    #[test]
    fn pending_events_are_drained_without_sleeping() {
        let log = Log::default();
        let mut script = vec![Some(PlatformEvent::KeyPressed(Key::Char('x'))); 20];
        script.push(Some(PlatformEvent::CloseRequested));
        let platform = Scripted::new(script, &log);
        let mut app = Probe::new();

        let idle = Duration::from_millis(200);
        let started = std::time::Instant::now();
        Runtime::drive(platform, &mut app, idle).unwrap();

        assert_eq!(app.seen.len(), 21);
        assert!(started.elapsed() < idle, "slept with events pending");
    }

    #[test]
    fn empty_poll_sleeps_once() {
        let log = Log::default();
        let platform = Scripted::new(vec![None, Some(PlatformEvent::CloseRequested)], &log);
        let mut app = Probe::new();

        let idle = Duration::from_millis(150);
        let started = std::time::Instant::now();
        Runtime::drive(platform, &mut app, idle).unwrap();
        let elapsed = started.elapsed();

        assert!(elapsed >= idle, "no sleep on an empty poll");
        assert!(elapsed < idle * 2, "slept more than once");
    }

    #[test]
    fn default_config_matches_demo_window() {
        let config = RuntimeConfig::default();
        assert_eq!(config.initial_size, LogicalSize::new(640.0, 480.0));
        assert_eq!(config.position, LogicalPosition::new(100.0, 100.0));
        assert_eq!(config.background, Color::WHITE);
        assert_eq!(config.foreground, Color::BLACK);
    }
}
