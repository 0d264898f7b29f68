use puppet_engine::core::{App, AppControl, Canvas, PlatformEvent};

use crate::config::DemoConfig;
use crate::controls::{action_for, Action};
use crate::figure::{triangle, Point};

/// The puppet: a triangle body and a circle head moved together.
pub struct CanvasApp {
    width: i32,
    height: i32,

    head: Point,
    body: Point,
    circle_radius: i32,
    triangle_size: i32,

    move_speed: i32,
    speed_step: i32,

    running: bool,
    needs_redraw: bool,
}

impl CanvasApp {
    /// Both shapes start at the center of the initial window.
    pub fn new(config: &DemoConfig) -> Self {
        let width = dim(config.width);
        let height = dim(config.height);
        let center = Point::new(width / 2, height / 2);

        Self {
            width,
            height,
            head: center,
            body: center,
            circle_radius: config.circle_radius,
            triangle_size: config.triangle_size,
            move_speed: config.initial_move_speed.max(1),
            speed_step: config.speed_step,
            running: true,
            needs_redraw: true,
        }
    }

    fn on_resize(&mut self, width: u32, height: u32) {
        self.width = dim(width);
        self.height = dim(height);
        self.head = self.head.refit(self.circle_radius, self.width, self.height);
        self.body = self.body.refit(self.triangle_size, self.width, self.height);
        log::debug!("canvas resized to {}x{}", self.width, self.height);
        self.needs_redraw = true;
    }

    fn on_key(&mut self, action: Action) {
        let mut moved = false;
        match action {
            Action::Move { dx, dy } => {
                let (dx, dy) = (dx * self.move_speed, dy * self.move_speed);
                self.head = self.head.translate(dx, dy);
                self.body = self.body.translate(dx, dy);
                moved = true;
            }
            Action::SpeedUp => {
                self.move_speed = self.move_speed.saturating_add(self.speed_step);
                log::debug!("move speed {}", self.move_speed);
            }
            Action::SpeedDown => {
                self.move_speed = self.move_speed.saturating_sub(self.speed_step).max(1);
                log::debug!("move speed {}", self.move_speed);
            }
            Action::Quit => self.running = false,
            Action::None => {}
        }

        // Every key press re-clamps, moved or not.
        self.head = self.head.clamp_within(self.circle_radius, self.width, self.height);
        self.body = self.body.clamp_within(self.triangle_size, self.width, self.height);

        if moved {
            self.needs_redraw = true;
        }
    }
}

impl App for CanvasApp {
    fn on_event(&mut self, event: &PlatformEvent) -> AppControl {
        match *event {
            PlatformEvent::Exposed => self.needs_redraw = true,
            PlatformEvent::Resized { width, height } => self.on_resize(width, height),
            PlatformEvent::CloseRequested => {
                log::info!("close requested");
                self.running = false;
            }
            PlatformEvent::KeyPressed(key) => self.on_key(action_for(key)),
        }

        if self.running {
            AppControl::Continue
        } else {
            AppControl::Exit
        }
    }

    fn needs_redraw(&self) -> bool {
        self.needs_redraw
    }

    fn redraw(&mut self, canvas: &mut dyn Canvas) {
        canvas.clear();
        let body = triangle(self.body, self.triangle_size).map(Point::to_vec2);
        canvas.fill_polygon(&body);
        canvas.fill_circle(self.head.to_vec2(), self.circle_radius as f32);
        self.needs_redraw = false;
    }
}

fn dim(v: u32) -> i32 {
    i32::try_from(v).unwrap_or(i32::MAX)
}
