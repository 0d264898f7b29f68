use std::time::Duration;

use puppet_engine::paint::Color;
use puppet_engine::window::{LogicalPosition, LogicalSize, RuntimeConfig};

/// Everything the demo can be tuned with. There is no config file; these are
/// the compiled-in values.
#[derive(Debug, Clone)]
pub struct DemoConfig {
    pub title: String,
    pub width: u32,
    pub height: u32,
    pub position: (i32, i32),

    /// Radius of the head circle.
    pub circle_radius: i32,
    /// Half-extent of the body triangle.
    pub triangle_size: i32,

    pub initial_move_speed: i32,
    /// Amount `+`/`=` and `-` change the speed by.
    pub speed_step: i32,

    /// Sleep when no event is pending.
    pub idle: Duration,
}

impl Default for DemoConfig {
    fn default() -> Self {
        Self {
            title: "puppet: arrows/WASD move, +/- speed, Esc quits".to_string(),
            width: 640,
            height: 480,
            position: (100, 100),
            circle_radius: 50,
            triangle_size: 50,
            initial_move_speed: 10,
            speed_step: 5,
            idle: Duration::from_millis(10),
        }
    }
}

impl DemoConfig {
    pub fn runtime(&self) -> RuntimeConfig {
        RuntimeConfig {
            title: self.title.clone(),
            initial_size: LogicalSize::new(self.width as f64, self.height as f64),
            position: LogicalPosition::new(self.position.0 as f64, self.position.1 as f64),
            background: Color::WHITE,
            foreground: Color::BLACK,
        }
    }
}
