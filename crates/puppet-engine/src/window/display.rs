use std::collections::VecDeque;
use std::time::Duration;

use anyhow::{Context, Result};
use ouroboros::self_referencing;
use winit::application::ApplicationHandler;
use winit::dpi::{LogicalSize, PhysicalSize};
use winit::event::WindowEvent;
use winit::event_loop::{ActiveEventLoop, EventLoop};
use winit::platform::modifier_supplement::KeyEventExtModifierSupplement;
use winit::platform::pump_events::{EventLoopExtPumpEvents, PumpStatus};
use winit::window::{Window, WindowId};

use crate::coords::Viewport;
use crate::core::{AppControl, Canvas, Platform, PlatformEvent};
use crate::device::{Gpu, GpuInit, SurfaceRecovery};
use crate::input::platform::winit::key_press;
use crate::render::shapes::circle::CircleRenderer;
use crate::render::shapes::polygon::PolygonRenderer;
use crate::render::{RenderCtx, RenderTarget};
use crate::scene::{DrawList, Painter};

use super::RuntimeConfig;

/// Pump attempts while waiting for the window to come up.
const STARTUP_PUMPS: usize = 50;
const STARTUP_PUMP_TIMEOUT: Duration = Duration::from_millis(10);

#[self_referencing]
struct WindowEntry {
    window: Window,

    // `None` once the drawing context has been released.
    #[borrows(window)]
    #[covariant]
    gpu: Option<Gpu<'this>>,
}

/// winit application handler: creates the window on resume and queues
/// translated events for [`Display::poll_event`].
struct Pump {
    config: RuntimeConfig,
    gpu_init: GpuInit,
    entry: Option<WindowEntry>,
    pending: VecDeque<PlatformEvent>,
    startup_error: Option<anyhow::Error>,
}

impl Pump {
    fn new(config: RuntimeConfig, gpu_init: GpuInit) -> Self {
        Self {
            config,
            gpu_init,
            entry: None,
            pending: VecDeque::new(),
            startup_error: None,
        }
    }

    fn open_window(&self, event_loop: &ActiveEventLoop) -> Result<WindowEntry> {
        let attrs = Window::default_attributes()
            .with_title(self.config.title.clone())
            .with_inner_size(self.config.initial_size)
            .with_position(self.config.position)
            .with_decorations(true);

        let window = event_loop
            .create_window(attrs)
            .context("failed to create window")?;

        let gpu_init = self.gpu_init.clone();
        WindowEntryTryBuilder {
            window,
            gpu_builder: |w| pollster::block_on(Gpu::new(w, gpu_init)).map(Some),
        }
        .try_build()
        .context("failed to create drawing context")
    }
}

impl ApplicationHandler for Pump {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.entry.is_some() || self.startup_error.is_some() {
            return;
        }

        match self.open_window(event_loop) {
            Ok(entry) => {
                log::info!("window '{}' created", self.config.title);
                self.entry = Some(entry);
            }
            Err(e) => self.startup_error = Some(e),
        }
    }

    fn window_event(&mut self, _event_loop: &ActiveEventLoop, window_id: WindowId, event: WindowEvent) {
        let Some(entry) = self.entry.as_mut() else {
            return;
        };
        if entry.borrow_window().id() != window_id {
            return;
        }

        if let Some(ev) = translate_window_event(entry, &event) {
            log::trace!("queued {ev:?}");
            self.pending.push_back(ev);
        }
    }
}

fn translate_window_event(entry: &mut WindowEntry, event: &WindowEvent) -> Option<PlatformEvent> {
    match event {
        WindowEvent::CloseRequested => Some(PlatformEvent::CloseRequested),

        WindowEvent::RedrawRequested => Some(PlatformEvent::Exposed),

        WindowEvent::Resized(size) => {
            resize_surface(entry, *size);
            Some(logical_resize(*size, entry.borrow_window().scale_factor()))
        }

        // `inner_size` is still the pre-change size here. The app hears about
        // the new size from the `Resized` that follows.
        WindowEvent::ScaleFactorChanged { .. } => {
            let size = entry.borrow_window().inner_size();
            resize_surface(entry, size);
            None
        }

        WindowEvent::KeyboardInput {
            event,
            is_synthetic,
            ..
        } => key_press(event.state, *is_synthetic, &event.key_without_modifiers())
            .map(PlatformEvent::KeyPressed),

        _ => None,
    }
}

fn resize_surface(entry: &mut WindowEntry, size: PhysicalSize<u32>) {
    entry.with_gpu_mut(|gpu| {
        if let Some(gpu) = gpu {
            gpu.resize(size);
        }
    });
}

/// App-facing resize in logical pixels.
fn logical_resize(size: PhysicalSize<u32>, scale_factor: f64) -> PlatformEvent {
    let logical: LogicalSize<f64> = size.to_logical(scale_factor);
    PlatformEvent::Resized {
        width: logical.width.round() as u32,
        height: logical.height.round() as u32,
    }
}

/// winit + wgpu [`Platform`].
///
/// Field order is drop order: renderers and the drawing context go before the
/// window, and the window before the event loop (the display connection).
pub struct Display {
    draw_list: DrawList,
    polygons: PolygonRenderer,
    circles: CircleRenderer,
    pump: Pump,
    event_loop: Option<EventLoop<()>>,
}

impl Display {
    /// Opens the display connection, creates the window and its drawing context.
    pub fn open(config: RuntimeConfig, gpu_init: GpuInit) -> Result<Self> {
        let mut event_loop = EventLoop::new().context("failed to open display connection")?;
        let mut pump = Pump::new(config, gpu_init);

        for _ in 0..STARTUP_PUMPS {
            if let PumpStatus::Exit(code) =
                event_loop.pump_app_events(Some(STARTUP_PUMP_TIMEOUT), &mut pump)
            {
                anyhow::bail!("display connection closed during startup (code {code})");
            }
            if let Some(err) = pump.startup_error.take() {
                return Err(err);
            }
            if pump.entry.is_some() {
                break;
            }
        }
        anyhow::ensure!(pump.entry.is_some(), "display server never created the window");

        Ok(Self {
            draw_list: DrawList::new(),
            polygons: PolygonRenderer::new(),
            circles: CircleRenderer::new(),
            pump,
            event_loop: Some(event_loop),
        })
    }
}

impl Platform for Display {
    fn poll_event(&mut self) -> Option<PlatformEvent> {
        if self.pump.pending.is_empty() {
            if let Some(event_loop) = self.event_loop.as_mut() {
                if let PumpStatus::Exit(code) =
                    event_loop.pump_app_events(Some(Duration::ZERO), &mut self.pump)
                {
                    log::warn!("event loop exited (code {code}); treating as close request");
                    self.pump.pending.push_back(PlatformEvent::CloseRequested);
                }
            }
        }
        self.pump.pending.pop_front()
    }

    fn render<F>(&mut self, draw: F) -> AppControl
    where
        F: FnOnce(&mut dyn Canvas),
    {
        let Some(entry) = self.pump.entry.as_mut() else {
            return AppControl::Exit;
        };
        let (background, foreground) = (self.pump.config.background, self.pump.config.foreground);
        let (draw_list, polygons, circles) = (&mut self.draw_list, &mut self.polygons, &mut self.circles);

        entry.with_mut(|fields| {
            let Some(gpu) = fields.gpu.as_mut() else {
                return AppControl::Exit;
            };

            let mut frame = match gpu.begin_frame() {
                Ok(f) => f,
                Err(SurfaceRecovery::Fatal) => return AppControl::Exit,
                Err(_) => return AppControl::Continue,
            };

            draw(&mut Painter::new(draw_list, foreground));

            let logical: LogicalSize<f32> = fields
                .window
                .inner_size()
                .to_logical(fields.window.scale_factor());
            let viewport = Viewport::new(logical.width, logical.height);

            let mut target = RenderTarget::new(&mut frame.encoder, &frame.view);
            target.clear(background);

            if viewport.is_valid() {
                let rctx = RenderCtx::new(gpu.device(), gpu.queue(), gpu.surface_format(), viewport);
                // Body before head: the head is painted on top.
                polygons.render(&rctx, &mut target, draw_list);
                circles.render(&rctx, &mut target, draw_list);
            }

            fields.window.pre_present_notify();
            gpu.present(frame);
            AppControl::Continue
        })
    }

    fn release_context(&mut self) {
        self.polygons = PolygonRenderer::new();
        self.circles = CircleRenderer::new();
        if let Some(entry) = self.pump.entry.as_mut() {
            entry.with_gpu_mut(|gpu| *gpu = None);
        }
    }

    fn destroy_window(&mut self) {
        self.pump.entry = None;
        self.pump.pending.clear();
    }

    fn close_connection(&mut self) {
        self.event_loop = None;
    }
}
