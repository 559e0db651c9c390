use std::time::Duration;

use anyhow::{Context, Result};
use winit::application::ApplicationHandler;
use winit::dpi::LogicalSize;
use winit::event::WindowEvent;
use winit::event_loop::{ActiveEventLoop, EventLoop};
use winit::platform::pump_events::{EventLoopExtPumpEvents, PumpStatus};
use winit::window::{Window, WindowId};

use crate::core::{HostEvent, HostEventSource};

use super::native::NativeWindow;

/// Window/runtime configuration.
///
/// Title and size only apply on desktop; Android hands over a full-screen
/// window of its own choosing.
#[derive(Debug, Clone)]
pub struct RuntimeConfig {
    pub title: String,
    pub initial_size: LogicalSize<f64>,
}

impl Default for RuntimeConfig {
    fn default() -> Self {
        Self {
            title: "trigon".to_string(),
            initial_size: LogicalSize::new(800.0, 600.0),
        }
    }
}

/// [`HostEventSource`] over a winit event loop.
///
/// Each [`pump`](HostEventSource::pump) drains the platform queue with a zero
/// timeout. Resume and suspend become window-available and window-lost; the
/// winit window is dropped only after window-lost has been dispatched.
pub struct WinitHost {
    event_loop: EventLoop<()>,
    state: HostState,
}

struct HostState {
    config: RuntimeConfig,
    window: Option<Window>,
    destroy_requested: bool,
}

impl WinitHost {
    pub fn new(config: RuntimeConfig) -> Result<Self> {
        let event_loop = EventLoop::new().context("failed to create winit EventLoop")?;
        Ok(Self::with_event_loop(event_loop, config))
    }

    /// Wraps an event loop built elsewhere (the Android entry point builds
    /// one around its `AndroidApp`).
    pub fn with_event_loop(event_loop: EventLoop<()>, config: RuntimeConfig) -> Self {
        Self {
            event_loop,
            state: HostState {
                config,
                window: None,
                destroy_requested: false,
            },
        }
    }
}

impl HostEventSource for WinitHost {
    type Window = NativeWindow;

    fn pump(&mut self, dispatch: &mut dyn FnMut(HostEvent<NativeWindow>)) {
        let mut pump = Pump {
            state: &mut self.state,
            dispatch,
        };

        let status = self
            .event_loop
            .pump_app_events(Some(Duration::ZERO), &mut pump);

        if let PumpStatus::Exit(code) = status {
            log::info!("event loop exited with code {code}");
            self.state.destroy_requested = true;
        }
    }

    fn destroy_requested(&self) -> bool {
        self.state.destroy_requested
    }
}

/// Borrowed view handed to winit for the duration of one pump.
struct Pump<'a> {
    state: &'a mut HostState,
    dispatch: &'a mut dyn FnMut(HostEvent<NativeWindow>),
}

impl Pump<'_> {
    fn create_window(&mut self, event_loop: &ActiveEventLoop) -> Result<&Window> {
        let attrs = Window::default_attributes()
            .with_title(self.state.config.title.clone())
            .with_inner_size(self.state.config.initial_size);

        let window = event_loop
            .create_window(attrs)
            .context("failed to create window")?;

        Ok(self.state.window.insert(window))
    }

    fn lose_window(&mut self) {
        if let Some(window) = self.state.window.take() {
            (self.dispatch)(HostEvent::WindowLost);
            drop(window);
        }
    }

    fn request_destroy(&mut self, event_loop: &ActiveEventLoop) {
        self.lose_window();
        if !self.state.destroy_requested {
            self.state.destroy_requested = true;
            (self.dispatch)(HostEvent::DestroyRequested);
        }
        event_loop.exit();
    }
}

impl ApplicationHandler for Pump<'_> {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.state.window.is_some() {
            return;
        }

        let native = match self.create_window(event_loop) {
            Ok(window) => NativeWindow::from_window(window),
            Err(e) => {
                log::error!("failed to create window: {e:#}");
                self.request_destroy(event_loop);
                return;
            }
        };

        match native {
            Ok(native) => {
                log::debug!("native window resumed: {:?}", native.size());
                (self.dispatch)(HostEvent::WindowAvailable(Some(native)));
            }
            Err(e) => {
                log::warn!("native window is not usable yet: {e:#}");
                (self.dispatch)(HostEvent::WindowAvailable(None));
            }
        }
    }

    fn suspended(&mut self, _event_loop: &ActiveEventLoop) {
        log::debug!("native window suspended");
        self.lose_window();
    }

    fn window_event(&mut self, event_loop: &ActiveEventLoop, _id: WindowId, event: WindowEvent) {
        match event {
            WindowEvent::CloseRequested | WindowEvent::Destroyed => self.request_destroy(event_loop),

            WindowEvent::Resized(size) => {
                (self.dispatch)(HostEvent::WindowResized {
                    width: size.width,
                    height: size.height,
                });
            }

            _ => {}
        }
    }

    fn exiting(&mut self, _event_loop: &ActiveEventLoop) {
        self.state.destroy_requested = true;
    }
}
