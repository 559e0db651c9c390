use crate::device::Platform;
use crate::render::{Renderer, RendererConfig};

use super::app::{AppControl, HostEvent, HostEventSource};

#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum ControllerState {
    NoSurface,
    HasSurface,
    Terminated,
}

/// Owns at most one [`Renderer`] and moves it through the host's window
/// lifecycle.
///
/// A renderer exists only between a successful window-available event and
/// the next window-lost event. A renderer whose initialization fails is
/// cleaned up on the spot; the controller stays in `NoSurface` until the
/// host hands over another window.
pub struct ApplicationController<P: Platform + Clone> {
    platform: P,
    config: RendererConfig,
    renderer: Option<Renderer<P>>,
    terminated: bool,
}

impl<P: Platform + Clone> ApplicationController<P> {
    pub fn new(platform: P, config: RendererConfig) -> Self {
        Self {
            platform,
            config,
            renderer: None,
            terminated: false,
        }
    }

    pub fn state(&self) -> ControllerState {
        match (&self.renderer, self.terminated) {
            (_, true) => ControllerState::Terminated,
            (Some(_), false) => ControllerState::HasSurface,
            (None, false) => ControllerState::NoSurface,
        }
    }

    pub fn renderer(&self) -> Option<&Renderer<P>> {
        self.renderer.as_ref()
    }

    /// Applies one host notification.
    pub fn handle(&mut self, event: HostEvent<P::Window>) -> AppControl {
        if self.terminated {
            log::debug!("event ignored after termination: {}", event_name(&event));
            return AppControl::Exit;
        }

        match event {
            HostEvent::WindowAvailable(Some(window)) => {
                log::info!("window available");
                self.release_renderer();

                let mut renderer = Renderer::new(self.platform.clone(), self.config.clone());
                match renderer.initialize(&window) {
                    Ok(()) => self.renderer = Some(renderer),
                    Err(err) => {
                        log::error!("renderer initialization failed: {err}");
                        renderer.cleanup();
                    }
                }
            }

            HostEvent::WindowAvailable(None) => {
                log::warn!("window available without a native handle; ignoring");
            }

            HostEvent::WindowLost => {
                log::info!("window lost");
                self.release_renderer();
            }

            HostEvent::WindowResized { width, height } => {
                // The surface keeps its creation-time size until the next
                // window-available event.
                log::debug!("resize to {width}x{height} ignored");
            }

            HostEvent::DestroyRequested => {
                self.shutdown();
                return AppControl::Exit;
            }
        }

        AppControl::Continue
    }

    /// Draws one frame if a valid renderer exists. Returns whether a frame
    /// was submitted.
    pub fn render(&mut self) -> bool {
        let Some(renderer) = self.renderer.as_mut().filter(|r| r.is_valid()) else {
            return false;
        };

        match renderer.draw_frame() {
            Ok(()) => true,
            Err(err) => {
                log::warn!("frame dropped: {err}");
                false
            }
        }
    }

    /// Releases the renderer, if any, and stops accepting events. Idempotent.
    pub fn shutdown(&mut self) {
        if self.terminated {
            return;
        }

        self.release_renderer();
        self.terminated = true;
        log::info!("application controller terminated");
    }

    /// Drives the controller until the host asks for destruction: drain all
    /// pending events without blocking, then draw once.
    pub fn run<S>(&mut self, source: &mut S)
    where
        S: HostEventSource<Window = P::Window>,
    {
        log::info!("main loop started");

        while !self.terminated && !source.destroy_requested() {
            source.pump(&mut |event| {
                self.handle(event);
            });
            self.render();
        }

        self.shutdown();
        log::info!("main loop finished");
    }

    fn release_renderer(&mut self) {
        if let Some(mut renderer) = self.renderer.take() {
            renderer.cleanup();
            log::debug!("renderer destroyed");
        }
    }
}

fn event_name<W>(event: &HostEvent<W>) -> &'static str {
    match event {
        HostEvent::WindowAvailable(_) => "window-available",
        HostEvent::WindowLost => "window-lost",
        HostEvent::WindowResized { .. } => "window-resized",
        HostEvent::DestroyRequested => "destroy-requested",
    }
}
