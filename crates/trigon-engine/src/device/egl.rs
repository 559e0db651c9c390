use std::ffi::CStr;

use glutin::config::{Api, ColorBufferType, Config, ConfigSurfaceTypes, ConfigTemplateBuilder};
use glutin::context::{
    ContextApi, ContextAttributesBuilder, NotCurrentContext, PossiblyCurrentContext, Version,
};
use glutin::display::{Display, DisplayApiPreference};
use glutin::prelude::*;
use glutin::surface::{Surface, SurfaceAttributesBuilder, WindowSurface};

use crate::window::NativeWindow;

use super::{ContextInit, Platform, PlatformError};

/// [`Platform`] backed by glutin (EGL on Android and Linux).
#[derive(Debug, Default, Clone, Copy)]
pub struct GlutinPlatform;

/// glutin models "current" in the type system; the state machine needs one
/// slot it can flip in place.
pub enum GlutinContext {
    NotCurrent(NotCurrentContext),
    Current(PossiblyCurrentContext),
    Released,
}

fn api_preference(window: &NativeWindow) -> DisplayApiPreference {
    #[cfg(target_os = "windows")]
    {
        DisplayApiPreference::EglThenWgl(Some(window.window_handle()))
    }

    #[cfg(target_os = "macos")]
    {
        let _ = window;
        DisplayApiPreference::Cgl
    }

    #[cfg(not(any(target_os = "windows", target_os = "macos")))]
    {
        let _ = window;
        DisplayApiPreference::Egl
    }
}

impl Platform for GlutinPlatform {
    type Window = NativeWindow;
    type Display = Display;
    type Config = Config;
    type Surface = Surface<WindowSurface>;
    type Context = GlutinContext;
    type Gl = glow::Context;

    fn get_display(&mut self, window: &NativeWindow) -> Result<Display, PlatformError> {
        log::debug!("opening display connection");
        // SAFETY: the display handle belongs to a window the host keeps alive
        // until the lost-window notification has been handled.
        let display = unsafe { Display::new(window.display_handle(), api_preference(window))? };
        Ok(display)
    }

    fn choose_config(
        &mut self,
        display: &Display,
        window: &NativeWindow,
        init: &ContextInit,
    ) -> Result<Option<Config>, PlatformError> {
        let template = ConfigTemplateBuilder::new()
            .with_api(Api::GLES3)
            .with_surface_type(ConfigSurfaceTypes::WINDOW)
            .with_buffer_type(ColorBufferType::Rgb {
                r_size: init.red_bits,
                g_size: init.green_bits,
                b_size: init.blue_bits,
            })
            .prefer_hardware_accelerated(init.hardware_accelerated.then_some(true))
            .compatible_with_native_window(window.window_handle())
            .build();

        let config = unsafe { display.find_configs(template)?.next() };
        if let Some(config) = &config {
            log::debug!(
                "framebuffer config: {:?}, hardware accelerated: {}",
                config.color_buffer_type(),
                config.hardware_accelerated()
            );
        }

        Ok(config)
    }

    fn create_window_surface(
        &mut self,
        display: &Display,
        config: &Config,
        window: &NativeWindow,
    ) -> Result<Surface<WindowSurface>, PlatformError> {
        let (width, height) = window.size();
        let attributes = SurfaceAttributesBuilder::<WindowSurface>::new().build(
            window.window_handle(),
            width,
            height,
        );

        let surface = unsafe { display.create_window_surface(config, &attributes)? };
        Ok(surface)
    }

    fn create_context(
        &mut self,
        display: &Display,
        config: &Config,
        window: &NativeWindow,
        init: &ContextInit,
    ) -> Result<GlutinContext, PlatformError> {
        let (major, minor) = init.gles_version;
        let attributes = ContextAttributesBuilder::new()
            .with_context_api(ContextApi::Gles(Some(Version::new(major, minor))))
            .build(Some(window.window_handle()));

        let context = unsafe { display.create_context(config, &attributes)? };
        Ok(GlutinContext::NotCurrent(context))
    }

    fn make_current(
        &mut self,
        _display: &Display,
        surface: &Surface<WindowSurface>,
        context: &mut GlutinContext,
    ) -> Result<(), PlatformError> {
        match std::mem::replace(context, GlutinContext::Released) {
            GlutinContext::NotCurrent(not_current) => {
                let current = not_current.make_current(surface)?;
                *context = GlutinContext::Current(current);
                Ok(())
            }
            GlutinContext::Current(current) => {
                let result = current.make_current(surface);
                *context = GlutinContext::Current(current);
                Ok(result?)
            }
            GlutinContext::Released => Err(PlatformError::new("context was already released")),
        }
    }

    fn make_not_current(&mut self, _display: &Display, context: &mut GlutinContext) {
        *context = match std::mem::replace(context, GlutinContext::Released) {
            GlutinContext::Current(current) => match current.make_not_current() {
                Ok(not_current) => GlutinContext::NotCurrent(not_current),
                Err(err) => {
                    log::warn!("failed to release current context: {err}");
                    GlutinContext::Released
                }
            },
            other => other,
        };
    }

    fn destroy_context(&mut self, _display: &Display, context: GlutinContext) {
        drop(context);
    }

    fn destroy_surface(&mut self, _display: &Display, surface: Surface<WindowSurface>) {
        drop(surface);
    }

    fn terminate(&mut self, display: Display) {
        // glutin only calls eglTerminate on drop when EGL_KHR_display_reference
        // is in use, which Android's EGL usually lacks.
        #[allow(unreachable_patterns)]
        match display {
            #[cfg(not(target_vendor = "apple"))]
            Display::Egl(egl) => {
                // SAFETY: surface and context were destroyed just before and
                // no other clone of this display is alive.
                unsafe { egl.terminate() };
            }
            other => drop(other),
        }
        log::debug!("display connection terminated");
    }

    fn swap_buffers(
        &mut self,
        _display: &Display,
        surface: &Surface<WindowSurface>,
        context: &GlutinContext,
    ) -> Result<(), PlatformError> {
        match context {
            GlutinContext::Current(current) => Ok(surface.swap_buffers(current)?),
            _ => Err(PlatformError::new("context is not current")),
        }
    }

    fn load_gl(&mut self, display: &Display) -> glow::Context {
        // SAFETY: called right after `make_current` succeeded on this thread.
        unsafe {
            glow::Context::from_loader_function_cstr(|symbol: &CStr| {
                display.get_proc_address(symbol)
            })
        }
    }
}
