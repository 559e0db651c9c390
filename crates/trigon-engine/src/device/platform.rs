use crate::gl::Gl;

use super::{ContextInit, PlatformError};

/// The platform windowing/graphics boundary.
///
/// Mirrors the handful of EGL entry points the context state machine needs.
/// Objects are handed back by value on destruction so an implementation can
/// release them exactly once; nothing here is called outside the lifetime
/// bounded by the matching create/destroy pair.
pub trait Platform {
    /// Native window the drawable surface is bound to.
    type Window;
    type Display;
    type Config;
    type Surface;
    type Context;
    /// GPU function table loaded once a context is current.
    type Gl: Gl;

    /// Opens (and initializes) a display connection for `window`.
    fn get_display(&mut self, window: &Self::Window) -> Result<Self::Display, PlatformError>;

    /// Returns the first configuration matching `init`, or `None` when
    /// negotiation yields zero configurations.
    fn choose_config(
        &mut self,
        display: &Self::Display,
        window: &Self::Window,
        init: &ContextInit,
    ) -> Result<Option<Self::Config>, PlatformError>;

    fn create_window_surface(
        &mut self,
        display: &Self::Display,
        config: &Self::Config,
        window: &Self::Window,
    ) -> Result<Self::Surface, PlatformError>;

    fn create_context(
        &mut self,
        display: &Self::Display,
        config: &Self::Config,
        window: &Self::Window,
        init: &ContextInit,
    ) -> Result<Self::Context, PlatformError>;

    /// Binds `context` to `surface` for both drawing and reading.
    fn make_current(
        &mut self,
        display: &Self::Display,
        surface: &Self::Surface,
        context: &mut Self::Context,
    ) -> Result<(), PlatformError>;

    /// Releases the current binding ("no surface, no context").
    fn make_not_current(&mut self, display: &Self::Display, context: &mut Self::Context);

    fn destroy_context(&mut self, display: &Self::Display, context: Self::Context);

    fn destroy_surface(&mut self, display: &Self::Display, surface: Self::Surface);

    /// Terminates the display connection.
    fn terminate(&mut self, display: Self::Display);

    /// Presents the back buffer of `surface`.
    fn swap_buffers(
        &mut self,
        display: &Self::Display,
        surface: &Self::Surface,
        context: &Self::Context,
    ) -> Result<(), PlatformError>;

    /// Resolves GPU entry points through `display`. Only called while a
    /// context is current.
    fn load_gl(&mut self, display: &Self::Display) -> Self::Gl;
}
