use std::rc::Rc;

use super::{ContextError, ContextInit, Platform};

/// Lifecycle of a [`GraphicsContext`].
///
/// `Destroyed` is terminal: a new window gets a new instance.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum ContextState {
    Uninitialized,
    Initializing,
    Ready,
    Destroyed,
}

/// Display, surface and context acquired together. Holding all three in one
/// value keeps partial validity unrepresentable once initialization returns.
struct Bound<P: Platform> {
    display: P::Display,
    surface: P::Surface,
    context: P::Context,
    gl: Rc<P::Gl>,
}

/// Owns the display connection, drawable surface and rendering context for
/// one native window.
///
/// This is the only type that talks to the [`Platform`]. GPU objects created
/// through [`gl`](Self::gl) must be released before [`teardown`](Self::teardown).
pub struct GraphicsContext<P: Platform> {
    platform: P,
    init: ContextInit,
    state: ContextState,
    bound: Option<Bound<P>>,
}

impl<P: Platform> GraphicsContext<P> {
    pub fn new(platform: P, init: ContextInit) -> Self {
        Self {
            platform,
            init,
            state: ContextState::Uninitialized,
            bound: None,
        }
    }

    pub fn state(&self) -> ContextState {
        self.state
    }

    /// True iff the context is `Ready`.
    pub fn is_valid(&self) -> bool {
        self.state == ContextState::Ready
    }

    /// GPU function table, available while the context is `Ready`.
    pub fn gl(&self) -> Option<&Rc<P::Gl>> {
        self.bound.as_ref().map(|bound| &bound.gl)
    }

    /// Acquires display, surface and context for `window` and makes them
    /// current.
    ///
    /// On failure every sub-resource acquired so far is released in reverse
    /// order and the instance ends up `Destroyed`.
    pub fn initialize(&mut self, window: &P::Window) -> Result<(), ContextError> {
        if self.state != ContextState::Uninitialized {
            let err = ContextError::InvalidState(self.state);
            log::error!("{err}");
            return Err(err);
        }

        self.state = ContextState::Initializing;

        match acquire(&mut self.platform, window, &self.init) {
            Ok(bound) => {
                self.bound = Some(bound);
                self.state = ContextState::Ready;
                log::info!("graphics context ready");
                Ok(())
            }
            Err(err) => {
                log::error!("graphics context initialization failed: {err}");
                self.state = ContextState::Destroyed;
                Err(err)
            }
        }
    }

    /// Swaps the back buffer to the surface.
    ///
    /// Outside `Ready` this is a no-op.
    pub fn present(&mut self) -> Result<(), ContextError> {
        let Some(bound) = self.bound.as_ref() else {
            log::debug!("present ignored: context is {:?}", self.state);
            return Ok(());
        };

        self.platform
            .swap_buffers(&bound.display, &bound.surface, &bound.context)
            .map_err(|err| {
                log::warn!("buffer swap failed: {err}");
                ContextError::PresentFailed(err)
            })
    }

    /// Unbinds and destroys context, surface and display, in that order.
    ///
    /// Idempotent and legal from every state; always ends `Destroyed`.
    pub fn teardown(&mut self) {
        if let Some(Bound {
            display,
            surface,
            context,
            gl,
        }) = self.bound.take()
        {
            drop(gl);
            release(&mut self.platform, display, Some(surface), Some(context));
            log::info!("graphics context torn down");
        }

        self.state = ContextState::Destroyed;
    }
}

impl<P: Platform> Drop for GraphicsContext<P> {
    fn drop(&mut self) {
        self.teardown();
    }
}

fn acquire<P: Platform>(
    platform: &mut P,
    window: &P::Window,
    init: &ContextInit,
) -> Result<Bound<P>, ContextError> {
    let display = platform
        .get_display(window)
        .map_err(ContextError::DisplayUnavailable)?;

    let config = match platform.choose_config(&display, window, init) {
        Ok(Some(config)) => config,
        Ok(None) => {
            platform.terminate(display);
            return Err(ContextError::NoSuitableConfig);
        }
        Err(err) => {
            log::warn!("framebuffer configuration negotiation failed: {err}");
            platform.terminate(display);
            return Err(ContextError::NoSuitableConfig);
        }
    };

    let surface = match platform.create_window_surface(&display, &config, window) {
        Ok(surface) => surface,
        Err(err) => {
            platform.terminate(display);
            return Err(ContextError::SurfaceCreationFailed(err));
        }
    };

    let mut context = match platform.create_context(&display, &config, window, init) {
        Ok(context) => context,
        Err(err) => {
            release(platform, display, Some(surface), None);
            return Err(ContextError::ContextCreationFailed(err));
        }
    };

    if let Err(err) = platform.make_current(&display, &surface, &mut context) {
        release(platform, display, Some(surface), Some(context));
        return Err(ContextError::BindFailed(err));
    }

    let gl = Rc::new(platform.load_gl(&display));

    Ok(Bound {
        display,
        surface,
        context,
        gl,
    })
}

/// Releases in reverse creation order: context, surface, display.
fn release<P: Platform>(
    platform: &mut P,
    display: P::Display,
    surface: Option<P::Surface>,
    context: Option<P::Context>,
) {
    if let Some(mut context) = context {
        platform.make_not_current(&display, &mut context);
        platform.destroy_context(&display, context);
    }

    if let Some(surface) = surface {
        platform.destroy_surface(&display, surface);
    }

    platform.terminate(display);
}
