use std::num::NonZeroU32;

use anyhow::{Context, Result};
use raw_window_handle::{HasDisplayHandle, HasWindowHandle, RawDisplayHandle, RawWindowHandle};
use winit::window::Window;

/// Raw handles and size of a native window, captured when the host reports
/// it available.
///
/// Carries no lifetime: the host keeps the underlying window alive until
/// the matching [`HostEvent::WindowLost`](crate::core::HostEvent::WindowLost)
/// has been dispatched.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NativeWindow {
    display: RawDisplayHandle,
    window: RawWindowHandle,
    width: NonZeroU32,
    height: NonZeroU32,
}

impl NativeWindow {
    pub fn from_window(window: &Window) -> Result<Self> {
        let display = window
            .display_handle()
            .context("window has no display handle")?
            .as_raw();
        let handle = window
            .window_handle()
            .context("window has no native handle")?
            .as_raw();

        let size = window.inner_size();
        let width = NonZeroU32::new(size.width).context("window has zero width")?;
        let height = NonZeroU32::new(size.height).context("window has zero height")?;

        Ok(Self {
            display,
            window: handle,
            width,
            height,
        })
    }

    pub fn display_handle(&self) -> RawDisplayHandle {
        self.display
    }

    pub fn window_handle(&self) -> RawWindowHandle {
        self.window
    }

    /// Physical size in pixels at capture time.
    pub fn size(&self) -> (NonZeroU32, NonZeroU32) {
        (self.width, self.height)
    }
}
