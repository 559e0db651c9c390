//! Graphics context management.
//!
//! This module is responsible for:
//! - opening the display connection and negotiating a framebuffer config
//! - creating the window surface and rendering context, and binding them
//! - presenting frames and tearing everything down in reverse order
//!
//! [`GraphicsContext`] is the state machine; [`Platform`] is the seam to the
//! windowing layer, implemented for glutin by [`GlutinPlatform`].

mod context;
mod egl;
mod error;
mod init;
mod platform;

pub use context::{ContextState, GraphicsContext};
pub use egl::{GlutinContext, GlutinPlatform};
pub use error::{ContextError, PlatformError};
pub use init::ContextInit;
pub use platform::Platform;
