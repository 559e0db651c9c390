use thiserror::Error;

use super::ContextState;

/// Failure reported by a [`Platform`](super::Platform) implementation.
///
/// Backends differ wildly in what they report, so only the rendered message
/// is carried across the seam.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("{message}")]
pub struct PlatformError {
    message: String,
}

impl PlatformError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

impl From<glutin::error::Error> for PlatformError {
    fn from(err: glutin::error::Error) -> Self {
        Self::new(err.to_string())
    }
}

/// Errors raised while bringing up, presenting with, or tearing down a
/// [`GraphicsContext`](super::GraphicsContext).
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ContextError {
    #[error("no display connection available: {0}")]
    DisplayUnavailable(PlatformError),

    /// Configuration negotiation failed or matched nothing.
    #[error("no framebuffer configuration satisfies the request")]
    NoSuitableConfig,

    #[error("failed to create window surface: {0}")]
    SurfaceCreationFailed(PlatformError),

    #[error("failed to create rendering context: {0}")]
    ContextCreationFailed(PlatformError),

    #[error("failed to bind context to surface: {0}")]
    BindFailed(PlatformError),

    /// `initialize` is only legal on a fresh instance.
    #[error("graphics context cannot be initialized from the {0:?} state")]
    InvalidState(ContextState),

    #[error("buffer swap rejected: {0}")]
    PresentFailed(PlatformError),
}
