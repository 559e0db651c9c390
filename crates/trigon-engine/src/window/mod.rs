//! Window + host event source.
//!
//! Owns the `winit` EventLoop and Window and translates their lifecycle into
//! [`HostEvent`](crate::core::HostEvent)s.

mod native;
mod runtime;

pub use native::NativeWindow;
pub use runtime::{RuntimeConfig, WinitHost};
