//! Trigon engine crate.
//!
//! Brings up an OpenGL ES context on a host-provided native window, keeps it
//! in step with the window's lifecycle, and draws one triangle per frame.

pub mod core;
pub mod device;
pub mod gl;
pub mod paint;
pub mod render;
pub mod window;

pub mod logging;

#[cfg(test)]
mod testing;
