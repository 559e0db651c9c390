//! Triangle rendering.
//!
//! [`Renderer`] composes a [`GraphicsContext`](crate::device::GraphicsContext)
//! with one [`ShaderProgram`] and one [`MeshResource`]. Geometry and shader
//! sources are compiled in.

mod mesh;
mod renderer;
mod shader;

pub use mesh::{MeshError, MeshResource, TRIANGLE_VERTICES, Vertex};
pub use renderer::{RenderError, Renderer, RendererConfig};
pub use shader::{ShaderError, ShaderProgram, TRIANGLE_FRAGMENT_SHADER, TRIANGLE_VERTEX_SHADER};
