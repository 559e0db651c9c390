use std::rc::Rc;

use thiserror::Error;

use crate::device::{ContextError, ContextInit, GraphicsContext, Platform};
use crate::gl::Gl;
use crate::paint::Color;

use super::mesh::{MeshError, MeshResource};
use super::shader::{ShaderError, ShaderProgram, TRIANGLE_FRAGMENT_SHADER, TRIANGLE_VERTEX_SHADER};

/// Renderer configuration.
#[derive(Debug, Clone, PartialEq)]
pub struct RendererConfig {
    /// Background the color buffer is cleared to every frame.
    pub clear_color: Color,

    pub context: ContextInit,
}

impl Default for RendererConfig {
    fn default() -> Self {
        Self {
            clear_color: Color::opaque(0.2, 0.3, 0.3),
            context: ContextInit::default(),
        }
    }
}

#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum RenderError {
    #[error(transparent)]
    Context(#[from] ContextError),

    #[error(transparent)]
    Shader(#[from] ShaderError),

    #[error(transparent)]
    Mesh(#[from] MeshError),
}

/// Graphics context plus the shader program and mesh drawn with it.
///
/// A failed or successful [`initialize`](Self::initialize) is expected to be
/// paired with [`cleanup`](Self::cleanup); dropping the renderer does the same.
pub struct Renderer<P: Platform> {
    clear_color: Color,
    shader: Option<ShaderProgram<P::Gl>>,
    mesh: Option<MeshResource<P::Gl>>,
    context: GraphicsContext<P>,
}

impl<P: Platform> Renderer<P> {
    pub fn new(platform: P, config: RendererConfig) -> Self {
        if !config.clear_color.is_finite() {
            log::warn!("non-finite clear color {:?}; clamping", config.clear_color);
        }

        Self {
            clear_color: config.clear_color.clamped(),
            shader: None,
            mesh: None,
            context: GraphicsContext::new(platform, config.context),
        }
    }

    pub fn context(&self) -> &GraphicsContext<P> {
        &self.context
    }

    /// Brings up the context, then the shader program, then the mesh.
    ///
    /// A context failure returns before any GPU object is touched. Shader or
    /// mesh failures leave the context up for `cleanup` to release.
    pub fn initialize(&mut self, window: &P::Window) -> Result<(), RenderError> {
        self.context.initialize(window)?;

        let gl = self
            .context
            .gl()
            .cloned()
            .ok_or(ContextError::InvalidState(self.context.state()))?;

        let shader = self.shader.insert(ShaderProgram::new(Rc::clone(&gl)));
        shader.initialize(TRIANGLE_VERTEX_SHADER, TRIANGLE_FRAGMENT_SHADER)?;

        let mesh = self.mesh.insert(MeshResource::new(gl));
        mesh.initialize()?;

        log::info!("renderer initialized");
        Ok(())
    }

    /// Context is `Ready`, program linked, mesh uploaded.
    pub fn is_valid(&self) -> bool {
        self.context.is_valid()
            && self.shader.as_ref().is_some_and(ShaderProgram::is_linked)
            && self.mesh.as_ref().is_some_and(MeshResource::is_ready)
    }

    /// Clear, draw, present. Issues no GPU call unless [`is_valid`](Self::is_valid).
    pub fn draw_frame(&mut self) -> Result<(), RenderError> {
        if !self.is_valid() {
            return Ok(());
        }

        if let (Some(gl), Some(shader), Some(mesh)) =
            (self.context.gl(), self.shader.as_ref(), self.mesh.as_ref())
        {
            gl.clear_color_buffer(self.clear_color);
            shader.bind();
            mesh.draw();
        }

        self.context.present()?;
        Ok(())
    }

    /// Releases mesh, shader program, then the context. Idempotent.
    pub fn cleanup(&mut self) {
        if let Some(mut mesh) = self.mesh.take() {
            mesh.cleanup();
        }
        if let Some(mut shader) = self.shader.take() {
            shader.release();
        }
        self.context.teardown();
    }
}

impl<P: Platform> Drop for Renderer<P> {
    fn drop(&mut self) {
        self.cleanup();
    }
}
