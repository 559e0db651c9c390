use std::rc::Rc;

use bytemuck::{Pod, Zeroable};
use thiserror::Error;

use crate::gl::{Gl, VertexAttrib};

#[repr(C)]
#[derive(Debug, Copy, Clone, PartialEq, Pod, Zeroable)]
pub struct Vertex {
    pub position: [f32; 3],
}

impl Vertex {
    /// `layout(location = 0) in vec3`, tightly packed.
    pub const POSITION: VertexAttrib = VertexAttrib {
        location: 0,
        components: 3,
        stride: std::mem::size_of::<Vertex>() as i32,
        offset: 0,
    };
}

/// The one triangle, in normalized device coordinates.
pub const TRIANGLE_VERTICES: [Vertex; 3] = [
    Vertex { position: [0.0, 0.5, 0.0] },   // top
    Vertex { position: [-0.5, -0.5, 0.0] }, // left
    Vertex { position: [0.5, -0.5, 0.0] },  // right
];

#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum MeshError {
    #[error("failed to allocate mesh {object}: {reason}")]
    AllocationFailed { object: &'static str, reason: String },
}

/// GPU-resident copy of [`TRIANGLE_VERTICES`] plus its attribute layout.
pub struct MeshResource<G: Gl> {
    gl: Rc<G>,
    vertex_array: Option<G::VertexArray>,
    vertex_buffer: Option<G::Buffer>,
}

impl<G: Gl> MeshResource<G> {
    pub fn new(gl: Rc<G>) -> Self {
        Self {
            gl,
            vertex_array: None,
            vertex_buffer: None,
        }
    }

    /// True once both GPU objects exist.
    pub fn is_ready(&self) -> bool {
        self.vertex_array.is_some() && self.vertex_buffer.is_some()
    }

    /// Allocates the vertex array and buffer, uploads the triangle and
    /// describes attribute 0.
    ///
    /// Objects allocated before a failure are kept so that
    /// [`cleanup`](Self::cleanup) can release them.
    pub fn initialize(&mut self) -> Result<(), MeshError> {
        self.cleanup();

        let vertex_array = self
            .gl
            .create_vertex_array()
            .map_err(|reason| allocation_failed("vertex array", reason))?;
        self.vertex_array = Some(vertex_array);

        let vertex_buffer = self
            .gl
            .create_buffer()
            .map_err(|reason| allocation_failed("vertex buffer", reason))?;
        self.vertex_buffer = Some(vertex_buffer);

        let gl = &*self.gl;
        gl.bind_vertex_array(Some(vertex_array));
        gl.bind_array_buffer(Some(vertex_buffer));
        gl.upload_static_array_data(bytemuck::cast_slice(&TRIANGLE_VERTICES));
        gl.enable_float_attrib(Vertex::POSITION);
        gl.bind_vertex_array(None);
        gl.bind_array_buffer(None);

        log::debug!("triangle mesh uploaded ({} vertices)", TRIANGLE_VERTICES.len());
        Ok(())
    }

    /// Draws the triangle with whatever program is bound.
    pub fn draw(&self) {
        let Some(vertex_array) = self.vertex_array.filter(|_| self.is_ready()) else {
            log::debug!("draw ignored: mesh is not initialized");
            return;
        };

        self.gl.bind_vertex_array(Some(vertex_array));
        self.gl.draw_triangles(0, TRIANGLE_VERTICES.len() as i32);
        self.gl.bind_vertex_array(None);
    }

    /// Deletes buffer, then vertex array. Idempotent.
    pub fn cleanup(&mut self) {
        if let Some(buffer) = self.vertex_buffer.take() {
            self.gl.delete_buffer(buffer);
        }
        if let Some(vertex_array) = self.vertex_array.take() {
            self.gl.delete_vertex_array(vertex_array);
        }
    }
}

impl<G: Gl> Drop for MeshResource<G> {
    fn drop(&mut self) {
        self.cleanup();
    }
}

fn allocation_failed(object: &'static str, reason: String) -> MeshError {
    let err = MeshError::AllocationFailed { object, reason };
    log::error!("{err}");
    err
}
