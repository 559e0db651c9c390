//! The GPU calls the renderer issues.
//!
//! [`Gl`] names exactly the entry points the shader, mesh and frame code use,
//! so the whole render path can run against a recording backend in tests.
//! Object handles are `Copy` tokens; "no object" is spelled `None`.

mod glow_backend;

use crate::paint::Color;

/// Programmable pipeline stage.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum ShaderStage {
    Vertex,
    Fragment,
}

impl ShaderStage {
    pub fn label(self) -> &'static str {
        match self {
            ShaderStage::Vertex => "vertex",
            ShaderStage::Fragment => "fragment",
        }
    }
}

/// Float vertex attribute layout.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub struct VertexAttrib {
    /// Binding slot (`layout(location = N)`).
    pub location: u32,
    /// Number of `f32` components.
    pub components: i32,
    /// Byte distance between consecutive vertices.
    pub stride: i32,
    /// Byte offset of the first component.
    pub offset: i32,
}

/// GPU function table.
///
/// All calls assume the owning context is current on the calling thread.
pub trait Gl {
    type Shader: Copy;
    type Program: Copy;
    type Buffer: Copy;
    type VertexArray: Copy;

    fn create_shader(&self, stage: ShaderStage) -> Result<Self::Shader, String>;
    /// Sets the source of `shader` and compiles it.
    fn compile_shader(&self, shader: Self::Shader, source: &str);
    fn shader_compile_status(&self, shader: Self::Shader) -> bool;
    fn shader_info_log(&self, shader: Self::Shader) -> String;
    fn delete_shader(&self, shader: Self::Shader);

    fn create_program(&self) -> Result<Self::Program, String>;
    fn attach_shader(&self, program: Self::Program, shader: Self::Shader);
    fn detach_shader(&self, program: Self::Program, shader: Self::Shader);
    fn link_program(&self, program: Self::Program);
    fn program_link_status(&self, program: Self::Program) -> bool;
    fn program_info_log(&self, program: Self::Program) -> String;
    fn use_program(&self, program: Option<Self::Program>);
    fn delete_program(&self, program: Self::Program);

    fn create_vertex_array(&self) -> Result<Self::VertexArray, String>;
    fn bind_vertex_array(&self, vertex_array: Option<Self::VertexArray>);
    fn delete_vertex_array(&self, vertex_array: Self::VertexArray);

    fn create_buffer(&self) -> Result<Self::Buffer, String>;
    fn bind_array_buffer(&self, buffer: Option<Self::Buffer>);
    /// Uploads `data` to the bound array buffer with static usage.
    fn upload_static_array_data(&self, data: &[u8]);
    fn delete_buffer(&self, buffer: Self::Buffer);

    /// Describes and enables a non-normalized float attribute for the bound
    /// vertex array, sourced from the bound array buffer.
    fn enable_float_attrib(&self, attrib: VertexAttrib);

    /// Clears the color buffer of the current surface to `color`.
    fn clear_color_buffer(&self, color: Color);
    /// Draws `count` vertices as a triangle list, starting at `first`.
    fn draw_triangles(&self, first: i32, count: i32);
}
