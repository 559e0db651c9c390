use std::rc::Rc;

use thiserror::Error;

use crate::gl::{Gl, ShaderStage};

pub const TRIANGLE_VERTEX_SHADER: &str = include_str!("shaders/triangle.vert");
pub const TRIANGLE_FRAGMENT_SHADER: &str = include_str!("shaders/triangle.frag");

#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ShaderError {
    /// A stage was rejected by the compiler; `log` is the driver diagnostic.
    #[error("{} shader failed to compile: {log}", .stage.label())]
    Compile { stage: ShaderStage, log: String },

    #[error("shader program failed to link: {log}")]
    Link { log: String },

    /// The driver refused to create a shader or program object.
    #[error("failed to allocate shader object: {0}")]
    Allocation(String),
}

/// One linked vertex + fragment program.
///
/// Starts empty; the program object is released exactly once, on
/// [`release`](Self::release) or drop.
pub struct ShaderProgram<G: Gl> {
    gl: Rc<G>,
    program: Option<G::Program>,
}

impl<G: Gl> ShaderProgram<G> {
    pub fn new(gl: Rc<G>) -> Self {
        Self { gl, program: None }
    }

    pub fn is_linked(&self) -> bool {
        self.program.is_some()
    }

    /// Compiles both stages and links them.
    ///
    /// A stage that fails to compile short-circuits before any program
    /// object exists. Stage objects never outlive this call.
    pub fn initialize(&mut self, vertex_source: &str, fragment_source: &str) -> Result<(), ShaderError> {
        self.release();

        let program = build_program(&*self.gl, vertex_source, fragment_source)
            .inspect_err(|err| log::error!("{err}"))?;

        self.program = Some(program);
        log::debug!("shader program linked");
        Ok(())
    }

    /// Makes this program active for subsequent draws.
    pub fn bind(&self) {
        match self.program {
            Some(program) => self.gl.use_program(Some(program)),
            None => log::debug!("bind ignored: shader program is not linked"),
        }
    }

    pub fn release(&mut self) {
        if let Some(program) = self.program.take() {
            self.gl.delete_program(program);
        }
    }
}

impl<G: Gl> Drop for ShaderProgram<G> {
    fn drop(&mut self) {
        self.release();
    }
}

fn compile_stage<G: Gl>(gl: &G, stage: ShaderStage, source: &str) -> Result<G::Shader, ShaderError> {
    let shader = gl.create_shader(stage).map_err(ShaderError::Allocation)?;
    gl.compile_shader(shader, source);

    if !gl.shader_compile_status(shader) {
        let log = gl.shader_info_log(shader);
        gl.delete_shader(shader);
        return Err(ShaderError::Compile { stage, log });
    }

    Ok(shader)
}

fn build_program<G: Gl>(gl: &G, vertex_source: &str, fragment_source: &str) -> Result<G::Program, ShaderError> {
    let vertex = compile_stage(gl, ShaderStage::Vertex, vertex_source)?;
    let fragment = match compile_stage(gl, ShaderStage::Fragment, fragment_source) {
        Ok(shader) => shader,
        Err(err) => {
            gl.delete_shader(vertex);
            return Err(err);
        }
    };

    let program = match gl.create_program() {
        Ok(program) => program,
        Err(reason) => {
            gl.delete_shader(vertex);
            gl.delete_shader(fragment);
            return Err(ShaderError::Allocation(reason));
        }
    };

    gl.attach_shader(program, vertex);
    gl.attach_shader(program, fragment);
    gl.link_program(program);

    let link_log = (!gl.program_link_status(program)).then(|| gl.program_info_log(program));

    // Stage objects are dead weight once link has run, whatever the outcome.
    gl.detach_shader(program, vertex);
    gl.detach_shader(program, fragment);
    gl.delete_shader(vertex);
    gl.delete_shader(fragment);

    if let Some(log) = link_log {
        gl.delete_program(program);
        return Err(ShaderError::Link { log });
    }

    Ok(program)
}
