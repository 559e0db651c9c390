//! Recording doubles for the platform and GPU seams.
//!
//! [`MockPlatform`] and [`MockGl`] share one [`MockLog`]: every call is
//! appended in order, live objects are tracked per kind, and [`Faults`]
//! switches make individual calls fail.

use std::cell::RefCell;
use std::collections::{HashMap, HashSet};
use std::rc::Rc;

use crate::device::{ContextInit, Platform, PlatformError};
use crate::gl::{Gl, ShaderStage, VertexAttrib};
use crate::paint::Color;

pub type MockWindow = u32;

#[derive(Debug, Clone, PartialEq)]
pub enum Call {
    GetDisplay,
    ChooseConfig,
    CreateSurface { window: MockWindow },
    CreateContext,
    MakeCurrent,
    MakeNotCurrent,
    DestroyContext,
    DestroySurface,
    Terminate,
    SwapBuffers,
    LoadGl,

    CreateShader(ShaderStage),
    CompileShader(ShaderStage),
    DeleteShader,
    CreateProgram,
    AttachShader,
    DetachShader,
    LinkProgram,
    UseProgram(Option<u32>),
    DeleteProgram,

    CreateVertexArray,
    BindVertexArray(Option<u32>),
    DeleteVertexArray,
    CreateBuffer,
    BindArrayBuffer(Option<u32>),
    UploadStaticArrayData(Vec<u8>),
    DeleteBuffer,
    EnableFloatAttrib(VertexAttrib),

    ClearColorBuffer(Color),
    DrawTriangles { first: i32, count: i32 },
}

/// Failure injection. Every switch defaults to "succeed".
#[derive(Debug, Clone, Default)]
pub struct Faults {
    pub no_display: bool,
    pub zero_configs: bool,
    pub config_error: bool,
    pub surface: bool,
    pub context: bool,
    pub bind: bool,
    pub swap: bool,
    pub compile: Option<ShaderStage>,
    pub link: bool,
    pub vertex_array: bool,
    pub buffer: bool,
}

/// Number of live objects per kind.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq)]
pub struct Live {
    pub displays: usize,
    pub surfaces: usize,
    pub contexts: usize,
    pub shaders: usize,
    pub programs: usize,
    pub vertex_arrays: usize,
    pub buffers: usize,
}

#[derive(Default)]
struct State {
    calls: Vec<Call>,
    faults: Faults,
    next_id: u32,

    displays: HashSet<u32>,
    surfaces: HashSet<u32>,
    contexts: HashSet<u32>,
    shaders: HashMap<u32, ShaderStage>,
    programs: HashSet<u32>,
    vertex_arrays: HashSet<u32>,
    buffers: HashSet<u32>,

    compiled: HashMap<u32, bool>,
    linked: HashMap<u32, bool>,

    /// Releases of ids that were never created or already released.
    invalid_releases: usize,
    /// GPU calls issued while no rendering context was alive.
    orphan_gl_calls: usize,
}

impl State {
    fn record(&mut self, call: Call) {
        self.calls.push(call);
    }

    fn next_id(&mut self) -> u32 {
        self.next_id += 1;
        self.next_id
    }

    fn forget(set: &mut HashSet<u32>, id: u32, invalid: &mut usize) {
        if !set.remove(&id) {
            *invalid += 1;
        }
    }
}

#[derive(Clone, Default)]
pub struct MockLog(Rc<RefCell<State>>);

impl MockLog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_faults(faults: Faults) -> Self {
        let log = Self::new();
        log.set_faults(faults);
        log
    }

    pub fn set_faults(&self, faults: Faults) {
        self.0.borrow_mut().faults = faults;
    }

    pub fn platform(&self) -> MockPlatform {
        MockPlatform { log: self.clone() }
    }

    pub fn calls(&self) -> Vec<Call> {
        self.0.borrow().calls.clone()
    }

    pub fn count(&self, pred: impl Fn(&Call) -> bool) -> usize {
        self.0.borrow().calls.iter().filter(|c| pred(c)).count()
    }

    pub fn clear_calls(&self) {
        self.0.borrow_mut().calls.clear();
    }

    pub fn live(&self) -> Live {
        let s = self.0.borrow();
        Live {
            displays: s.displays.len(),
            surfaces: s.surfaces.len(),
            contexts: s.contexts.len(),
            shaders: s.shaders.len(),
            programs: s.programs.len(),
            vertex_arrays: s.vertex_arrays.len(),
            buffers: s.buffers.len(),
        }
    }

    pub fn invalid_releases(&self) -> usize {
        self.0.borrow().invalid_releases
    }

    pub fn orphan_gl_calls(&self) -> usize {
        self.0.borrow().orphan_gl_calls
    }

    fn with<R>(&self, f: impl FnOnce(&mut State) -> R) -> R {
        f(&mut *self.0.borrow_mut())
    }
}

#[derive(Clone)]
pub struct MockPlatform {
    log: MockLog,
}

impl Platform for MockPlatform {
    type Window = MockWindow;
    type Display = u32;
    type Config = u32;
    type Surface = u32;
    type Context = u32;
    type Gl = MockGl;

    fn get_display(&mut self, _window: &MockWindow) -> Result<u32, PlatformError> {
        self.log.with(|s| {
            s.record(Call::GetDisplay);
            if s.faults.no_display {
                return Err(PlatformError::new("no display"));
            }
            let id = s.next_id();
            s.displays.insert(id);
            Ok(id)
        })
    }

    fn choose_config(
        &mut self,
        _display: &u32,
        _window: &MockWindow,
        _init: &ContextInit,
    ) -> Result<Option<u32>, PlatformError> {
        self.log.with(|s| {
            s.record(Call::ChooseConfig);
            if s.faults.config_error {
                return Err(PlatformError::new("bad attribute"));
            }
            if s.faults.zero_configs {
                return Ok(None);
            }
            Ok(Some(s.next_id()))
        })
    }

    fn create_window_surface(
        &mut self,
        _display: &u32,
        _config: &u32,
        window: &MockWindow,
    ) -> Result<u32, PlatformError> {
        self.log.with(|s| {
            s.record(Call::CreateSurface { window: *window });
            if s.faults.surface {
                return Err(PlatformError::new("bad native window"));
            }
            let id = s.next_id();
            s.surfaces.insert(id);
            Ok(id)
        })
    }

    fn create_context(
        &mut self,
        _display: &u32,
        _config: &u32,
        _window: &MockWindow,
        _init: &ContextInit,
    ) -> Result<u32, PlatformError> {
        self.log.with(|s| {
            s.record(Call::CreateContext);
            if s.faults.context {
                return Err(PlatformError::new("bad match"));
            }
            let id = s.next_id();
            s.contexts.insert(id);
            Ok(id)
        })
    }

    fn make_current(
        &mut self,
        _display: &u32,
        _surface: &u32,
        _context: &mut u32,
    ) -> Result<(), PlatformError> {
        self.log.with(|s| {
            s.record(Call::MakeCurrent);
            if s.faults.bind {
                return Err(PlatformError::new("bad access"));
            }
            Ok(())
        })
    }

    fn make_not_current(&mut self, _display: &u32, _context: &mut u32) {
        self.log.with(|s| s.record(Call::MakeNotCurrent));
    }

    fn destroy_context(&mut self, _display: &u32, context: u32) {
        self.log.with(|s| {
            s.record(Call::DestroyContext);
            State::forget(&mut s.contexts, context, &mut s.invalid_releases);
        });
    }

    fn destroy_surface(&mut self, _display: &u32, surface: u32) {
        self.log.with(|s| {
            s.record(Call::DestroySurface);
            State::forget(&mut s.surfaces, surface, &mut s.invalid_releases);
        });
    }

    fn terminate(&mut self, display: u32) {
        self.log.with(|s| {
            s.record(Call::Terminate);
            State::forget(&mut s.displays, display, &mut s.invalid_releases);
        });
    }

    fn swap_buffers(
        &mut self,
        _display: &u32,
        _surface: &u32,
        _context: &u32,
    ) -> Result<(), PlatformError> {
        self.log.with(|s| {
            s.record(Call::SwapBuffers);
            if s.faults.swap {
                return Err(PlatformError::new("surface lost"));
            }
            Ok(())
        })
    }

    fn load_gl(&mut self, _display: &u32) -> MockGl {
        self.log.with(|s| s.record(Call::LoadGl));
        MockGl {
            log: self.log.clone(),
        }
    }
}

pub struct MockGl {
    log: MockLog,
}

impl MockGl {
    /// Like [`MockLog::with`], but counts calls made while no context is live.
    fn with<R>(&self, f: impl FnOnce(&mut State) -> R) -> R {
        self.log.with(|s| {
            if s.contexts.is_empty() {
                s.orphan_gl_calls += 1;
            }
            f(s)
        })
    }
}

impl Gl for MockGl {
    type Shader = u32;
    type Program = u32;
    type Buffer = u32;
    type VertexArray = u32;

    fn create_shader(&self, stage: ShaderStage) -> Result<u32, String> {
        self.with(|s| {
            s.record(Call::CreateShader(stage));
            let id = s.next_id();
            s.shaders.insert(id, stage);
            Ok(id)
        })
    }

    fn compile_shader(&self, shader: u32, _source: &str) {
        self.with(|s| {
            let stage = s.shaders.get(&shader).copied().unwrap_or(ShaderStage::Vertex);
            s.record(Call::CompileShader(stage));
            let ok = s.faults.compile != Some(stage);
            s.compiled.insert(shader, ok);
        });
    }

    fn shader_compile_status(&self, shader: u32) -> bool {
        self.with(|s| s.compiled.get(&shader).copied().unwrap_or(false))
    }

    fn shader_info_log(&self, shader: u32) -> String {
        self.with(|s| match s.shaders.get(&shader) {
            Some(stage) => format!("0:1: {} stage rejected by mock compiler", stage.label()),
            None => String::new(),
        })
    }

    fn delete_shader(&self, shader: u32) {
        self.with(|s| {
            s.record(Call::DeleteShader);
            if s.shaders.remove(&shader).is_none() {
                s.invalid_releases += 1;
            }
        });
    }

    fn create_program(&self) -> Result<u32, String> {
        self.with(|s| {
            s.record(Call::CreateProgram);
            let id = s.next_id();
            s.programs.insert(id);
            Ok(id)
        })
    }

    fn attach_shader(&self, _program: u32, _shader: u32) {
        self.with(|s| s.record(Call::AttachShader));
    }

    fn detach_shader(&self, _program: u32, _shader: u32) {
        self.with(|s| s.record(Call::DetachShader));
    }

    fn link_program(&self, program: u32) {
        self.with(|s| {
            s.record(Call::LinkProgram);
            let ok = !s.faults.link;
            s.linked.insert(program, ok);
        });
    }

    fn program_link_status(&self, program: u32) -> bool {
        self.with(|s| s.linked.get(&program).copied().unwrap_or(false))
    }

    fn program_info_log(&self, _program: u32) -> String {
        "mock linker: vertex output not consumed".to_string()
    }

    fn use_program(&self, program: Option<u32>) {
        self.with(|s| s.record(Call::UseProgram(program)));
    }

    fn delete_program(&self, program: u32) {
        self.with(|s| {
            s.record(Call::DeleteProgram);
            State::forget(&mut s.programs, program, &mut s.invalid_releases);
        });
    }

    fn create_vertex_array(&self) -> Result<u32, String> {
        self.with(|s| {
            s.record(Call::CreateVertexArray);
            if s.faults.vertex_array {
                return Err("out of vertex arrays".to_string());
            }
            let id = s.next_id();
            s.vertex_arrays.insert(id);
            Ok(id)
        })
    }

    fn bind_vertex_array(&self, vertex_array: Option<u32>) {
        self.with(|s| s.record(Call::BindVertexArray(vertex_array)));
    }

    fn delete_vertex_array(&self, vertex_array: u32) {
        self.with(|s| {
            s.record(Call::DeleteVertexArray);
            State::forget(&mut s.vertex_arrays, vertex_array, &mut s.invalid_releases);
        });
    }

    fn create_buffer(&self) -> Result<u32, String> {
        self.with(|s| {
            s.record(Call::CreateBuffer);
            if s.faults.buffer {
                return Err("out of buffers".to_string());
            }
            let id = s.next_id();
            s.buffers.insert(id);
            Ok(id)
        })
    }

    fn bind_array_buffer(&self, buffer: Option<u32>) {
        self.with(|s| s.record(Call::BindArrayBuffer(buffer)));
    }

    fn upload_static_array_data(&self, data: &[u8]) {
        self.with(|s| s.record(Call::UploadStaticArrayData(data.to_vec())));
    }

    fn delete_buffer(&self, buffer: u32) {
        self.with(|s| {
            s.record(Call::DeleteBuffer);
            State::forget(&mut s.buffers, buffer, &mut s.invalid_releases);
        });
    }

    fn enable_float_attrib(&self, attrib: VertexAttrib) {
        self.with(|s| s.record(Call::EnableFloatAttrib(attrib)));
    }

    fn clear_color_buffer(&self, color: Color) {
        self.with(|s| s.record(Call::ClearColorBuffer(color)));
    }

    fn draw_triangles(&self, first: i32, count: i32) {
        self.with(|s| s.record(Call::DrawTriangles { first, count }));
    }
}
