//! Shader compilation and linking for WebGL / OpenGL.
//!
//! Compilation and linking report failure as a typed error carrying the
//! driver's info log rather than a null handle. The objects they create
//! are released on every failure path, so a caller only ever owns handles
//! that compiled or linked successfully.

use std::fmt;
use thiserror::Error;

/// Programmable stage a shader source is compiled for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ShaderStage {
    Vertex,
    Fragment,
}

impl ShaderStage {
    /// The GL shader type constant for this stage.
    pub fn gl_type(self) -> u32 {
        match self {
            ShaderStage::Vertex => glow::VERTEX_SHADER,
            ShaderStage::Fragment => glow::FRAGMENT_SHADER,
        }
    }
}

impl fmt::Display for ShaderStage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ShaderStage::Vertex => f.write_str("vertex"),
            ShaderStage::Fragment => f.write_str("fragment"),
        }
    }
}

/// Errors that can occur during shader compilation or program linking.
#[derive(Debug, Clone, Error)]
pub enum ShaderError {
    /// A shader stage failed to compile.
    #[error("shader compile error ({stage}):\n{log}")]
    CompileError {
        stage: ShaderStage,
        /// The driver's info log, after the numbered source.
        log: String,
    },
    /// The program failed to link.
    #[error("program link error:\n{0}")]
    LinkError(String),
}

/// A successfully compiled shader object.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CompiledStage {
    pub stage: ShaderStage,
    pub shader: glow::Shader,
}

/// A successfully linked program object.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LinkedProgram {
    pub program: glow::Program,
}

/// Formats a shader compilation error for human-readable debugging.
///
/// Prepends right-aligned line numbers to each line of `source`, then
/// appends the driver's error `log`, so line references in the log can be
/// matched against the GLSL.
pub fn format_shader_error(source: &str, log: &str) -> String {
    let lines: Vec<&str> = source.lines().collect();
    let width = lines.len().max(1).to_string().len();

    let numbered = lines
        .iter()
        .enumerate()
        .map(|(i, line)| format!("{:>width$}: {line}", i + 1))
        .collect::<Vec<_>>()
        .join("\n");

    let log = log.trim_end();
    match (numbered.is_empty(), log.is_empty()) {
        (true, true) => String::new(),
        (true, false) => log.to_string(),
        (false, true) => numbered,
        (false, false) => format!("{numbered}\n\n{log}"),
    }
}

/// Compiles a single shader stage.
///
/// On failure the info log is captured, the shader object is deleted,
/// and `ShaderError::CompileError` is returned.
///
/// # Errors
///
/// Returns `ShaderError::CompileError` if the object cannot be created
/// or the GLSL source fails to compile.
#[allow(unsafe_code)]
pub fn compile_shader(
    gl: &glow::Context,
    stage: ShaderStage,
    source: &str,
) -> Result<CompiledStage, ShaderError> {
    use glow::HasContext;

    // SAFETY: glow wraps raw GL calls as unsafe. We pass a valid shader type
    // and delete the object on the failure path.
    let shader = unsafe {
        gl.create_shader(stage.gl_type())
            .map_err(|e| ShaderError::CompileError { stage, log: e })?
    };

    let compiled = unsafe {
        gl.shader_source(shader, source);
        gl.compile_shader(shader);
        gl.get_shader_compile_status(shader)
    };

    if compiled {
        log::debug!("compiled {stage} shader");
        Ok(CompiledStage { stage, shader })
    } else {
        let info_log = unsafe { gl.get_shader_info_log(shader) };
        unsafe { gl.delete_shader(shader) };
        Err(ShaderError::CompileError {
            stage,
            log: format_shader_error(source, &info_log),
        })
    }
}

/// Attaches both stages to a new program and links it.
///
/// The stages stay attached; the program is released on link failure and
/// the stages are left to the caller.
///
/// # Errors
///
/// Returns `ShaderError::LinkError` if the program cannot be created or
/// linking fails.
#[allow(unsafe_code)]
pub fn link_program(
    gl: &glow::Context,
    vertex: &CompiledStage,
    fragment: &CompiledStage,
) -> Result<LinkedProgram, ShaderError> {
    use glow::HasContext;

    debug_assert_eq!(vertex.stage, ShaderStage::Vertex);
    debug_assert_eq!(fragment.stage, ShaderStage::Fragment);

    // SAFETY: both shader handles come from successful compile_shader calls.
    let program = unsafe { gl.create_program().map_err(ShaderError::LinkError)? };

    let linked = unsafe {
        gl.attach_shader(program, vertex.shader);
        gl.attach_shader(program, fragment.shader);
        gl.link_program(program);
        gl.get_program_link_status(program)
    };

    if linked {
        log::debug!("linked program");
        Ok(LinkedProgram { program })
    } else {
        let info_log = unsafe { gl.get_program_info_log(program) };
        unsafe { gl.delete_program(program) };
        Err(ShaderError::LinkError(info_log))
    }
}
