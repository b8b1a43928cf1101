//! The setup pass: compile, link, upload, bind, clear, draw.
//!
//! [`render_triangle`] runs the whole sequence once, synchronously, against
//! the given context and returns every GPU object it created so the caller
//! decides when to release them. Any failure stops the pass before the
//! clear, so a failed attempt leaves the surface untouched.

use super::attribute::{bind_attribute, AttributeBinding};
use super::buffer::VertexBuffer;
use super::context::GpuContext;
use super::draw;
use super::shader::{compile_shader, link_program, CompiledStage, LinkedProgram, ShaderStage};
use super::RenderError;
use crate::geometry::POSITION_LAYOUT;
use crate::scene::SceneConfig;
use crate::shaders::{FRAGMENT_SHADER_SOURCE, POSITION_ATTRIBUTE, VERTEX_SHADER_SOURCE};

/// GPU objects owned by one successful setup pass.
#[derive(Debug)]
pub struct TriangleResources {
    pub vertex: CompiledStage,
    pub fragment: CompiledStage,
    pub program: LinkedProgram,
    pub buffer: VertexBuffer,
    /// Only created on desktop GL, where attribute state needs a bound VAO.
    pub vertex_array: Option<glow::VertexArray>,
    pub attribute: AttributeBinding,
}

impl TriangleResources {
    /// Deletes every object created by the pass.
    #[allow(unsafe_code)]
    pub fn release(self, gl: &glow::Context) {
        use glow::HasContext;

        self.buffer.destroy(gl);
        // SAFETY: all handles were created by render_triangle on this context
        // and are deleted exactly once, since `self` is consumed.
        unsafe {
            if let Some(vao) = self.vertex_array {
                gl.delete_vertex_array(vao);
            }
            gl.use_program(None);
            gl.delete_program(self.program.program);
            gl.delete_shader(self.vertex.shader);
            gl.delete_shader(self.fragment.shader);
        }
        log::debug!("released triangle resources");
    }
}

/// Compiles the vertex and fragment stages, deleting the first if the
/// second fails.
#[allow(unsafe_code)]
fn compile_stages(
    gl: &glow::Context,
    vertex_src: &str,
    fragment_src: &str,
) -> Result<(CompiledStage, CompiledStage), RenderError> {
    use glow::HasContext;

    let vertex = compile_shader(gl, ShaderStage::Vertex, vertex_src)?;
    match compile_shader(gl, ShaderStage::Fragment, fragment_src) {
        Ok(fragment) => Ok((vertex, fragment)),
        Err(e) => {
            // SAFETY: vertex.shader is a valid handle from a successful compile.
            unsafe { gl.delete_shader(vertex.shader) };
            Err(e.into())
        }
    }
}

/// Runs the full setup pass with the built-in shader sources.
///
/// # Errors
///
/// Returns `RenderError::Shader` on a compile or link failure and
/// `RenderError::Resource` if the vertex array or buffer cannot be
/// created. Nothing is left allocated on error.
pub fn render_triangle(
    ctx: &GpuContext,
    scene: &SceneConfig,
) -> Result<TriangleResources, RenderError> {
    render_triangle_with(ctx, scene, VERTEX_SHADER_SOURCE, FRAGMENT_SHADER_SOURCE)
}

/// Runs the setup pass with caller-supplied shader sources.
///
/// The sources must declare the `a_position` attribute for the triangle
/// to be positioned; an undeclared attribute is reported through
/// [`AttributeBinding::Unresolved`] and the draw still happens.
#[allow(unsafe_code)]
pub fn render_triangle_with(
    ctx: &GpuContext,
    scene: &SceneConfig,
    vertex_src: &str,
    fragment_src: &str,
) -> Result<TriangleResources, RenderError> {
    use glow::HasContext;

    let gl = ctx.gl();
    let triangle = scene.triangle()?;

    let (vertex, fragment) = compile_stages(gl, vertex_src, fragment_src)?;

    let release_stages = || {
        // SAFETY: both handles come from compile_stages and are not yet owned
        // by a TriangleResources.
        unsafe {
            gl.delete_shader(vertex.shader);
            gl.delete_shader(fragment.shader);
        }
    };

    let program = match link_program(gl, &vertex, &fragment) {
        Ok(program) => program,
        Err(e) => {
            release_stages();
            return Err(e.into());
        }
    };

    // SAFETY: program linked successfully on this context.
    unsafe { gl.use_program(Some(program.program)) };

    let release_program = || {
        // SAFETY: program is valid and not yet owned by a TriangleResources.
        unsafe {
            gl.use_program(None);
            gl.delete_program(program.program);
        }
        release_stages();
    };

    let vertex_array = if gl.version().is_embedded {
        None
    } else {
        match unsafe { gl.create_vertex_array() } {
            Ok(vao) => {
                unsafe { gl.bind_vertex_array(Some(vao)) };
                Some(vao)
            }
            Err(reason) => {
                release_program();
                return Err(RenderError::Resource {
                    what: "vertex array",
                    reason,
                });
            }
        }
    };

    let buffer = match VertexBuffer::upload(gl, &triangle.to_flat()) {
        Ok(buffer) => buffer,
        Err(e) => {
            if let Some(vao) = vertex_array {
                unsafe { gl.delete_vertex_array(vao) };
            }
            release_program();
            return Err(e);
        }
    };

    let attribute = bind_attribute(gl, &program, POSITION_ATTRIBUTE, &POSITION_LAYOUT);

    draw::clear(gl, scene.clear_color);
    draw::draw_triangles(gl, 0, crate::geometry::VERTEX_COUNT);

    Ok(TriangleResources {
        vertex,
        fragment,
        program,
        buffer,
        vertex_array,
        attribute,
    })
}

