//! Vertex attribute lookup and layout binding.
//!
//! GL reports an unknown attribute name with a "not found" location. The
//! lookup here turns that into [`AttributeBinding::Unresolved`] and skips
//! the enable/pointer calls; the draw that follows still runs and the
//! stage sees its attribute default.

use super::shader::LinkedProgram;
use crate::geometry::VertexLayout;

/// Outcome of binding a named attribute to the current array buffer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AttributeBinding {
    /// The attribute was found and its array input enabled.
    Bound { location: u32 },
    /// The program has no active attribute with this name.
    Unresolved { name: String },
}

impl AttributeBinding {
    pub fn is_bound(&self) -> bool {
        matches!(self, AttributeBinding::Bound { .. })
    }

    pub fn location(&self) -> Option<u32> {
        match self {
            AttributeBinding::Bound { location } => Some(*location),
            AttributeBinding::Unresolved { .. } => None,
        }
    }
}

/// Resolves `name` in `program`, enables it as a per-vertex array, and
/// describes `layout` against the currently bound `ARRAY_BUFFER`.
#[allow(unsafe_code)]
pub fn bind_attribute(
    gl: &glow::Context,
    program: &LinkedProgram,
    name: &str,
    layout: &VertexLayout,
) -> AttributeBinding {
    use glow::HasContext;

    // SAFETY: program is a linked program handle; the pointer call reads from
    // the array buffer bound by the preceding upload.
    let Some(location) = (unsafe { gl.get_attrib_location(program.program, name) }) else {
        log::warn!("attribute '{name}' not found in program, drawing without it");
        return AttributeBinding::Unresolved {
            name: name.to_string(),
        };
    };

    unsafe {
        gl.enable_vertex_attrib_array(location);
        gl.vertex_attrib_pointer_f32(
            location,
            layout.components,
            glow::FLOAT,
            layout.normalized,
            layout.stride,
            layout.offset,
        );
    }
    log::debug!("bound attribute '{name}' at location {location}");

    AttributeBinding::Bound { location }
}
