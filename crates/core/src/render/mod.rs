//! WebGL / OpenGL rendering of the triangle canvas through `glow`.
//!
//! This module is only available when the `render` feature is enabled.
//! Each step of the setup pass lives in its own module and takes the GL
//! context explicitly; [`pipeline`] runs them in order and [`lifecycle`]
//! ties one run to a mount.
//!
//! # Module overview
//!
//! - [`context`] -- GPU context wrapper carrying the canvas size.
//! - [`shader`] -- Shader compilation, linking, and error formatting.
//! - [`buffer`] -- Static vertex buffer upload and readback.
//! - [`attribute`] -- Attribute lookup and vertex layout binding.
//! - [`draw`] -- Clear and draw calls.
//! - [`target`] -- Off-screen RGBA8 framebuffer for pixel readback.
//! - [`pipeline`] -- The ordered compile/link/upload/draw pass.
//! - [`lifecycle`] -- Run-once-per-mount state with explicit release.

pub mod attribute;
pub mod buffer;
pub mod context;
pub mod draw;
pub mod lifecycle;
pub mod pipeline;
pub mod shader;
pub mod target;

use crate::error::CanvasError;
use thiserror::Error;

pub use attribute::{bind_attribute, AttributeBinding};
pub use buffer::VertexBuffer;
pub use context::GpuContext;
pub use lifecycle::{LifecycleState, TriangleLifecycle};
pub use pipeline::{render_triangle, TriangleResources};
pub use shader::{
    compile_shader, format_shader_error, link_program, CompiledStage, LinkedProgram, ShaderError,
    ShaderStage,
};
pub use target::RenderTarget;

/// Errors that end a render attempt.
#[derive(Debug, Clone, Error)]
pub enum RenderError {
    /// No rendering context could be obtained for the surface.
    #[error("rendering context unavailable: {0}")]
    ContextUnavailable(String),

    /// A shader stage failed to compile or the program failed to link.
    #[error(transparent)]
    Shader(#[from] ShaderError),

    /// The backend refused to create an object.
    #[error("failed to create {what}: {reason}")]
    Resource { what: &'static str, reason: String },

    #[error(transparent)]
    Canvas(#[from] CanvasError),
}

impl RenderError {
    pub(crate) fn resource(what: &'static str) -> impl FnOnce(String) -> RenderError {
        move |reason| RenderError::Resource { what, reason }
    }
}
