//! GPU context wrapper.
//!
//! `GpuContext` owns the `glow::Context` for one canvas and the canvas
//! size. Every setup step borrows it instead of reaching for ambient
//! backend state, so the surface a call targets is always explicit.

use super::RenderError;
use crate::canvas::CanvasSize;

/// Wraps a `glow::Context` bound to a drawable surface of known size.
pub struct GpuContext {
    gl: glow::Context,
    size: CanvasSize,
    version: String,
}

impl GpuContext {
    /// Wraps `gl` and sets the viewport to cover the whole surface.
    ///
    /// # Errors
    ///
    /// Returns `RenderError::Canvas` if `size` has a zero side.
    #[allow(unsafe_code)]
    pub fn new(gl: glow::Context, size: CanvasSize) -> Result<Self, RenderError> {
        use glow::HasContext;

        size.validate()?;

        let version = format!("{:?}", gl.version());
        log::debug!("gl context {version}, surface {}x{}", size.width, size.height);

        // SAFETY: the viewport covers a validated, non-zero surface.
        unsafe {
            gl.viewport(0, 0, size.width as i32, size.height as i32);
        }

        Ok(Self { gl, size, version })
    }

    /// Returns a reference to the underlying `glow::Context`.
    pub fn gl(&self) -> &glow::Context {
        &self.gl
    }

    /// Consumes this wrapper and returns the underlying `glow::Context`.
    pub fn into_gl(self) -> glow::Context {
        self.gl
    }

    /// Size of the surface this context draws into.
    pub fn size(&self) -> CanvasSize {
        self.size
    }

    /// Backend version as reported at creation.
    pub fn version(&self) -> &str {
        &self.version
    }
}

