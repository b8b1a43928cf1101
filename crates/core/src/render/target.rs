//! Off-screen render target for pixel readback.
//!
//! A `RenderTarget` pairs a framebuffer object with an RGBA8 color
//! texture the size of the canvas. Drawing into it instead of the default
//! framebuffer lets a headless context read back exactly what the canvas
//! would show.

use super::RenderError;
use crate::canvas::CanvasSize;
use crate::frame::Frame;

/// An off-screen framebuffer with an RGBA8 color attachment.
pub struct RenderTarget {
    fbo: glow::Framebuffer,
    texture: glow::Texture,
    size: CanvasSize,
}

impl RenderTarget {
    /// Creates a framebuffer with a new RGBA8 texture as `COLOR_ATTACHMENT0`
    /// and verifies completeness.
    ///
    /// # Errors
    ///
    /// Returns `RenderError::Resource` if either object cannot be created
    /// or the framebuffer is incomplete.
    #[allow(unsafe_code)]
    pub fn new(gl: &glow::Context, size: CanvasSize) -> Result<Self, RenderError> {
        use glow::HasContext;

        size.validate()?;

        // SAFETY: glow wraps raw GL calls as unsafe. Every object created here
        // is deleted on the failure paths below.
        let texture = unsafe {
            gl.create_texture()
                .map_err(RenderError::resource("target texture"))?
        };

        unsafe {
            gl.bind_texture(glow::TEXTURE_2D, Some(texture));
            gl.tex_parameter_i32(
                glow::TEXTURE_2D,
                glow::TEXTURE_MIN_FILTER,
                glow::NEAREST as i32,
            );
            gl.tex_parameter_i32(
                glow::TEXTURE_2D,
                glow::TEXTURE_MAG_FILTER,
                glow::NEAREST as i32,
            );
            gl.tex_image_2d(
                glow::TEXTURE_2D,
                0,
                glow::RGBA as i32,
                size.width as i32,
                size.height as i32,
                0,
                glow::RGBA,
                glow::UNSIGNED_BYTE,
                glow::PixelUnpackData::Slice(None),
            );
            gl.bind_texture(glow::TEXTURE_2D, None);
        }

        let fbo = match unsafe { gl.create_framebuffer() } {
            Ok(fbo) => fbo,
            Err(reason) => {
                unsafe { gl.delete_texture(texture) };
                return Err(RenderError::Resource {
                    what: "framebuffer",
                    reason,
                });
            }
        };

        unsafe {
            gl.bind_framebuffer(glow::FRAMEBUFFER, Some(fbo));
            gl.framebuffer_texture_2d(
                glow::FRAMEBUFFER,
                glow::COLOR_ATTACHMENT0,
                glow::TEXTURE_2D,
                Some(texture),
                0,
            );

            let status = gl.check_framebuffer_status(glow::FRAMEBUFFER);
            gl.bind_framebuffer(glow::FRAMEBUFFER, None);

            if status != glow::FRAMEBUFFER_COMPLETE {
                gl.delete_framebuffer(fbo);
                gl.delete_texture(texture);
                return Err(RenderError::Resource {
                    what: "framebuffer",
                    reason: format!("incomplete: status 0x{status:04X}"),
                });
            }
        }

        Ok(Self { fbo, texture, size })
    }

    /// Binds this target as the draw framebuffer and sets the viewport to
    /// its size.
    #[allow(unsafe_code)]
    pub fn bind(&self, gl: &glow::Context) {
        use glow::HasContext;

        // SAFETY: self.fbo is a valid framebuffer handle created in new().
        unsafe {
            gl.bind_framebuffer(glow::FRAMEBUFFER, Some(self.fbo));
            gl.viewport(0, 0, self.size.width as i32, self.size.height as i32);
        }
    }

    /// Reads the whole target back as a top-to-bottom [`Frame`].
    ///
    /// # Errors
    ///
    /// Returns `RenderError::Canvas` if the readback size does not match.
    #[allow(unsafe_code)]
    pub fn read_frame(&self, gl: &glow::Context) -> Result<Frame, RenderError> {
        use glow::HasContext;

        let mut bytes = vec![0u8; self.size.pixel_count() * 4];
        // SAFETY: `bytes` holds exactly width * height RGBA8 pixels.
        unsafe {
            gl.bind_framebuffer(glow::FRAMEBUFFER, Some(self.fbo));
            gl.read_pixels(
                0,
                0,
                self.size.width as i32,
                self.size.height as i32,
                glow::RGBA,
                glow::UNSIGNED_BYTE,
                glow::PixelPackData::Slice(Some(bytes.as_mut_slice())),
            );
            gl.bind_framebuffer(glow::FRAMEBUFFER, None);
        }

        Ok(Frame::from_bottom_up(self.size, &bytes)?)
    }

    pub fn texture(&self) -> glow::Texture {
        self.texture
    }

    pub fn size(&self) -> CanvasSize {
        self.size
    }

    /// Deletes the framebuffer and texture.
    #[allow(unsafe_code)]
    pub fn destroy(&self, gl: &glow::Context) {
        use glow::HasContext;

        // SAFETY: self.fbo and self.texture are valid handles from new().
        unsafe {
            gl.delete_framebuffer(self.fbo);
            gl.delete_texture(self.texture);
        }
    }
}

