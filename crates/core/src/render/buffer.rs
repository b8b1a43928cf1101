//! Static vertex buffer upload.

use super::RenderError;

/// A GPU array buffer holding packed `f32` vertex data.
#[derive(Debug)]
pub struct VertexBuffer {
    buffer: glow::Buffer,
    floats: usize,
}

impl VertexBuffer {
    /// Creates a buffer, binds it as `ARRAY_BUFFER`, and copies `data`
    /// into it with a `STATIC_DRAW` usage hint.
    ///
    /// The buffer stays bound so the attribute binding that follows reads
    /// from it.
    ///
    /// # Errors
    ///
    /// Returns `RenderError::Resource` if the buffer cannot be created.
    #[allow(unsafe_code)]
    pub fn upload(gl: &glow::Context, data: &[f32]) -> Result<Self, RenderError> {
        use glow::HasContext;

        // SAFETY: the buffer is freshly created and bound before the upload;
        // `data` is a valid slice for the duration of the call.
        let buffer = unsafe {
            gl.create_buffer()
                .map_err(RenderError::resource("vertex buffer"))?
        };
        unsafe {
            gl.bind_buffer(glow::ARRAY_BUFFER, Some(buffer));
            gl.buffer_data_u8_slice(
                glow::ARRAY_BUFFER,
                bytemuck::cast_slice(data),
                glow::STATIC_DRAW,
            );
        }
        log::debug!("uploaded {} floats", data.len());

        Ok(Self {
            buffer,
            floats: data.len(),
        })
    }

    /// Binds this buffer and copies its contents back to the host.
    ///
    /// Native contexts map the buffer (GL 3.0 / GLES 3.0); WebGL needs
    /// `getBufferSubData`, which only WebGL 2 has.
    ///
    /// # Errors
    ///
    /// Returns `RenderError::Resource` if the buffer cannot be mapped.
    #[allow(unsafe_code)]
    pub fn read_back(&self, gl: &glow::Context) -> Result<Vec<f32>, RenderError> {
        use glow::HasContext;

        if self.is_empty() {
            return Ok(Vec::new());
        }

        let mut out = vec![0.0f32; self.floats];
        let bytes: &mut [u8] = bytemuck::cast_slice_mut(&mut out);

        // SAFETY: `bytes` is exactly the uploaded size, so the read stays in bounds.
        #[cfg(target_arch = "wasm32")]
        unsafe {
            gl.bind_buffer(glow::ARRAY_BUFFER, Some(self.buffer));
            gl.get_buffer_sub_data(glow::ARRAY_BUFFER, 0, bytes);
        }

        // SAFETY: the mapped range is `bytes.len()` long and is only read
        // between the map and unmap calls.
        #[cfg(not(target_arch = "wasm32"))]
        unsafe {
            gl.bind_buffer(glow::ARRAY_BUFFER, Some(self.buffer));
            let mapped = gl.map_buffer_range(
                glow::ARRAY_BUFFER,
                0,
                bytes.len() as i32,
                glow::MAP_READ_BIT,
            );
            if mapped.is_null() {
                return Err(RenderError::Resource {
                    what: "vertex buffer",
                    reason: "map for readback failed".into(),
                });
            }
            bytes.copy_from_slice(std::slice::from_raw_parts(mapped, bytes.len()));
            gl.unmap_buffer(glow::ARRAY_BUFFER);
        }

        Ok(out)
    }

    pub fn buffer(&self) -> glow::Buffer {
        self.buffer
    }

    /// Number of floats uploaded.
    pub fn len(&self) -> usize {
        self.floats
    }

    pub fn is_empty(&self) -> bool {
        self.floats == 0
    }

    /// Deletes the GPU buffer.
    #[allow(unsafe_code)]
    pub fn destroy(&self, gl: &glow::Context) {
        use glow::HasContext;

        // SAFETY: self.buffer is a valid handle from upload().
        unsafe { gl.delete_buffer(self.buffer) };
    }
}
