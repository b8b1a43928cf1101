//! Clear and draw calls.

use crate::color::Rgba;

/// Clears the color buffer of the bound framebuffer to `color`.
///
/// Depth and stencil are left alone; the canvas has neither.
#[allow(unsafe_code)]
pub fn clear(gl: &glow::Context, color: Rgba) {
    use glow::HasContext;

    // SAFETY: plain state-setting and clear calls with no handles involved.
    unsafe {
        gl.clear_color(color.r, color.g, color.b, color.a);
        gl.clear(glow::COLOR_BUFFER_BIT);
    }
}

/// Draws `count` vertices as a triangle list starting at `first`, using
/// the current program and attribute bindings.
#[allow(unsafe_code)]
pub fn draw_triangles(gl: &glow::Context, first: i32, count: i32) {
    use glow::HasContext;

    // SAFETY: the caller has a linked program in use; out-of-range vertices
    // are a GL error, not undefined behaviour.
    unsafe { gl.draw_arrays(glow::TRIANGLES, first, count) };
    log::debug!("drew {count} vertices from {first}");
}
