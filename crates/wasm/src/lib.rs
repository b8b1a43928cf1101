#![deny(unsafe_code)]
//! Browser component for the triangle canvas.
//!
//! The component owns one `<canvas>` element. Mounting acquires a WebGL 1
//! context, runs the setup pass once, and leaves the triangle on screen;
//! unmounting releases the GPU objects. Diagnostics go to the browser
//! console through `log`.

#[cfg(target_arch = "wasm32")]
mod component;

#[cfg(target_arch = "wasm32")]
pub use component::TriangleCanvas;

use triangle_canvas_core::CanvasSize;

/// Context type requested from the canvas element.
pub const CONTEXT_KIND: &str = "webgl";

/// Size the component gives a canvas it creates itself.
pub const CANVAS_SIZE: CanvasSize = CanvasSize::DEFAULT;

/// Reads the drawing-buffer size of an existing canvas, falling back to
/// the fixed size when the element reports a zero side.
pub fn surface_size(width: u32, height: u32) -> CanvasSize {
    CanvasSize::new(width, height).unwrap_or_else(|_| {
        log::warn!("canvas reports {width}x{height}, using {}x{}", CANVAS_SIZE.width, CANVAS_SIZE.height);
        CANVAS_SIZE
    })
}
