//! PNG output of a rendered [`Frame`].
//!
//! Feature-gated behind `png` (default on) so that callers that only need
//! the reference frame do not pull in the `image` crate.

use std::path::Path;
use triangle_canvas_core::error::CanvasError;
use triangle_canvas_core::frame::Frame;

/// Writes `frame` as an RGBA PNG.
///
/// Returns `CanvasError::Io` on write failure.
pub fn write_png(frame: &Frame, path: &Path) -> Result<(), CanvasError> {
    let size = frame.size();
    let img = image::RgbaImage::from_raw(size.width, size.height, frame.as_bytes().to_vec())
        .ok_or_else(|| CanvasError::Io("RGBA buffer size mismatch".into()))?;
    img.save(path).map_err(|e| CanvasError::Io(e.to_string()))?;
    log::info!("wrote {}x{} snapshot to {}", size.width, size.height, path.display());
    Ok(())
}
