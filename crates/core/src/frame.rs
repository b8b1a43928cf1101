//! RGBA8 pixel frames in canvas order.
//!
//! A `Frame` is what a canvas shows: rows run top to bottom. GL readback
//! returns rows bottom to top, so [`Frame::from_bottom_up`] flips them on
//! the way in.

use crate::canvas::CanvasSize;
use crate::color::Rgba;
use crate::error::CanvasError;

/// An 8-bit RGBA image, row-major from the top-left pixel.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Frame {
    size: CanvasSize,
    pixels: Vec<u8>,
}

impl Frame {
    /// A frame with every pixel set to `color`.
    pub fn filled(size: CanvasSize, color: Rgba) -> Result<Self, CanvasError> {
        size.validate()?;
        let rgba = color.to_rgba8();
        let pixels = std::iter::repeat(rgba)
            .take(size.pixel_count())
            .flatten()
            .collect();
        Ok(Self { size, pixels })
    }

    /// Builds a frame from bytes whose first row is the bottom of the image.
    pub fn from_bottom_up(size: CanvasSize, bytes: &[u8]) -> Result<Self, CanvasError> {
        size.validate()?;
        let row_len = size.width as usize * 4;
        if bytes.len() != row_len * size.height as usize {
            return Err(CanvasError::InvalidDimensions);
        }
        let pixels = bytes
            .chunks_exact(row_len)
            .rev()
            .flatten()
            .copied()
            .collect();
        Ok(Self { size, pixels })
    }

    pub fn size(&self) -> CanvasSize {
        self.size
    }

    fn index(&self, x: u32, y: u32) -> Option<usize> {
        self.size
            .contains(x, y)
            .then(|| (y as usize * self.size.width as usize + x as usize) * 4)
    }

    /// The pixel at `(x, y)` from the top-left, or `None` outside the frame.
    pub fn pixel(&self, x: u32, y: u32) -> Option<[u8; 4]> {
        let i = self.index(x, y)?;
        Some([
            self.pixels[i],
            self.pixels[i + 1],
            self.pixels[i + 2],
            self.pixels[i + 3],
        ])
    }

    /// Overwrites the pixel at `(x, y)`.
    pub fn set_pixel(&mut self, x: u32, y: u32, rgba: [u8; 4]) -> Result<(), CanvasError> {
        let i = self.index(x, y).ok_or(CanvasError::OutOfBounds {
            x,
            y,
            width: self.size.width,
            height: self.size.height,
        })?;
        self.pixels[i..i + 4].copy_from_slice(&rgba);
        Ok(())
    }

    /// Raw RGBA bytes, top row first.
    pub fn as_bytes(&self) -> &[u8] {
        &self.pixels
    }

    pub fn into_bytes(self) -> Vec<u8> {
        self.pixels
    }

    /// Number of pixels exactly equal to `rgba`.
    pub fn count_color(&self, rgba: [u8; 4]) -> usize {
        self.pixels
            .chunks_exact(4)
            .filter(|px| *px == rgba.as_slice())
            .count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color::{CLEAR_COLOR, TRIANGLE_COLOR};

    #[test]
    fn filled_frame_has_uniform_color() {
        let size = CanvasSize::new(4, 3).unwrap();
        let frame = Frame::filled(size, CLEAR_COLOR).unwrap();
        assert_eq!(frame.as_bytes().len(), 4 * 3 * 4);
        assert_eq!(frame.count_color([0, 51, 51, 255]), 12);
    }

    #[test]
    fn filled_rejects_zero_size() {
        let size = CanvasSize {
            width: 0,
            height: 4,
        };
        assert_eq!(
            Frame::filled(size, CLEAR_COLOR),
            Err(CanvasError::InvalidDimensions)
        );
    }

    #[test]
    fn filled_rejects_oversized_size_without_allocating() {
        let size = CanvasSize {
            width: 200_000,
            height: 200_000,
        };
        assert_eq!(
            Frame::filled(size, CLEAR_COLOR),
            Err(CanvasError::InvalidDimensions)
        );
    }

    #[test]
    fn pixel_outside_frame_is_none() {
        let frame = Frame::filled(CanvasSize::new(2, 2).unwrap(), CLEAR_COLOR).unwrap();
        assert!(frame.pixel(2, 0).is_none());
        assert!(frame.pixel(0, 2).is_none());
    }

    #[test]
    fn set_pixel_writes_only_that_pixel() {
        let mut frame = Frame::filled(CanvasSize::new(3, 3).unwrap(), CLEAR_COLOR).unwrap();
        frame.set_pixel(1, 2, TRIANGLE_COLOR.to_rgba8()).unwrap();
        assert_eq!(frame.pixel(1, 2), Some([255, 128, 0, 255]));
        assert_eq!(frame.count_color([255, 128, 0, 255]), 1);
    }

    #[test]
    fn set_pixel_out_of_bounds_errors() {
        let mut frame = Frame::filled(CanvasSize::new(3, 3).unwrap(), CLEAR_COLOR).unwrap();
        let err = frame.set_pixel(3, 0, [0; 4]).unwrap_err();
        assert!(matches!(err, CanvasError::OutOfBounds { x: 3, .. }));
    }

    #[test]
    fn from_bottom_up_flips_rows() {
        let size = CanvasSize::new(1, 2).unwrap();
        // Bottom row red, top row blue, as GL would return them.
        let bytes = [255, 0, 0, 255, 0, 0, 255, 255];
        let frame = Frame::from_bottom_up(size, &bytes).unwrap();
        assert_eq!(frame.pixel(0, 0), Some([0, 0, 255, 255]));
        assert_eq!(frame.pixel(0, 1), Some([255, 0, 0, 255]));
    }

    #[test]
    fn from_bottom_up_rejects_wrong_length() {
        let size = CanvasSize::new(2, 2).unwrap();
        assert_eq!(
            Frame::from_bottom_up(size, &[0; 15]),
            Err(CanvasError::InvalidDimensions)
        );
    }
}
