//! Drawable surface dimensions.
//!
//! The browser component renders into a fixed 400x400 canvas; other sizes
//! exist only for scene files and off-screen snapshots.

use crate::error::CanvasError;
use serde::{Deserialize, Serialize};

/// Pixel dimensions of a drawable surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CanvasSize {
    pub width: u32,
    pub height: u32,
}

impl CanvasSize {
    /// The fixed size of the embedded canvas element.
    pub const DEFAULT: CanvasSize = CanvasSize {
        width: 400,
        height: 400,
    };

    /// Largest accepted side, matching the common `MAX_TEXTURE_SIZE` floor
    /// of desktop GPUs. Also keeps both sides within `i32` for GL calls.
    pub const MAX_SIDE: u32 = 16384;

    /// Creates a size, rejecting a zero side or one above [`Self::MAX_SIDE`].
    pub fn new(width: u32, height: u32) -> Result<Self, CanvasError> {
        let size = Self { width, height };
        size.validate()?;
        Ok(size)
    }

    /// Returns `InvalidDimensions` if either side is zero or larger than
    /// [`Self::MAX_SIDE`].
    ///
    /// Deserialized sizes bypass [`CanvasSize::new`], so scenes call this
    /// after loading.
    pub fn validate(&self) -> Result<(), CanvasError> {
        let in_range = |side: u32| (1..=Self::MAX_SIDE).contains(&side);
        if !in_range(self.width) || !in_range(self.height) {
            return Err(CanvasError::InvalidDimensions);
        }
        Ok(())
    }

    /// Total number of pixels.
    pub fn pixel_count(&self) -> usize {
        self.width as usize * self.height as usize
    }

    /// Integer pixel at the middle of the surface.
    pub fn center(&self) -> (u32, u32) {
        (self.width / 2, self.height / 2)
    }

    /// Whether `(x, y)` addresses a pixel on this surface.
    pub fn contains(&self, x: u32, y: u32) -> bool {
        x < self.width && y < self.height
    }
}

impl Default for CanvasSize {
    fn default() -> Self {
        Self::DEFAULT
    }
}
