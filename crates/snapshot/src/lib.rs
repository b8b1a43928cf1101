#![deny(unsafe_code)]
//! CPU reference rendering and PNG snapshots for the triangle canvas.
//!
//! [`raster`] produces the frame a correct GPU setup pass leaves on the
//! canvas, pixel for pixel, without a GPU. The CLI writes it to disk, and
//! `tests/gpu_readback.rs` compares it with frames read back from a
//! headless EGL context.

pub mod raster;

#[cfg(feature = "png")]
pub mod snapshot;

pub use raster::{clear_only, rasterize};
