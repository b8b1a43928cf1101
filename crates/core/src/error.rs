//! Error types for the triangle canvas core.

use thiserror::Error;

/// Errors produced by scene, geometry, and frame operations.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum CanvasError {
    /// Width or height was zero when creating a canvas or frame.
    #[error("invalid dimensions: width and height must be non-zero")]
    InvalidDimensions,

    /// Vertex data did not describe exactly one triangle of finite 2D positions.
    #[error("invalid vertex data: {0}")]
    InvalidVertexData(String),

    /// A color string could not be parsed.
    #[error("invalid color: {0}")]
    InvalidColor(String),

    /// A scene description could not be read.
    #[error("invalid scene: {0}")]
    InvalidScene(String),

    /// An (x, y) pixel coordinate was outside the frame.
    #[error("pixel ({x}, {y}) out of bounds for frame of size ({width}, {height})")]
    OutOfBounds {
        x: u32,
        y: u32,
        width: u32,
        height: u32,
    },

    /// Writing a snapshot or reading a scene file failed.
    #[error("i/o error: {0}")]
    Io(String),
}
