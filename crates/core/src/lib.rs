#![deny(unsafe_code)]
//! Core types for the triangle canvas.
//!
//! Provides the fixed scene (`SceneConfig`, `CanvasSize`, `Rgba`,
//! `Triangle`), the embedded shader sources, RGBA8 `Frame`s, and, behind
//! the `render` feature, the `glow` setup pass that draws the triangle on
//! a WebGL or OpenGL context.

pub mod canvas;
pub mod color;
pub mod error;
pub mod frame;
pub mod geometry;
pub mod scene;
pub mod shaders;

#[cfg(feature = "render")]
pub mod render;

pub use canvas::CanvasSize;
pub use color::{Rgba, CLEAR_COLOR, TRIANGLE_COLOR};
pub use error::CanvasError;
pub use frame::Frame;
pub use geometry::{Triangle, VertexLayout, POSITION_LAYOUT, TRIANGLE_VERTICES, VERTEX_COUNT};
pub use scene::SceneConfig;
