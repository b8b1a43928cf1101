//! Scene description: what gets drawn and onto what.
//!
//! The default scene is the fixed one the browser component renders. A
//! scene file (JSON) can override any field for off-screen snapshots;
//! missing fields keep their defaults. The triangle's fill is not part of
//! the scene: the fragment shader hard-codes it.

use crate::canvas::CanvasSize;
use crate::color::{Rgba, CLEAR_COLOR};
use crate::error::CanvasError;
use crate::geometry::{Triangle, TRIANGLE_VERTICES};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Everything the setup pass needs besides the shader sources.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SceneConfig {
    pub size: CanvasSize,
    pub clear_color: Rgba,
    /// Interleaved (x, y) positions in NDC.
    pub vertices: Vec<f32>,
}

impl Default for SceneConfig {
    fn default() -> Self {
        Self {
            size: CanvasSize::DEFAULT,
            clear_color: CLEAR_COLOR,
            vertices: TRIANGLE_VERTICES.to_vec(),
        }
    }
}

impl SceneConfig {
    /// Reads a scene from a JSON object and validates it.
    ///
    /// `null` and `{}` both yield the default scene.
    pub fn from_json(value: &Value) -> Result<Self, CanvasError> {
        let scene: SceneConfig = if value.is_null() {
            SceneConfig::default()
        } else {
            serde_json::from_value(value.clone())
                .map_err(|e| CanvasError::InvalidScene(e.to_string()))?
        };
        scene.validate()?;
        Ok(scene)
    }

    /// Parses and validates a scene from JSON text.
    pub fn from_json_str(text: &str) -> Result<Self, CanvasError> {
        let value: Value =
            serde_json::from_str(text).map_err(|e| CanvasError::InvalidScene(e.to_string()))?;
        Self::from_json(&value)
    }

    /// Checks the canvas size and that the vertices form one triangle.
    pub fn validate(&self) -> Result<(), CanvasError> {
        self.size.validate()?;
        Triangle::from_flat(&self.vertices)?;
        Ok(())
    }

    /// The triangle described by `vertices`.
    pub fn triangle(&self) -> Result<Triangle, CanvasError> {
        Triangle::from_flat(&self.vertices)
    }

    /// The scene as a JSON value.
    pub fn to_json(&self) -> Value {
        serde_json::to_value(self).unwrap_or(Value::Null)
    }
}
