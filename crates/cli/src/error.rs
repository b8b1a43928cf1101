//! Structured CLI errors with meaningful exit codes.
//!
//! Exit code scheme:
//! - 0:  success
//! - 2:  clap arg parse error (automatic, before our code runs)
//! - 10: canvas error (invalid scene, dimensions, vertices, colors)
//! - 11: I/O error (scene file read, PNG write)
//! - 12: input error (pixel outside the canvas)
//! - 13: serialization error

use std::fmt;
use triangle_canvas_core::CanvasError;

/// Errors produced by CLI operations, each mapped to a distinct exit code.
#[derive(Debug)]
pub enum CliError {
    Canvas(CanvasError),
    Io(String),
    Input(String),
    Serialization(String),
}

impl CliError {
    /// Returns the process exit code for this error.
    pub fn exit_code(&self) -> i32 {
        match self {
            CliError::Canvas(_) => 10,
            CliError::Io(_) => 11,
            CliError::Input(_) => 12,
            CliError::Serialization(_) => 13,
        }
    }
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CliError::Canvas(e) => write!(f, "{e}"),
            CliError::Io(msg) | CliError::Input(msg) | CliError::Serialization(msg) => {
                write!(f, "{msg}")
            }
        }
    }
}

impl From<CanvasError> for CliError {
    fn from(e: CanvasError) -> Self {
        match e {
            CanvasError::Io(msg) => CliError::Io(msg),
            CanvasError::OutOfBounds { .. } => CliError::Input(e.to_string()),
            other => CliError::Canvas(other),
        }
    }
}

impl From<serde_json::Error> for CliError {
    fn from(e: serde_json::Error) -> Self {
        CliError::Serialization(e.to_string())
    }
}
