//! RGBA colors used for clearing and filling the canvas.
//!
//! Colors are stored as normalized `f32` components, the form GL takes for
//! `clear_color` and writes from a fragment shader. Conversion to 8-bit
//! matches what an RGBA8 framebuffer stores after the draw.

use crate::error::CanvasError;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Linear RGBA color with components in [0, 1].
///
/// Serializes as a hex string `"#rrggbbaa"` so scene files stay readable.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rgba {
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub a: f32,
}

/// Background the canvas is cleared to before drawing (grey-teal).
pub const CLEAR_COLOR: Rgba = Rgba::new(0.0, 0.2, 0.2, 1.0);

/// Constant color emitted by the fragment shader (orange).
pub const TRIANGLE_COLOR: Rgba = Rgba::new(1.0, 0.5, 0.0, 1.0);

/// Quantizes one normalized component the way an RGBA8 target stores it.
fn quantize(c: f32) -> u8 {
    (c.clamp(0.0, 1.0) * 255.0).round() as u8
}

impl Rgba {
    pub const fn new(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self { r, g, b, a }
    }

    /// Returns the components as an array in RGBA order.
    pub fn to_array(self) -> [f32; 4] {
        [self.r, self.g, self.b, self.a]
    }

    /// Converts to the 8-bit value a framebuffer readback returns.
    ///
    /// Components are clamped, scaled by 255, and rounded half away from
    /// zero, so `0.2` becomes `51` and `0.5` becomes `128`.
    pub fn to_rgba8(self) -> [u8; 4] {
        [
            quantize(self.r),
            quantize(self.g),
            quantize(self.b),
            quantize(self.a),
        ]
    }

    /// Parses `"#rrggbb"` or `"#rrggbbaa"` (the `#` is optional, case insensitive).
    ///
    /// Six-digit colors are fully opaque.
    pub fn from_hex(hex: &str) -> Result<Rgba, CanvasError> {
        let hex = hex.strip_prefix('#').unwrap_or(hex);
        if hex.len() != 6 && hex.len() != 8 {
            return Err(CanvasError::InvalidColor(format!(
                "expected 6 or 8 hex digits, got {}",
                hex.len()
            )));
        }
        if !hex.is_ascii() {
            return Err(CanvasError::InvalidColor(format!("non-ascii color '{hex}'")));
        }

        let component = |range: std::ops::Range<usize>, name: &str| {
            u8::from_str_radix(&hex[range], 16)
                .map(|v| v as f32 / 255.0)
                .map_err(|e| CanvasError::InvalidColor(format!("invalid {name} component: {e}")))
        };

        let r = component(0..2, "red")?;
        let g = component(2..4, "green")?;
        let b = component(4..6, "blue")?;
        let a = if hex.len() == 8 {
            component(6..8, "alpha")?
        } else {
            1.0
        };
        Ok(Rgba { r, g, b, a })
    }

    /// Formats as `"#rrggbbaa"` using the 8-bit quantization of [`Rgba::to_rgba8`].
    pub fn to_hex(self) -> String {
        let [r, g, b, a] = self.to_rgba8();
        format!("#{r:02x}{g:02x}{b:02x}{a:02x}")
    }
}

impl Serialize for Rgba {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_hex())
    }
}

impl<'de> Deserialize<'de> for Rgba {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        Rgba::from_hex(&s).map_err(serde::de::Error::custom)
    }
}
