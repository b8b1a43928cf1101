//! Triangle geometry in normalized device coordinates.
//!
//! The canvas draws one upward-pointing triangle. Its vertices are uploaded
//! as six tightly packed `f32`s and the vertex shader passes them straight
//! through to clip space, so NDC here is also what the rasterizer sees.

use crate::canvas::CanvasSize;
use crate::error::CanvasError;
use glam::Vec2;

/// The fixed triangle: top, bottom-left, bottom-right as interleaved (x, y).
pub const TRIANGLE_VERTICES: [f32; 6] = [0.0, 0.6, -0.6, -0.6, 0.6, -0.6];

/// Number of vertices issued by the draw call.
pub const VERTEX_COUNT: i32 = 3;

/// How a vertex attribute reads floats out of the bound array buffer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VertexLayout {
    /// Floats per vertex.
    pub components: i32,
    pub normalized: bool,
    /// Byte stride between vertices; `0` means tightly packed.
    pub stride: i32,
    /// Byte offset of the first component.
    pub offset: i32,
}

/// Layout of `a_position`: two unnormalized floats, packed, no offset.
pub const POSITION_LAYOUT: VertexLayout = VertexLayout {
    components: 2,
    normalized: false,
    stride: 0,
    offset: 0,
};

impl VertexLayout {
    /// Effective distance in bytes between consecutive vertices.
    pub fn byte_stride(&self) -> i32 {
        if self.stride == 0 {
            self.components * std::mem::size_of::<f32>() as i32
        } else {
            self.stride
        }
    }
}

/// A triangle in normalized device coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Triangle {
    pub vertices: [Vec2; 3],
}

fn edge(a: Vec2, b: Vec2, p: Vec2) -> f32 {
    (b - a).perp_dot(p - a)
}

impl Triangle {
    /// Builds a triangle from interleaved `[x0, y0, x1, y1, x2, y2]`.
    pub fn from_flat(data: &[f32]) -> Result<Self, CanvasError> {
        if data.len() != 6 {
            return Err(CanvasError::InvalidVertexData(format!(
                "expected 6 floats, got {}",
                data.len()
            )));
        }
        if let Some(bad) = data.iter().find(|v| !v.is_finite()) {
            return Err(CanvasError::InvalidVertexData(format!(
                "non-finite coordinate {bad}"
            )));
        }
        Ok(Self {
            vertices: [
                Vec2::new(data[0], data[1]),
                Vec2::new(data[2], data[3]),
                Vec2::new(data[4], data[5]),
            ],
        })
    }

    /// Flattens back to the interleaved upload order.
    pub fn to_flat(&self) -> [f32; 6] {
        let [a, b, c] = self.vertices;
        [a.x, a.y, b.x, b.y, c.x, c.y]
    }

    /// Twice the signed area; positive for counter-clockwise winding.
    pub fn signed_area(&self) -> f32 {
        let [a, b, c] = self.vertices;
        edge(a, b, c)
    }

    /// Whether `p` lies inside or on the boundary.
    ///
    /// Works for either winding. A degenerate triangle covers nothing.
    pub fn contains(&self, p: Vec2) -> bool {
        let [a, b, c] = self.vertices;
        let area = self.signed_area();
        if area == 0.0 {
            return false;
        }
        let sign = area.signum();
        let e0 = edge(a, b, p) * sign;
        let e1 = edge(b, c, p) * sign;
        let e2 = edge(c, a, p) * sign;
        e0 >= 0.0 && e1 >= 0.0 && e2 >= 0.0
    }
}

impl Default for Triangle {
    fn default() -> Self {
        // TRIANGLE_VERTICES is a fixed, valid six-float array.
        let [x0, y0, x1, y1, x2, y2] = TRIANGLE_VERTICES;
        Self {
            vertices: [Vec2::new(x0, y0), Vec2::new(x1, y1), Vec2::new(x2, y2)],
        }
    }
}

/// Maps the centre of canvas pixel `(x, y)` to NDC.
///
/// Canvas coordinates have their origin at the top-left with y growing
/// downward; NDC has y growing upward.
pub fn pixel_to_ndc(x: u32, y: u32, size: CanvasSize) -> Vec2 {
    let nx = (x as f32 + 0.5) / size.width as f32 * 2.0 - 1.0;
    let ny = 1.0 - (y as f32 + 0.5) / size.height as f32 * 2.0;
    Vec2::new(nx, ny)
}
