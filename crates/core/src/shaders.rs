//! GLSL ES 1.00 sources for the triangle program (WebGL 1).
//!
//! Both stages are embedded constants: the vertex stage passes the 2D
//! position through to clip space with z = 0 and w = 1, and the fragment
//! stage writes a constant orange.

/// Name of the single per-vertex input of the vertex stage.
pub const POSITION_ATTRIBUTE: &str = "a_position";

/// Vertex stage: `a_position` to clip space.
pub const VERTEX_SHADER_SOURCE: &str = r#"attribute vec2 a_position;
void main() {
    gl_Position = vec4(a_position, 0.0, 1.0);
}
"#;

/// Fragment stage: constant RGBA (1, 0.5, 0, 1) for every covered pixel.
pub const FRAGMENT_SHADER_SOURCE: &str = r#"precision mediump float;
void main() {
    gl_FragColor = vec4(1.0, 0.5, 0.0, 1.0);
}
"#;
