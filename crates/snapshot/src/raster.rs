//! Pure-computation rasterization of a [`SceneConfig`].
//!
//! Mirrors the two visible steps of the setup pass: clear to the
//! background color, then fill every pixel whose centre falls inside the
//! triangle. Pixel centres are sampled at (x + 0.5, y + 0.5), as GL does.
//! The fill is always [`TRIANGLE_COLOR`], the constant the fragment shader
//! writes.

use triangle_canvas_core::color::TRIANGLE_COLOR;
use triangle_canvas_core::error::CanvasError;
use triangle_canvas_core::frame::Frame;
use triangle_canvas_core::geometry::pixel_to_ndc;
use triangle_canvas_core::scene::SceneConfig;

/// The canvas after the clear and before the draw call.
pub fn clear_only(scene: &SceneConfig) -> Result<Frame, CanvasError> {
    scene.validate()?;
    Frame::filled(scene.size, scene.clear_color)
}

/// The canvas after the draw call.
pub fn rasterize(scene: &SceneConfig) -> Result<Frame, CanvasError> {
    let mut frame = clear_only(scene)?;
    let triangle = scene.triangle()?;
    let fill = TRIANGLE_COLOR.to_rgba8();
    let size = scene.size;

    let mut covered = 0usize;
    for y in 0..size.height {
        for x in 0..size.width {
            if triangle.contains(pixel_to_ndc(x, y, size)) {
                frame.set_pixel(x, y, fill)?;
                covered += 1;
            }
        }
    }
    log::debug!(
        "rasterized {covered} of {} pixels at {}x{}",
        size.pixel_count(),
        size.width,
        size.height
    );

    Ok(frame)
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use triangle_canvas_core::canvas::CanvasSize;
    use triangle_canvas_core::color::Rgba;

    const CLEAR: [u8; 4] = [0, 51, 51, 255];
    const ORANGE: [u8; 4] = [255, 128, 0, 255];

    #[test]
    fn clear_only_has_no_triangle_pixels() {
        let frame = clear_only(&SceneConfig::default()).unwrap();
        assert_eq!(frame.count_color(ORANGE), 0);
        assert_eq!(frame.count_color(CLEAR), 400 * 400);
    }

    #[test]
    fn corners_stay_clear_color() {
        let frame = rasterize(&SceneConfig::default()).unwrap();
        for (x, y) in [(0, 0), (399, 0), (0, 399), (399, 399)] {
            assert_eq!(frame.pixel(x, y), Some(CLEAR), "corner ({x}, {y})");
        }
    }

    #[test]
    fn covered_area_is_close_to_analytic_area() {
        // NDC area 0.72 of 4.0 total covers 18% of the canvas.
        let frame = rasterize(&SceneConfig::default()).unwrap();
        let covered = frame.count_color(ORANGE) as f64;
        let expected = 0.18 * 160_000.0;
        assert!(
            (covered - expected).abs() / expected < 0.01,
            "covered {covered}, expected about {expected}"
        );
    }

    #[test]
    fn triangle_points_up() {
        let frame = rasterize(&SceneConfig::default()).unwrap();
        // Apex at NDC y = 0.6 is canvas row 80; base at -0.6 is row 320.
        let row_width = |y: u32| (0..400).filter(|&x| frame.pixel(x, y) == Some(ORANGE)).count();
        assert!(row_width(100) < row_width(300));
        assert_eq!(row_width(70), 0);
        assert_eq!(row_width(330), 0);
    }

    #[test]
    fn scene_clear_color_is_used() {
        let scene = SceneConfig {
            clear_color: Rgba::new(0.0, 0.0, 0.0, 1.0),
            size: CanvasSize::new(20, 20).unwrap(),
            ..SceneConfig::default()
        };
        let frame = rasterize(&scene).unwrap();
        assert_eq!(frame.pixel(0, 0), Some([0, 0, 0, 255]));
        assert_eq!(frame.pixel(10, 10), Some(ORANGE));
    }

    #[test]
    fn fill_matches_fragment_shader_constant() {
        // The shader writes vec4(1.0, 0.5, 0.0, 1.0) whatever the scene says.
        assert!(triangle_canvas_core::shaders::FRAGMENT_SHADER_SOURCE
            .contains("vec4(1.0, 0.5, 0.0, 1.0)"));
        let scene = SceneConfig {
            clear_color: Rgba::new(1.0, 1.0, 1.0, 1.0),
            ..SceneConfig::default()
        };
        let frame = rasterize(&scene).unwrap();
        assert_eq!(frame.pixel(200, 150), Some(TRIANGLE_COLOR.to_rgba8()));
        assert_eq!(frame.pixel(200, 150), Some(ORANGE));
    }

    #[test]
    fn oversized_scene_errors_instead_of_allocating() {
        let scene = SceneConfig {
            size: CanvasSize {
                width: 200_000,
                height: 200_000,
            },
            ..SceneConfig::default()
        };
        assert_eq!(clear_only(&scene), Err(CanvasError::InvalidDimensions));
        assert_eq!(rasterize(&scene), Err(CanvasError::InvalidDimensions));
    }

    #[test]
    fn invalid_scene_is_rejected() {
        let scene = SceneConfig {
            vertices: vec![0.0; 4],
            ..SceneConfig::default()
        };
        assert!(matches!(
            rasterize(&scene),
            Err(CanvasError::InvalidVertexData(_))
        ));
    }

    proptest! {
        #[test]
        fn every_pixel_is_clear_or_fill(w in 1u32..48, h in 1u32..48) {
            let scene = SceneConfig {
                size: CanvasSize::new(w, h).unwrap(),
                ..SceneConfig::default()
            };
            let frame = rasterize(&scene).unwrap();
            let total = frame.count_color(CLEAR) + frame.count_color(ORANGE);
            prop_assert_eq!(total, (w * h) as usize);
        }
    }
}
