//! The setup pass on a real GL context, read back and compared with the
//! CPU reference frame.
//!
//! These need an EGL device with GLES 3.0 (Mesa's llvmpipe is enough):
//! `cargo test -p triangle-canvas-snapshot -- --ignored`.

use glow::HasContext;
use glutin::api::egl::context::PossiblyCurrentContext;
use glutin::api::egl::device::Device;
use glutin::api::egl::display::Display;
use glutin::config::{ConfigSurfaceTypes, ConfigTemplateBuilder};
use glutin::context::{ContextApi, ContextAttributesBuilder, Version};
use glutin::prelude::*;

use triangle_canvas_core::render::pipeline::render_triangle_with;
use triangle_canvas_core::render::{
    compile_shader, draw, link_program, render_triangle, AttributeBinding, GpuContext,
    LifecycleState, RenderError, RenderTarget, ShaderError, ShaderStage, TriangleLifecycle,
    VertexBuffer,
};
use triangle_canvas_core::shaders::{FRAGMENT_SHADER_SOURCE, VERTEX_SHADER_SOURCE};
use triangle_canvas_core::{CanvasSize, Rgba, SceneConfig, TRIANGLE_VERTICES};
use triangle_canvas_snapshot::{clear_only, rasterize};

const CLEAR: [u8; 4] = [0, 51, 51, 255];
const ORANGE: [u8; 4] = [255, 128, 0, 255];

/// A surfaceless GLES 3.0 context, current on the calling thread.
///
/// Field order matters: the glow wrapper drops before the EGL context it
/// loaded its functions from.
struct Headless {
    ctx: GpuContext,
    target: RenderTarget,
    _context: PossiblyCurrentContext,
    _display: Display,
}

impl Headless {
    fn new(size: CanvasSize) -> Self {
        let device = Device::query_devices()
            .expect("EGL device enumeration")
            .next()
            .expect("no EGL device");
        // SAFETY: no native display handle is passed; the device display
        // owns its own connection.
        let display = unsafe { Display::with_device(&device, None) }.expect("EGL display");

        let template = ConfigTemplateBuilder::default()
            .with_alpha_size(8)
            .with_surface_type(ConfigSurfaceTypes::empty())
            .build();
        let config = unsafe { display.find_configs(template) }
            .expect("EGL configs")
            .next()
            .expect("no surfaceless EGL config");

        let attributes = ContextAttributesBuilder::new()
            .with_context_api(ContextApi::Gles(Some(Version::new(3, 0))))
            .build(None);
        let context = unsafe { display.create_context(&config, &attributes) }
            .expect("GLES 3.0 context")
            .make_current_surfaceless()
            .expect("make context current");

        // SAFETY: the context is current on this thread and outlives `gl`.
        let gl = unsafe {
            glow::Context::from_loader_function_cstr(|name| display.get_proc_address(name))
        };
        let ctx = GpuContext::new(gl, size).expect("gpu context");
        let target = RenderTarget::new(ctx.gl(), size).expect("render target");
        target.bind(ctx.gl());

        Self {
            ctx,
            target,
            _context: context,
            _display: display,
        }
    }

    fn gl(&self) -> &glow::Context {
        self.ctx.gl()
    }

    /// Reads the target and binds it again for the next draw.
    fn read(&self) -> triangle_canvas_core::Frame {
        let frame = self.target.read_frame(self.gl()).expect("read frame");
        self.target.bind(self.gl());
        frame
    }
}

impl Drop for Headless {
    fn drop(&mut self) {
        self.target.destroy(self.ctx.gl());
    }
}

#[test]
#[ignore = "requires GL context"]
fn readback_matches_reference_before_and_after_draw() {
    let scene = SceneConfig::default();
    let headless = Headless::new(scene.size);

    draw::clear(headless.gl(), scene.clear_color);
    let before = headless.read();
    assert_eq!(before.pixel(200, 200), Some(CLEAR));
    assert_eq!(before, clear_only(&scene).unwrap());

    let resources = render_triangle(&headless.ctx, &scene).expect("setup pass");
    let after = headless.read();
    let reference = rasterize(&scene).unwrap();
    assert_eq!(after.pixel(200, 150), Some(ORANGE));
    assert_eq!(after.pixel(200, 150), reference.pixel(200, 150));
    assert_eq!(after.pixel(0, 0), Some(CLEAR));

    let mismatched = (0..scene.size.height)
        .flat_map(|y| (0..scene.size.width).map(move |x| (x, y)))
        .filter(|&(x, y)| after.pixel(x, y) != reference.pixel(x, y))
        .count();
    assert_eq!(mismatched, 0, "{mismatched} pixels differ from the reference");

    resources.release(headless.gl());
}

#[test]
#[ignore = "requires GL context"]
fn compile_yields_two_stages_and_link_succeeds() {
    let headless = Headless::new(CanvasSize::DEFAULT);
    let gl = headless.gl();

    let vertex = compile_shader(gl, ShaderStage::Vertex, VERTEX_SHADER_SOURCE).unwrap();
    let fragment = compile_shader(gl, ShaderStage::Fragment, FRAGMENT_SHADER_SOURCE).unwrap();
    assert_ne!(vertex.shader, fragment.shader);

    let program = link_program(gl, &vertex, &fragment).unwrap();
    assert!(unsafe { gl.get_program_link_status(program.program) });

    unsafe {
        gl.delete_program(program.program);
        gl.delete_shader(vertex.shader);
        gl.delete_shader(fragment.shader);
    }
}

#[test]
#[ignore = "requires GL context"]
fn malformed_fragment_source_fails_with_driver_log() {
    let headless = Headless::new(CanvasSize::DEFAULT);
    let broken = FRAGMENT_SHADER_SOURCE.replace(");", ")");

    let err = compile_shader(headless.gl(), ShaderStage::Fragment, &broken).unwrap_err();
    match err {
        ShaderError::CompileError { stage, log } => {
            assert_eq!(stage, ShaderStage::Fragment);
            let numbered_source = triangle_canvas_core::render::format_shader_error(&broken, "");
            let driver_log = log[numbered_source.len()..].trim();
            assert!(!driver_log.is_empty(), "no driver log in:\n{log}");
        }
        other => panic!("expected a compile error, got {other}"),
    }
}

#[test]
#[ignore = "requires GL context"]
fn read_back_returns_uploaded_floats_in_order() {
    let headless = Headless::new(CanvasSize::DEFAULT);
    let gl = headless.gl();

    let buffer = VertexBuffer::upload(gl, &TRIANGLE_VERTICES).unwrap();
    assert_eq!(buffer.len(), 6);
    assert_eq!(
        buffer.read_back(gl).unwrap(),
        vec![0.0, 0.6, -0.6, -0.6, 0.6, -0.6]
    );
    buffer.destroy(gl);
}

#[test]
#[ignore = "requires GL context"]
fn two_runs_create_independent_resources() {
    let scene = SceneConfig::default();
    let headless = Headless::new(scene.size);

    let first = render_triangle(&headless.ctx, &scene).unwrap();
    let second = render_triangle(&headless.ctx, &scene).unwrap();
    assert_ne!(first.program.program, second.program.program);
    assert_ne!(first.buffer.buffer(), second.buffer.buffer());
    assert_ne!(first.vertex.shader, second.vertex.shader);

    // Releasing one set leaves the other drawable.
    first.release(headless.gl());
    let gl = headless.gl();
    draw::clear(gl, Rgba::new(0.0, 0.0, 0.0, 1.0));
    unsafe { gl.use_program(Some(second.program.program)) };
    draw::draw_triangles(gl, 0, triangle_canvas_core::VERTEX_COUNT);
    assert_eq!(headless.read().pixel(200, 150), Some(ORANGE));
    second.release(headless.gl());
}

#[test]
#[ignore = "requires GL context"]
fn link_failure_leaves_surface_untouched() {
    let scene = SceneConfig::default();
    let headless = Headless::new(scene.size);
    let black = Rgba::new(0.0, 0.0, 0.0, 1.0);
    draw::clear(headless.gl(), black);

    let needs_varying = "precision mediump float;
varying vec4 v_color;
void main() {
    gl_FragColor = v_color;
}
";
    let err = render_triangle_with(&headless.ctx, &scene, VERTEX_SHADER_SOURCE, needs_varying)
        .unwrap_err();
    assert!(
        matches!(err, RenderError::Shader(ShaderError::LinkError(_))),
        "got: {err}"
    );

    let frame = headless.read();
    assert_eq!(frame.count_color(black.to_rgba8()), scene.size.pixel_count());
}

#[test]
#[ignore = "requires GL context"]
fn undeclared_attribute_is_unresolved_and_draws_nothing() {
    let scene = SceneConfig::default();
    let headless = Headless::new(scene.size);

    let misnamed = "attribute vec4 a_pos;
void main() {
    gl_Position = a_pos;
}
";
    let resources =
        render_triangle_with(&headless.ctx, &scene, misnamed, FRAGMENT_SHADER_SOURCE).unwrap();
    assert!(matches!(
        resources.attribute,
        AttributeBinding::Unresolved { ref name } if name == "a_position"
    ));

    // Every vertex sits at the default attribute value, so the triangle
    // is degenerate and only the clear is visible.
    let frame = headless.read();
    assert_eq!(frame.count_color(CLEAR), scene.size.pixel_count());
    resources.release(headless.gl());
}

#[test]
#[ignore = "requires GL context"]
fn lifecycle_renders_once_per_mount() {
    let headless = Headless::new(CanvasSize::DEFAULT);
    let mut lifecycle = TriangleLifecycle::default();

    assert!(lifecycle.start(&headless.ctx));
    let first_program = match lifecycle.state() {
        LifecycleState::Rendered(res) => res.program.program,
        other => panic!("expected Rendered, got {other:?}"),
    };

    assert!(lifecycle.start(&headless.ctx));
    match lifecycle.state() {
        LifecycleState::Rendered(res) => assert_eq!(res.program.program, first_program),
        other => panic!("expected Rendered, got {other:?}"),
    }

    lifecycle.stop(&headless.ctx);
    assert!(matches!(lifecycle.state(), LifecycleState::Uninitialized));

    draw::clear(headless.gl(), Rgba::new(0.0, 0.0, 0.0, 1.0));
    assert!(lifecycle.start(&headless.ctx));
    assert!(lifecycle.is_rendered());
    assert_eq!(headless.read().pixel(200, 150), Some(ORANGE));
    lifecycle.stop(&headless.ctx);
}
