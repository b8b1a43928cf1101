//! `wasm-bindgen` surface of the component.

use crate::{surface_size, CANVAS_SIZE, CONTEXT_KIND};
use triangle_canvas_core::render::lifecycle::report;
use triangle_canvas_core::render::{GpuContext, RenderError, TriangleLifecycle};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Document, HtmlCanvasElement, WebGlRenderingContext};

/// Installs the panic hook and console logger when the module loads.
#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info)
        .map_err(|e| JsValue::from_str(&format!("failed to init logger: {e:?}")))?;
    Ok(())
}

/// Obtains a WebGL 1 context for `canvas` and wraps it for `glow`.
fn acquire_context(canvas: &HtmlCanvasElement) -> Result<GpuContext, RenderError> {
    let raw = canvas
        .get_context(CONTEXT_KIND)
        .map_err(|e| RenderError::ContextUnavailable(format!("{e:?}")))?
        .ok_or_else(|| RenderError::ContextUnavailable("getContext returned null".into()))?
        .dyn_into::<WebGlRenderingContext>()
        .map_err(|_| RenderError::ContextUnavailable("not a WebGL 1 context".into()))?;

    let gl = glow::Context::from_webgl1_context(raw);
    GpuContext::new(gl, surface_size(canvas.width(), canvas.height()))
}

/// A mounted triangle canvas.
#[wasm_bindgen]
pub struct TriangleCanvas {
    canvas: HtmlCanvasElement,
    ctx: Option<GpuContext>,
    lifecycle: TriangleLifecycle,
}

#[wasm_bindgen]
impl TriangleCanvas {
    /// Mounts the component on `canvas` and draws the triangle.
    ///
    /// Never fails from the host's point of view: if no context is
    /// available or setup fails, the error is logged and the canvas stays
    /// unrendered.
    pub fn mount(canvas: HtmlCanvasElement) -> TriangleCanvas {
        let mut lifecycle = TriangleLifecycle::default();
        let ctx = match acquire_context(&canvas) {
            Ok(ctx) => {
                lifecycle.start(&ctx);
                Some(ctx)
            }
            Err(e) => {
                report(&e);
                None
            }
        };
        TriangleCanvas {
            canvas,
            ctx,
            lifecycle,
        }
    }

    /// Creates a 400x400 `<canvas>` in `document` for hosts without one.
    pub fn create(document: &Document) -> Result<HtmlCanvasElement, JsValue> {
        let canvas = document
            .create_element("canvas")?
            .dyn_into::<HtmlCanvasElement>()
            .map_err(|_| JsValue::from_str("created element is not a canvas"))?;
        canvas.set_width(CANVAS_SIZE.width);
        canvas.set_height(CANVAS_SIZE.height);
        Ok(canvas)
    }

    /// Releases the GPU objects created at mount.
    pub fn unmount(&mut self) {
        if let Some(ctx) = &self.ctx {
            self.lifecycle.stop(ctx);
        }
    }

    /// Whether the triangle is currently drawn.
    #[wasm_bindgen(getter)]
    pub fn rendered(&self) -> bool {
        self.lifecycle.is_rendered()
    }

    /// The canvas element the component draws into.
    #[wasm_bindgen(getter)]
    pub fn canvas(&self) -> HtmlCanvasElement {
        self.canvas.clone()
    }
}
