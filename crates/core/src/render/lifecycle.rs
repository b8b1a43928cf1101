//! Run-once-per-mount lifecycle for the triangle canvas.
//!
//! `start` performs the setup pass the first time it is called after
//! construction or after `stop`, and ignores later calls. `stop` releases
//! whatever the pass created. Failures are written to the log with the
//! backend's diagnostic text and end the attempt; they are not returned
//! to the host.

use super::context::GpuContext;
use super::pipeline::{render_triangle, TriangleResources};
use super::RenderError;
use crate::scene::SceneConfig;

/// Where a mounted canvas is in its lifecycle.
#[derive(Debug)]
pub enum LifecycleState {
    /// Not started yet, or stopped.
    Uninitialized,
    /// The triangle was drawn; the resources stay alive until `stop`.
    Rendered(TriangleResources),
    /// The setup pass failed. Terminal until `stop`.
    Failed,
}

/// Drives one setup pass per mount.
#[derive(Debug)]
pub struct TriangleLifecycle {
    scene: SceneConfig,
    state: LifecycleState,
}

impl TriangleLifecycle {
    pub fn new(scene: SceneConfig) -> Self {
        Self {
            scene,
            state: LifecycleState::Uninitialized,
        }
    }

    pub fn state(&self) -> &LifecycleState {
        &self.state
    }

    pub fn is_rendered(&self) -> bool {
        matches!(self.state, LifecycleState::Rendered(_))
    }

    /// Runs the setup pass if this lifecycle has not run since the last
    /// `stop`. Returns whether the triangle is drawn afterwards.
    pub fn start(&mut self, ctx: &GpuContext) -> bool {
        if !matches!(self.state, LifecycleState::Uninitialized) {
            log::debug!("start ignored, canvas already set up");
            return self.is_rendered();
        }

        self.state = match render_triangle(ctx, &self.scene) {
            Ok(resources) => {
                log::info!(
                    "triangle rendered on {}x{} canvas",
                    ctx.size().width,
                    ctx.size().height
                );
                LifecycleState::Rendered(resources)
            }
            Err(e) => {
                report(&e);
                LifecycleState::Failed
            }
        };
        self.is_rendered()
    }

    /// Releases the resources of a successful pass and returns to
    /// `Uninitialized`, so the next `start` renders again.
    pub fn stop(&mut self, ctx: &GpuContext) {
        match std::mem::replace(&mut self.state, LifecycleState::Uninitialized) {
            LifecycleState::Rendered(resources) => resources.release(ctx.gl()),
            LifecycleState::Failed | LifecycleState::Uninitialized => {}
        }
    }
}

impl Default for TriangleLifecycle {
    fn default() -> Self {
        Self::new(SceneConfig::default())
    }
}

/// Writes a failed attempt to the diagnostics log.
pub fn report(err: &RenderError) {
    match err {
        RenderError::ContextUnavailable(reason) => log::error!("WebGL not supported: {reason}"),
        RenderError::Shader(e) => log::error!("{e}"),
        other => log::error!("triangle setup failed: {other}"),
    }
}
