//! Scene adapter for the 3-D backend.

use crate::engine::EngineResult;
use crate::engine::renderable::Renderable;

/// Holds the per-frame state a backend needs to draw the globe: globe
/// rotation, camera distance, viewport. The device wiring itself stays
/// behind this boundary.
#[derive(Debug)]
pub struct Renderer {
    rotation: (f64, f64, f64),
    camera_distance: f64,
    viewport: (f64, f64),
    frames_rendered: u64,
}

impl Renderer {
    pub fn new() -> Self {
        Self {
            rotation: (0.0, 0.0, 0.0),
            camera_distance: 0.0,
            viewport: (0.0, 0.0),
            frames_rendered: 0,
        }
    }

    pub fn rotation(&self) -> (f64, f64, f64) {
        self.rotation
    }

    pub fn camera_distance(&self) -> f64 {
        self.camera_distance
    }

    pub fn viewport(&self) -> (f64, f64) {
        self.viewport
    }

    pub fn frames_rendered(&self) -> u64 {
        self.frames_rendered
    }
}

impl Default for Renderer {
    fn default() -> Self {
        Self::new()
    }
}

impl Renderable for Renderer {
    fn set_rotation(&mut self, x: f64, y: f64, z: f64) {
        self.rotation = (x, y, z);
    }

    fn set_camera_distance(&mut self, distance: f64) {
        self.camera_distance = distance;
    }

    fn resize(&mut self, width: f64, height: f64) {
        self.viewport = (width, height);
        // TODO(backend): recreate size-dependent resources and update the
        // projection aspect here.
    }

    fn render_frame(&mut self) -> EngineResult<()> {
        // TODO(backend): upload rotation/camera uniforms and draw the globe
        // mesh. The scheduler only needs this call to be cheap and
        // non-blocking.
        self.frames_rendered += 1;

        tracing::trace!(
            "frame {}: rotation=({:.4}, {:.4}) camera={:.1}",
            self.frames_rendered,
            self.rotation.0,
            self.rotation.1,
            self.camera_distance
        );

        Ok(())
    }
}
