//! Renderer capability boundary.
//!
//! The animation engine never talks to a graphics API directly. It emits a
//! `RenderCommand` per tick, and anything implementing `Renderable` turns
//! that into a picture. Keeps the engine testable without a real rendering
//! context.

use crate::engine::EngineResult;
use crate::engine::animation::RenderCommand;

pub trait Renderable {
    fn set_rotation(&mut self, x: f64, y: f64, z: f64);

    fn set_camera_distance(&mut self, distance: f64);

    /// Viewport change. Must take effect before the next `render_frame`.
    fn resize(&mut self, width: f64, height: f64);

    /// Draw one frame with the state applied so far.
    fn render_frame(&mut self) -> EngineResult<()>;
}

/// Push one frame's state to the renderer, then draw it.
pub fn apply_command<R: Renderable + ?Sized>(
    target: &mut R,
    command: &RenderCommand,
) -> EngineResult<()> {
    target.set_rotation(command.rotation_x, command.rotation_y, 0.0);
    target.set_camera_distance(command.camera_distance);
    target.render_frame()
}

/// Records every call for assertions. Used by tests and handy for headless
/// runs.
#[derive(Debug, Default)]
pub struct RecordingRenderer {
    pub rotations: Vec<(f64, f64, f64)>,
    pub distances: Vec<f64>,
    pub resizes: Vec<(f64, f64)>,
    pub frames_rendered: usize,
}

impl Renderable for RecordingRenderer {
    fn set_rotation(&mut self, x: f64, y: f64, z: f64) {
        self.rotations.push((x, y, z));
    }

    fn set_camera_distance(&mut self, distance: f64) {
        self.distances.push(distance);
    }

    fn resize(&mut self, width: f64, height: f64) {
        self.resizes.push((width, height));
    }

    fn render_frame(&mut self) -> EngineResult<()> {
        self.frames_rendered += 1;
        Ok(())
    }
}
