//! The transition scheduler: a per-frame state machine that walks the point
//! list forever, easing the globe's rotation from each point to the next and
//! arcing the camera distance so each point is approached up close.

use crate::engine::config::EngineConfig;
use crate::engine::easing;
use crate::engine::points::PointSet;

/// Mutable per-animation state, updated exactly once per tick.
///
/// Invariants: `step < total_steps`, `point_index < points.len()`,
/// `total_steps >= 1`.
#[derive(Debug, Clone)]
pub struct TransitionState {
    /// Index of the point currently being approached.
    pub point_index: usize,
    /// Frame counter within the current transition.
    pub step: u32,
    /// Frame length of the current transition.
    pub total_steps: u32,
    /// Timestamp of the previous tick, if there was one.
    pub last_timestamp: Option<f64>,
    /// Instantaneous FPS estimate from the last two ticks.
    pub measured_fps: f64,
    /// Frames left to hold the pose after completing a full cycle.
    hold_remaining: u32,
}

/// One frame's worth of renderer input. Produced fresh each tick, never
/// stored.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RenderCommand {
    /// Globe rotation about the x axis, radians.
    pub rotation_x: f64,
    /// Globe rotation about the y axis, radians.
    pub rotation_y: f64,
    pub camera_distance: f64,
}

/// Owns a `TransitionState` and a `PointSet` and turns timestamps into
/// `RenderCommand`s.
///
/// Single-threaded by construction: the host calls `tick` once per rendered
/// frame and nothing else touches the state. Each engine instance is fully
/// independent, so several globes can animate side by side.
pub struct AnimationEngine {
    points: PointSet,
    config: EngineConfig,
    state: TransitionState,
    base_distance: f64,
}

impl AnimationEngine {
    pub fn new(points: PointSet, config: EngineConfig) -> Self {
        let state = TransitionState {
            point_index: 0,
            step: 0,
            total_steps: config.initial_total_steps.max(1),
            last_timestamp: None,
            measured_fps: 0.0,
            hold_remaining: 0,
        };

        tracing::info!(
            "touring {} points, first stop '{}'",
            points.len(),
            points.get(0).label
        );

        let base_distance = config.base_distance_wide;

        Self {
            points,
            config,
            state,
            base_distance,
        }
    }

    /// Advance the animation by one frame.
    ///
    /// `timestamp_secs` must be monotonically non-decreasing; the delta
    /// between consecutive calls drives the frame-rate estimate. Total for
    /// any finite input: never panics, never divides by zero, and with a
    /// single-point list degenerates to a static pose.
    pub fn tick(&mut self, timestamp_secs: f64) -> RenderCommand {
        let command = self.current_command();

        if self.state.hold_remaining > 0 {
            // Cycle-end hold: re-emit the same pose, but keep measuring so
            // the next transition still gets a fresh FPS estimate.
            self.state.hold_remaining -= 1;
            self.measure_fps(timestamp_secs);
            return command;
        }

        self.state.step += 1;
        self.measure_fps(timestamp_secs);

        if self.state.step >= self.state.total_steps {
            self.roll_over();
        }

        command
    }

    /// Viewport-width hook for resize events. Takes effect on the next tick,
    /// which is all the single-threaded FIFO callback ordering requires.
    pub fn set_viewport_width(&mut self, width: f64) {
        self.base_distance = self.config.base_distance_for_width(width);
    }

    pub fn state(&self) -> &TransitionState {
        &self.state
    }

    pub fn points(&self) -> &PointSet {
        &self.points
    }

    /// Pose for the current step, before any counters advance.
    ///
    /// Longitude is negated: the globe rotates opposite to the camera's
    /// apparent travel direction. That sign is the rendering convention the
    /// data was authored against, not a bug.
    fn current_command(&self) -> RenderCommand {
        let prev = self.points.prev_of(self.state.point_index);
        let next = self.points.get(self.state.point_index);
        let k = self.progress_ratio();

        let rotation_x = easing::interpolate(prev.latitude, next.latitude, k).to_radians();
        let rotation_y = (-easing::interpolate(prev.longitude, next.longitude, k)).to_radians();

        RenderCommand {
            rotation_x,
            rotation_y,
            camera_distance: self.camera_distance(),
        }
    }

    /// Progress through the current transition, clamped to `[0, 1]`.
    ///
    /// A one-frame transition has no interior, so it reads as already
    /// complete rather than dividing by zero.
    fn progress_ratio(&self) -> f64 {
        if self.state.total_steps <= 1 {
            1.0
        } else {
            (f64::from(self.state.step) / f64::from(self.state.total_steps - 1)).clamp(0.0, 1.0)
        }
    }

    /// Parabolic camera arc: `dip_amplitude` closer than base at both
    /// transition endpoints (each point gets "approached"), easing out to
    /// the base distance mid-flight.
    fn camera_distance(&self) -> f64 {
        let half = f64::from(self.state.total_steps) / 2.0;
        let normalized = (f64::from(self.state.step) - half) / half;

        -self.config.dip_amplitude * normalized * normalized + self.base_distance
    }

    /// Update the instantaneous FPS estimate from the wall-clock delta.
    /// The first call has no history and only records its timestamp.
    fn measure_fps(&mut self, timestamp_secs: f64) {
        if let Some(prev) = self.state.last_timestamp {
            let dt = timestamp_secs - prev;
            if dt > 0.0 {
                self.state.measured_fps = 1.0 / dt;
            }
        }

        self.state.last_timestamp = Some(timestamp_secs);
    }

    /// Transition finished: resize the next one to the measured frame rate
    /// and advance to the next point pair.
    fn roll_over(&mut self) {
        let recomputed = (self.state.measured_fps * self.config.seconds_per_transition).ceil();

        // Zero or garbage FPS (first frames, stalled clock) clamps to a
        // single-frame transition instead of reaching zero.
        self.state.total_steps = if recomputed >= 1.0 { recomputed as u32 } else { 1 };

        let next_index = (self.state.point_index + 1) % self.points.len();
        if next_index == 0 {
            self.state.hold_remaining = self.config.hold_frames_at_cycle_end;
        }

        self.state.point_index = next_index;
        self.state.step = 0;

        tracing::debug!(
            "rollover: heading to '{}' over {} steps ({:.1} fps)",
            self.points.get(next_index).label,
            self.state.total_steps,
            self.state.measured_fps
        );
    }
}
