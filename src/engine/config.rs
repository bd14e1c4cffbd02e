//! Init-time animation constants.

use serde::Deserialize;

/// Tuning knobs for the tour animation.
///
/// Every field has a default matching the original visual; a JSON blob can
/// override any subset of them.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    /// Wall-clock duration one transition should take, regardless of how
    /// fast the device renders frames.
    pub seconds_per_transition: f64,

    /// Frame count for the very first transition, before any frame-rate
    /// measurement exists.
    pub initial_total_steps: u32,

    /// Camera base distance for viewports at least `wide_viewport_min_width`
    /// wide.
    pub base_distance_wide: f64,

    /// Camera base distance for narrower viewports.
    pub base_distance_narrow: f64,

    pub wide_viewport_min_width: f64,

    /// How much closer than the base distance the camera sits at each
    /// transition endpoint, where a point is centered.
    pub dip_amplitude: f64,

    /// Extra frames to hold the final pose each time the tour wraps back to
    /// its first point. Zero disables the hold.
    pub hold_frames_at_cycle_end: u32,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            seconds_per_transition: 4.0,
            initial_total_steps: 100,
            base_distance_wide: 130.0,
            base_distance_narrow: 110.0,
            wide_viewport_min_width: 1000.0,
            dip_amplitude: 15.0,
            hold_frames_at_cycle_end: 0,
        }
    }
}

impl EngineConfig {
    /// Base camera distance for a given viewport width.
    pub fn base_distance_for_width(&self, width: f64) -> f64 {
        if width > self.wide_viewport_min_width {
            self.base_distance_wide
        } else {
            self.base_distance_narrow
        }
    }
}
