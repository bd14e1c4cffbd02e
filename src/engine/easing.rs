//! Pure easing/interpolation helpers.
//!
//! Stateless; the scheduler feeds these a progress ratio each frame.

use std::f64::consts::PI;

/// Sinusoidal ease-in/ease-out S-curve over `[0, 1]`.
///
/// Fixed endpoints (`ease(0) == 0`, `ease(1) == 1`), `ease(0.5) == 0.5`,
/// non-decreasing and symmetric about `(0.5, 0.5)`. Fixed endpoints are what
/// keep rotation continuous across transition rollovers.
pub fn ease(k: f64) -> f64 {
    0.5 * (((k - 0.5) * PI).sin() + 1.0)
}

/// Interpolate `from` toward `to` through the easing curve.
///
/// `k` is clamped to `[0, 1]` before easing, so progress ratios that drift
/// out of range never overshoot beyond `[from, to]`.
///
/// Values are treated as plain reals: a longitude transition crossing the
/// ±180° meridian interpolates the long way around. Callers that care must
/// pre-normalize their coordinates.
pub fn interpolate(from: f64, to: f64, k: f64) -> f64 {
    from + (to - from) * ease(k.clamp(0.0, 1.0))
}
