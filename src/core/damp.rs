//! Frame-rate independent smoothing and the trail geometry helpers.

use super::constants::{SPEED_CLAMP_MAX, SPEED_CLAMP_MIN, SPEED_DIVISOR};
use glam::DVec2;

/// Linear interpolation; `amt` in [0, 1].
#[inline]
pub fn lerp(start: f64, end: f64, amt: f64) -> f64 {
    (1.0 - amt) * start + amt * end
}

/// Exponential decay of `start` toward `end` at rate `lambda` over `dt`.
///
/// `1 - e^(-λ·dt)` keeps convergence independent of the frame rate. A zero,
/// negative or NaN `dt` means no time passed and returns `start` untouched.
#[inline]
pub fn damp(start: f64, end: f64, lambda: f64, dt: f64) -> f64 {
    if dt.is_nan() || dt <= 0.0 || lambda.is_nan() || lambda <= 0.0 {
        return start;
    }
    let amt = 1.0 - (-lambda * dt).exp();
    let out = lerp(start, end, amt);
    // rounding in lerp can step a hair past either end
    out.max(start.min(end)).min(start.max(end))
}

#[inline]
pub fn damp_vec(start: DVec2, end: DVec2, lambda: f64, dt: f64) -> DVec2 {
    DVec2::new(
        damp(start.x, end.x, lambda, dt),
        damp(start.y, end.y, lambda, dt),
    )
}

/// Angle of `point` seen from `axis`, measured from the +y axis.
#[inline]
pub fn rotation_axis(axis: DVec2, point: DVec2) -> f64 {
    (point.x - axis.x).atan2(point.y - axis.y)
}

/// Raw stretch factor for a trail that is `distance` px behind after `dt` ms.
#[inline]
pub fn trail_speed(distance: f64, dt: f64) -> f64 {
    if dt.is_nan() || dt <= 0.0 {
        return SPEED_CLAMP_MIN;
    }
    distance / dt / SPEED_DIVISOR
}

#[inline]
pub fn clamp_speed(speed: f64) -> f64 {
    if speed.is_nan() {
        return SPEED_CLAMP_MIN;
    }
    speed.clamp(SPEED_CLAMP_MIN, SPEED_CLAMP_MAX)
}
