//! Mutable per-instance animation state.

use super::resolver::Resolution;
use glam::DVec2;

/// Values eased toward the active config every frame.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Smoothed {
    pub cursor_radius: f64,
    pub trail_radius: f64,
}

#[derive(Clone, Debug, PartialEq)]
pub struct AnimationState {
    pub pointer: DVec2,
    pub trail: DVec2,
    pub button_down: bool,
    pub is_touch: bool,
    /// Set once a pointer position has been seen; until then the trail sits at the origin.
    pub has_pointer: bool,
    pub last_timestamp: f64,
    pub smoothed: Smoothed,
    /// Whether the last resolution came from a selector rule.
    pub had_match: bool,
    pub active: Resolution,
    pub viewport: DVec2,
}

impl AnimationState {
    pub fn new(initial: Smoothed, viewport: DVec2) -> Self {
        Self {
            pointer: DVec2::ZERO,
            trail: DVec2::ZERO,
            button_down: false,
            is_touch: false,
            has_pointer: false,
            last_timestamp: 0.0,
            smoothed: initial,
            had_match: false,
            active: Resolution::Default,
            viewport,
        }
    }
}
