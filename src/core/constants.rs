// Default look and tuning constants shared by the config model and the frame step.

// Documented defaults for a missing config field
pub const DEFAULT_SIZE: f64 = 10.0;
pub const DEFAULT_TRAIL_SPEED: f64 = 1.0;
pub const DEFAULT_TRAIL_SIZE: f64 = 10.0;
pub const DEFAULT_COLOR: &str = "rgba(255,255,255,1)";

// Damping rates, per millisecond of frame time
pub const CURSOR_RADIUS_LAMBDA: f64 = 1.2;
pub const TRAIL_RADIUS_LAMBDA: f64 = 0.2;
pub const TRAIL_POSITION_LAMBDA: f64 = 0.01; // scaled by the active trail_speed

// Trail ellipse stretch
pub const SPEED_DIVISOR: f64 = 7.0; // px/ms -> stretch units
pub const SPEED_CLAMP_MIN: f64 = 1.0;
pub const SPEED_CLAMP_MAX: f64 = 1.5;

// A fading trail below this radius is no longer drawn
pub const TRAIL_FADE_EPSILON: f64 = 0.05;
