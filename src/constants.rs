// Presentation constants for the overlay canvas.

pub const OVERLAY_Z_INDEX: &str = "1000";
pub const OVERLAY_BLEND_MODE: &str = "difference";
pub const HIDDEN_CURSOR: &str = "none";
