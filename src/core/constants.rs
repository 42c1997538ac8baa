// Animation tuning constants shared by the core modules and the frame loop.
//
// These values are empirically tuned as a set. The spring pair in particular
// is frame-coupled (stepped once per displayed frame, not per second), so
// changing one value changes the feel of everything downstream.

// Pointer → container tilt mapping (degrees at full deflection). The Y scale
// is applied inverted so upward pointer motion tilts the scene back.
pub const TILT_SCALE_X: f32 = 12.0;
pub const TILT_SCALE_Y: f32 = 10.0;

// Per-frame easing factor pulling current tilt toward its target.
pub const TILT_SMOOTHING: f32 = 0.08;

// Pointer → tag swing target weights (degrees per unit of deflection).
// Global for all tags, not per-tag.
pub const SWING_WEIGHT_X: f32 = 10.0;
pub const SWING_WEIGHT_Y: f32 = 6.0;

// Tag swing spring. DAMPING must stay strictly below 1 and STIFFNESS low
// enough that a constant target converges without oscillation growth.
pub const SWING_STIFFNESS: f32 = 0.08;
pub const SWING_DAMPING: f32 = 0.88;

// Parallax weight used when markup omits data-depth.
pub const DEFAULT_DEPTH: f32 = 20.0;

// Connector (chain arm) geometry, in CSS pixels.
pub const ARM_MIN_LENGTH: f32 = 28.0; // never collapse below this, even at distance 0
pub const ARM_END_OVERLAP: f32 = 6.0; // tuck each end under the ring/hole edges
pub const ARM_HEAD_PAD: f32 = 4.0; // vertical padding above the chain head
pub const ARM_SEAT_EXTRA: f32 = 3.0; // extra push seating the head against the ring
pub const ARM_IMG_ZERO_DEG: f32 = 90.0; // the chain asset is drawn pointing straight down
