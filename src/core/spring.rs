use super::constants::{SWING_DAMPING, SWING_STIFFNESS};

/// Damped rotational oscillator driving one tag's swing.
///
/// Stepped once per animation frame, unconditionally; relaxation back to a
/// zero target has to animate just as smoothly as pointer-driven motion.
/// The integration is deliberately frame-coupled rather than dt-scaled; the
/// stiffness/damping pair is tuned for that cadence.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct SpringState {
    /// Current swing angle, degrees.
    pub angle: f32,
    /// Per-frame angular velocity, degrees.
    pub velocity: f32,
    /// Angle the spring is being pulled toward. Written by pointer input
    /// (or reset to 0 on pointer-leave), never by the tick itself.
    pub target: f32,
}

impl SpringState {
    /// Advance one frame. Tolerates target discontinuities; for a constant
    /// target the angle converges asymptotically with no sustained
    /// oscillation because damping stays below 1.
    pub fn step(&mut self) {
        self.velocity += (self.target - self.angle) * SWING_STIFFNESS;
        self.velocity *= SWING_DAMPING;
        self.angle += self.velocity;
    }
}
