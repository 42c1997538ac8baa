use glam::Vec2;

use super::constants::{SWING_WEIGHT_X, SWING_WEIGHT_Y, TILT_SCALE_X, TILT_SCALE_Y};
use super::geom::Rect;

/// Targets produced from one pointer sample.
///
/// Event handlers compute this and write it onto the scene's target fields;
/// the frame tick only ever reads those targets. Keeping the handoff in one
/// struct is what makes that single-writer split visible.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct PointerDrive {
    /// Container tilt target, degrees (x → rotateY, y → rotateX).
    pub tilt_target: Vec2,
    /// Swing target shared by every tag's spring, degrees.
    pub swing_target: f32,
}

impl PointerDrive {
    /// The relaxed scene: what pointer-leave applies.
    pub const NEUTRAL: Self = Self {
        tilt_target: Vec2::ZERO,
        swing_target: 0.0,
    };
}

/// Normalize a viewport-space pointer position against the container's
/// center and half-extents, giving roughly [-1, 1] per axis.
///
/// "Roughly": near element borders (padding, borders, sub-pixel rounding)
/// the value can poke slightly past ±1. That tolerance is intentional and
/// nothing downstream clamps it.
pub fn deflection(container: Rect, pointer: Vec2) -> Vec2 {
    let half = container.half_extents();
    if half.x <= 0.0 || half.y <= 0.0 {
        return Vec2::ZERO;
    }
    let center = container.center();
    Vec2::new(
        (pointer.x - center.x) / half.x,
        (pointer.y - center.y) / half.y,
    )
}

/// Map one pointer sample to tilt and swing targets.
pub fn drive(container: Rect, pointer: Vec2) -> PointerDrive {
    let n = deflection(container, pointer);
    PointerDrive {
        tilt_target: Vec2::new(TILT_SCALE_X * n.x, -TILT_SCALE_Y * n.y),
        swing_target: n.x * SWING_WEIGHT_X + n.y * SWING_WEIGHT_Y,
    }
}

/// Pointer position relative to a tag's own rect, feeding the moving gloss
/// highlight custom properties.
#[inline]
pub fn highlight_point(tag_rect: Rect, pointer: Vec2) -> Vec2 {
    pointer - tag_rect.min()
}
