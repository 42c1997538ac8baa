use glam::Vec2;
use smallvec::SmallVec;

use super::constants::{
    ARM_END_OVERLAP, ARM_HEAD_PAD, ARM_IMG_ZERO_DEG, ARM_MIN_LENGTH, ARM_SEAT_EXTRA,
};
use super::geom::{Rect, SceneGeometry};

/// One connector's placement for the current frame, in container-local
/// coordinates. Recomputed from live geometry every tick and never stored.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Arm {
    /// Ring hook center the connector is pinned at.
    pub origin: Vec2,
    /// Visible chain length after trimming both ends back to the shape
    /// edges, never below `ARM_MIN_LENGTH`.
    pub length: f32,
    /// Rotation for the chain graphic. The raw asset points straight down,
    /// so the polar angle is shifted by `ARM_IMG_ZERO_DEG`.
    pub rotation_deg: f32,
    /// Push along the chain axis that seats the head against the ring.
    pub seat_offset: f32,
}

impl Arm {
    /// CSS transform for the connector element. The head pad translate and
    /// the seat offset sit on either side of the rotation so the chain
    /// pivots at the pinned head.
    pub fn css_transform(&self) -> String {
        format!(
            "translate(-50%, -{}px) rotate({}deg) translateY({}px)",
            ARM_HEAD_PAD, self.rotation_deg, self.seat_offset
        )
    }
}

/// Solve every connector against live geometry.
///
/// The result is parallel to `targets`; an entry is `None` when the
/// container, the ring hook, or that tag's attachment hole could not be
/// resolved, and the caller leaves the element untouched for the frame.
/// Pure function of the rects: calling it twice on unchanged geometry
/// yields identical arms.
pub fn solve_arms<S: AsRef<str>>(
    geometry: &impl SceneGeometry,
    targets: &[S],
) -> SmallVec<[Option<Arm>; 4]> {
    let mut out: SmallVec<[Option<Arm>; 4]> = SmallVec::with_capacity(targets.len());

    let (container, hook) = match (geometry.container_rect(), geometry.hook_rect()) {
        (Some(c), Some(h)) => (c, h),
        _ => {
            out.resize(targets.len(), None);
            return out;
        }
    };

    let origin = hook.center() - container.min();
    let ring_radius = hook.width / 2.0;

    for id in targets {
        let Some(hole) = geometry.attachment_rect(id.as_ref()) else {
            out.push(None);
            continue;
        };
        out.push(Some(solve_one(container, origin, ring_radius, hole)));
    }
    out
}

fn solve_one(container: Rect, origin: Vec2, ring_radius: f32, hole: Rect) -> Arm {
    let attach = hole.center() - container.min();
    let hole_radius = hole.width / 2.0;

    let d = attach - origin;
    let distance = d.length();
    let angle_deg = d.y.atan2(d.x).to_degrees();

    // Span edge to edge, tucking both ends slightly under the shapes, but
    // keep a minimum visible run even when the hole swings onto the ring.
    let length = (distance - ring_radius - hole_radius + ARM_END_OVERLAP).max(ARM_MIN_LENGTH);

    Arm {
        origin,
        length,
        rotation_deg: angle_deg - ARM_IMG_ZERO_DEG,
        seat_offset: ring_radius + ARM_HEAD_PAD + ARM_SEAT_EXTRA,
    }
}
