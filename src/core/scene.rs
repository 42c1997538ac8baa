use fnv::FnvHashMap;
use glam::Vec2;

use super::constants::{TILT_SCALE_X, TILT_SCALE_Y, TILT_SMOOTHING};
use super::input::PointerDrive;
use super::layout::LayoutTable;
use super::spring::SpringState;

pub type TagId = String;

/// Static description of one tag, read from markup at bootstrap.
#[derive(Clone, Debug)]
pub struct TagSpec {
    pub id: TagId,
    pub base_rotation_deg: f32,
    pub depth: f32,
}

/// Fallback parse for the numeric markup attributes behind [`TagSpec`].
/// Missing, empty, or unparseable values degrade to the fallback, never to
/// an error.
pub fn parse_f32_or(raw: Option<&str>, fallback: f32) -> f32 {
    raw.and_then(|v| v.trim().parse::<f32>().ok())
        .unwrap_or(fallback)
}

/// One hanging tag: static identity plus the state the frame tick mutates.
#[derive(Clone, Debug)]
pub struct Tag {
    /// Resting rotation from markup, degrees.
    pub base_rotation_deg: f32,
    /// Parallax weight; deeper tags shift further under tilt.
    pub depth: f32,
    /// Anchor offset from the scene origin. Written only by `relayout`.
    pub anchor: Vec2,
    pub spring: SpringState,
}

/// Smoothed container rotation, degrees. `current` eases toward `target`
/// monotonically in magnitude; only a new target makes it change course.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct TiltState {
    pub current: Vec2,
    pub target: Vec2,
}

/// Container transform for one frame.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct ContainerPose {
    pub rotate_y_deg: f32,
    pub rotate_x_deg: f32,
}

impl ContainerPose {
    /// CSS transform for the container: yaw, then pitch.
    pub fn css_transform(&self) -> String {
        format!(
            "rotateY({}deg) rotateX({}deg)",
            self.rotate_y_deg, self.rotate_x_deg
        )
    }
}

/// One tag's transform for one frame.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct TagPose {
    pub x: f32,
    pub y: f32,
    pub depth: f32,
    pub rotation_deg: f32,
}

impl TagPose {
    /// CSS transform for one tag. The centering translate must precede the
    /// depth offset and the rotation must come last; rotating earlier
    /// pivots the tag around its corner.
    pub fn css_transform(&self) -> String {
        format!(
            "translate(-50%, -50%) translate3d({}px, {}px, {}px) rotate({}deg)",
            self.x, self.y, self.depth, self.rotation_deg
        )
    }
}

/// The keychain aggregate: every tag keyed by id, plus the shared tilt.
///
/// Two writer classes, no overlap: pointer events write target fields
/// through [`Scene::apply_drive`], the frame tick integrates everything
/// else in [`Scene::tick`]. Layout changes write anchors through
/// [`Scene::relayout`], synchronously from the resize handler.
pub struct Scene {
    tags: FnvHashMap<TagId, Tag>,
    order: Vec<TagId>,
    tilt: TiltState,
    layout: LayoutTable,
}

impl Scene {
    pub fn new(specs: Vec<TagSpec>, layout: LayoutTable) -> Self {
        let mut tags = FnvHashMap::default();
        let mut order = Vec::with_capacity(specs.len());
        for spec in specs {
            if tags.contains_key(&spec.id) {
                continue;
            }
            order.push(spec.id.clone());
            tags.insert(
                spec.id,
                Tag {
                    base_rotation_deg: spec.base_rotation_deg,
                    depth: spec.depth,
                    anchor: Vec2::ZERO,
                    spring: SpringState::default(),
                },
            );
        }
        Self {
            tags,
            order,
            tilt: TiltState::default(),
            layout,
        }
    }

    /// Re-seed every tag's anchor from the breakpoint active at this
    /// viewport width. Runs at init and on every size-class change.
    pub fn relayout(&mut self, viewport_width: f32) {
        let mapping = self.layout.resolve(viewport_width);
        for (id, tag) in &mut self.tags {
            tag.anchor = mapping.offset(id);
        }
    }

    /// Event-side writer: set the tilt target and every tag's swing target
    /// from one pointer sample (or [`PointerDrive::NEUTRAL`] on leave).
    /// Touches nothing the tick integrates.
    pub fn apply_drive(&mut self, drive: PointerDrive) {
        self.tilt.target = drive.tilt_target;
        for tag in self.tags.values_mut() {
            tag.spring.target = drive.swing_target;
        }
    }

    /// Advance one frame: ease the container tilt, step every spring, and
    /// emit poses into `out` (cleared first, ordered like [`Scene::tag_order`]).
    ///
    /// The parallax term divides the smoothed tilt back through the tilt
    /// scales, recovering a normalized deflection that is then weighted by
    /// each tag's depth.
    pub fn tick(&mut self, out: &mut Vec<TagPose>) -> ContainerPose {
        self.tilt.current += (self.tilt.target - self.tilt.current) * TILT_SMOOTHING;
        let tilt = self.tilt.current;

        out.clear();
        for id in &self.order {
            let Some(tag) = self.tags.get_mut(id) else {
                continue;
            };
            tag.spring.step();
            out.push(TagPose {
                x: tag.anchor.x + (-tilt.x / TILT_SCALE_X * tag.depth),
                y: tag.anchor.y + (tilt.y / TILT_SCALE_Y * tag.depth),
                depth: tag.depth,
                rotation_deg: tag.base_rotation_deg + tag.spring.angle,
            });
        }

        ContainerPose {
            rotate_y_deg: tilt.x,
            rotate_x_deg: tilt.y,
        }
    }

    /// Tag ids in markup order; `tick` emits poses in the same order.
    pub fn tag_order(&self) -> &[TagId] {
        &self.order
    }

    pub fn tag(&self, id: &str) -> Option<&Tag> {
        self.tags.get(id)
    }

    pub fn tilt(&self) -> TiltState {
        self.tilt
    }

    pub fn layout(&self) -> &LayoutTable {
        &self.layout
    }

    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }
}
