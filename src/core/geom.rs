use glam::Vec2;

/// Axis-aligned element bounds in viewport coordinates (CSS pixels), the
/// shape `getBoundingClientRect` hands back.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Rect {
    pub left: f32,
    pub top: f32,
    pub width: f32,
    pub height: f32,
}

impl Rect {
    pub fn new(left: f32, top: f32, width: f32, height: f32) -> Self {
        Self {
            left,
            top,
            width,
            height,
        }
    }

    #[inline]
    pub fn min(&self) -> Vec2 {
        Vec2::new(self.left, self.top)
    }

    #[inline]
    pub fn center(&self) -> Vec2 {
        Vec2::new(self.left + self.width / 2.0, self.top + self.height / 2.0)
    }

    #[inline]
    pub fn half_extents(&self) -> Vec2 {
        Vec2::new(self.width / 2.0, self.height / 2.0)
    }
}

/// Live bounding-rect queries against the page.
///
/// Tags move continuously, so the arm solver must read fresh rects every
/// frame rather than cache them. The web layer answers these from the real
/// DOM; tests answer them from fixed rects. `None` means the element could
/// not be resolved and whatever depends on it is skipped for the frame.
pub trait SceneGeometry {
    /// Bounds of the scene container (the shared coordinate origin).
    fn container_rect(&self) -> Option<Rect>;
    /// Bounds of the fixed ring hook all arms hang from.
    fn hook_rect(&self) -> Option<Rect>;
    /// Bounds of the attachment hole on the tag with this id.
    fn attachment_rect(&self, id: &str) -> Option<Rect>;
}
