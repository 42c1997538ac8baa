use fnv::FnvHashMap;
use glam::Vec2;

/// Anchor offsets for every tag under one viewport size class.
#[derive(Clone, Debug, Default)]
pub struct OffsetMap {
    offsets: FnvHashMap<String, Vec2>,
}

impl OffsetMap {
    pub fn from_pairs(pairs: &[(&str, f32, f32)]) -> Self {
        let mut offsets = FnvHashMap::default();
        for &(id, x, y) in pairs {
            offsets.insert(id.to_owned(), Vec2::new(x, y));
        }
        Self { offsets }
    }

    /// Offset for `id`. Tags absent from the active mapping sit at the
    /// origin; that is a degraded layout, not a fault.
    pub fn offset(&self, id: &str) -> Vec2 {
        self.offsets.get(id).copied().unwrap_or(Vec2::ZERO)
    }
}

/// One responsive breakpoint: active while the viewport is at most
/// `max_width` CSS pixels wide.
#[derive(Clone, Debug)]
pub struct Breakpoint {
    pub max_width: f32,
    pub offsets: OffsetMap,
}

/// Ordered breakpoint list, narrowest first, with a desktop fallback.
#[derive(Clone, Debug)]
pub struct LayoutTable {
    breakpoints: Vec<Breakpoint>,
    desktop: OffsetMap,
}

impl LayoutTable {
    pub fn new(breakpoints: Vec<Breakpoint>, desktop: OffsetMap) -> Self {
        Self {
            breakpoints,
            desktop,
        }
    }

    /// Resolve the active mapping for a viewport width. Breakpoints are
    /// checked in order and the first match wins, even when a wider one
    /// would also match; no match falls back to the desktop mapping.
    pub fn resolve(&self, viewport_width: f32) -> &OffsetMap {
        for bp in &self.breakpoints {
            if viewport_width <= bp.max_width {
                return &bp.offsets;
            }
        }
        &self.desktop
    }

    /// Breakpoint widths in declaration order, for wiring media-query
    /// change listeners.
    pub fn breakpoint_widths(&self) -> impl Iterator<Item = f32> + '_ {
        self.breakpoints.iter().map(|bp| bp.max_width)
    }
}

impl Default for LayoutTable {
    /// The keychain's shipped layout: three stacked/staggered phone and
    /// tablet arrangements plus the spread desktop row.
    fn default() -> Self {
        Self::new(
            vec![
                Breakpoint {
                    max_width: 460.0,
                    offsets: OffsetMap::from_pairs(&[
                        ("tri", 0.0, 210.0),
                        ("oval", 0.0, 310.0),
                        ("rect", 0.0, 410.0),
                    ]),
                },
                Breakpoint {
                    max_width: 560.0,
                    offsets: OffsetMap::from_pairs(&[
                        ("tri", -80.0, 200.0),
                        ("oval", 0.0, 280.0),
                        ("rect", 80.0, 360.0),
                    ]),
                },
                Breakpoint {
                    max_width: 720.0,
                    offsets: OffsetMap::from_pairs(&[
                        ("tri", -180.0, 240.0),
                        ("oval", 0.0, 280.0),
                        ("rect", 180.0, 320.0),
                    ]),
                },
            ],
            OffsetMap::from_pairs(&[
                ("tri", -240.0, 260.0),
                ("oval", 0.0, 240.0),
                ("rect", 240.0, 260.0),
            ]),
        )
    }
}
