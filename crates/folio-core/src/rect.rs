use glam::Vec2;

/// Geometry snapshot of a laid-out element, in viewport coordinates.
///
/// Width and height are never negative; a rect with zero area means the
/// element is not measured yet.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct ContainerRect {
    pub left: f32,
    pub top: f32,
    pub width: f32,
    pub height: f32,
}

impl ContainerRect {
    pub fn new(left: f32, top: f32, width: f32, height: f32) -> Self {
        Self {
            left,
            top,
            width: finite_or_zero(width).max(0.0),
            height: finite_or_zero(height).max(0.0),
        }
    }

    #[inline]
    pub fn center(&self) -> Vec2 {
        Vec2::new(self.left + self.width / 2.0, self.top + self.height / 2.0)
    }

    #[inline]
    pub fn has_area(&self) -> bool {
        self.width > 0.0 && self.height > 0.0
    }
}

/// Viewport dimensions in CSS pixels.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Viewport {
    pub width: f32,
    pub height: f32,
}

impl Viewport {
    pub fn new(width: f32, height: f32) -> Self {
        Self {
            width: finite_or_zero(width).max(0.0),
            height: finite_or_zero(height).max(0.0),
        }
    }

    #[inline]
    pub fn center(&self) -> Vec2 {
        Vec2::new(self.width / 2.0, self.height / 2.0)
    }

    #[inline]
    pub fn has_area(&self) -> bool {
        self.width > 0.0 && self.height > 0.0
    }
}

/// Cached container geometry, refreshed on layout-changing events only.
///
/// Frame code reads the cached copy instead of querying layout every tick;
/// between refreshes the rect may be slightly stale, which the follow math
/// tolerates.
#[derive(Clone, Copy, Debug, Default)]
pub struct RectCache {
    rect: ContainerRect,
    refreshes: u32,
}

impl RectCache {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn refresh(&mut self, rect: ContainerRect) {
        self.rect = rect;
        self.refreshes = self.refreshes.wrapping_add(1);
    }

    #[inline]
    pub fn rect(&self) -> ContainerRect {
        self.rect
    }

    /// Number of refreshes seen so far; zero means never measured.
    #[inline]
    pub fn refreshes(&self) -> u32 {
        self.refreshes
    }
}

#[inline]
fn finite_or_zero(v: f32) -> f32 {
    if v.is_finite() {
        v
    } else {
        0.0
    }
}
