use glam::Vec2;

/// Last known pointer position plus whether the pointer is over the page.
///
/// Written only by the input handlers, read once per tick by the follow
/// loop. A tracker that never saw a move event reports inactive at the
/// origin, so the first tick resolves to a zero offset.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct PositionTracker {
    sample: Vec2,
    active: bool,
}

impl PositionTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a pointer-move sample in viewport coordinates.
    #[inline]
    pub fn on_move(&mut self, x: f32, y: f32) {
        self.sample = Vec2::new(x, y);
        self.active = true;
    }

    /// Pointer left the tracked surface. The last sample is kept.
    #[inline]
    pub fn on_leave(&mut self) {
        self.active = false;
    }

    #[inline]
    pub fn is_active(&self) -> bool {
        self.active
    }

    #[inline]
    pub fn sample(&self) -> Vec2 {
        self.sample
    }
}
