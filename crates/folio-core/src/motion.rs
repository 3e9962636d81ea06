use crate::error::{MotionError, Result};
use crate::transform::Transform;
use glam::Vec2;

/// Tunables for one animated part.
///
/// - `move_factor` divides the raw offset (larger = less sensitive)
/// - `max_displacement` clamps the divided offset to `[-max, max]` per axis
/// - `smoothing` is the per-tick interpolation weight (1 = snap)
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PartConfig {
    move_factor: f32,
    max_displacement: f32,
    smoothing: f32,
}

impl PartConfig {
    pub fn new(move_factor: f32, max_displacement: f32, smoothing: f32) -> Result<Self> {
        if !(move_factor.is_finite() && move_factor > 0.0) {
            return Err(MotionError::InvalidMoveFactor(move_factor));
        }
        if !(max_displacement.is_finite() && max_displacement >= 0.0) {
            return Err(MotionError::InvalidMaxDisplacement(max_displacement));
        }
        if !(smoothing > 0.0 && smoothing <= 1.0) {
            return Err(MotionError::InvalidSmoothing(smoothing));
        }
        Ok(Self {
            move_factor,
            max_displacement,
            smoothing,
        })
    }

    #[inline]
    pub fn move_factor(&self) -> f32 {
        self.move_factor
    }

    #[inline]
    pub fn max_displacement(&self) -> f32 {
        self.max_displacement
    }

    #[inline]
    pub fn smoothing(&self) -> f32 {
        self.smoothing
    }

    /// Same factors with a different clamp; used when an assembly is resized.
    pub fn with_max_displacement(self, max_displacement: f32) -> Result<Self> {
        Self::new(self.move_factor, max_displacement, self.smoothing)
    }

    /// Clamped target for a raw pointer offset.
    #[inline]
    pub fn target(&self, raw: Vec2) -> Vec2 {
        let raw = if raw.is_finite() { raw } else { Vec2::ZERO };
        let max = Vec2::splat(self.max_displacement);
        (raw / self.move_factor).clamp(-max, max)
    }
}

/// Current interpolated position of a part, starting at the origin.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct PartState {
    pub x: f32,
    pub y: f32,
}

impl PartState {
    pub const ORIGIN: Self = Self { x: 0.0, y: 0.0 };

    #[inline]
    pub fn position(&self) -> Vec2 {
        Vec2::new(self.x, self.y)
    }

    #[inline]
    pub fn transform(&self) -> Transform {
        Transform::translate(self.x, self.y)
    }
}

impl From<Vec2> for PartState {
    fn from(v: Vec2) -> Self {
        Self { x: v.x, y: v.y }
    }
}

/// Advance one part by one tick toward the clamped target of `raw`.
///
/// With smoothing in (0, 1] the new position lies between the current
/// position and the target, so a part that starts inside the clamp range
/// never leaves it.
#[inline]
pub fn step(raw: Vec2, config: &PartConfig, state: PartState) -> PartState {
    let target = config.target(raw);
    let current = state.position();
    PartState::from(current + (target - current) * config.smoothing)
}
