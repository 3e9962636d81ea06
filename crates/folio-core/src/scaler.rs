use crate::constants::*;
use crate::error::{MotionError, Result};
use crate::rect::{ContainerRect, Viewport};
use crate::transform::Transform;
use glam::Vec2;
use serde::Deserialize;

/// Which viewport axes drive the scale.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AxisMode {
    Vertical,
    Horizontal,
    /// Both axes; the worse one wins.
    Radial,
}

impl AxisMode {
    pub fn from_flags(vertical: bool, horizontal: bool) -> Self {
        match (vertical, horizontal) {
            (true, false) => AxisMode::Vertical,
            (false, true) => AxisMode::Horizontal,
            _ => AxisMode::Radial,
        }
    }

    #[inline]
    fn uses_x(self) -> bool {
        matches!(self, AxisMode::Horizontal | AxisMode::Radial)
    }

    #[inline]
    fn uses_y(self) -> bool {
        matches!(self, AxisMode::Vertical | AxisMode::Radial)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase", default, deny_unknown_fields)]
pub struct ScalerConfig {
    pub vertical: bool,
    pub horizontal: bool,
    pub max_scale: f32,
    pub min_scale: f32,
    pub deform: bool,
    /// Degrees of tilt at the viewport edge.
    pub max_rotation: f32,
    /// Perspective distance in px used when deforming.
    pub perspective: f32,
}

impl Default for ScalerConfig {
    fn default() -> Self {
        Self {
            vertical: false,
            horizontal: false,
            max_scale: DEFAULT_MAX_SCALE,
            min_scale: DEFAULT_MIN_SCALE,
            deform: false,
            max_rotation: DEFAULT_MAX_ROTATION_DEG,
            perspective: DEFAULT_PERSPECTIVE_PX,
        }
    }
}

impl ScalerConfig {
    pub fn validate(self) -> Result<Self> {
        let (min, max) = (self.min_scale, self.max_scale);
        if !(min.is_finite() && max.is_finite() && 0.0 <= min && min <= max) {
            return Err(MotionError::InvalidScaleRange { min, max });
        }
        if !self.max_rotation.is_finite() {
            return Err(MotionError::InvalidRotation(self.max_rotation));
        }
        if !(self.perspective.is_finite() && self.perspective > 0.0) {
            return Err(MotionError::InvalidPerspective(self.perspective));
        }
        Ok(self)
    }

    #[inline]
    pub fn axis_mode(&self) -> AxisMode {
        AxisMode::from_flags(self.vertical, self.horizontal)
    }
}

/// Normalized `[0, 1]` distance of `center` from the viewport center over the
/// axes enabled by `mode`. 1 means at or beyond the viewport edge.
pub fn distance_factor(center: Vec2, viewport: &Viewport, mode: AxisMode) -> f32 {
    let half = viewport.center();
    let norm = ((center - half).abs() / half).min(Vec2::ONE);
    let mut factor = 0.0f32;
    if mode.uses_x() {
        factor = factor.max(norm.x);
    }
    if mode.uses_y() {
        factor = factor.max(norm.y);
    }
    factor
}

/// Scale for one element, or `None` when the element or viewport is not
/// laid out yet.
///
/// Scale uses absolute distance; the deform tilt uses the signed offset so
/// the element leans toward the viewport center from whichever side it is on.
pub fn compute(
    config: &ScalerConfig,
    element: &ContainerRect,
    viewport: &Viewport,
) -> Option<Transform> {
    if !element.has_area() || !viewport.has_area() {
        return None;
    }
    let mode = config.axis_mode();
    let center = element.center();
    let factor = distance_factor(center, viewport, mode);
    let scale = (config.max_scale - factor * (config.max_scale - config.min_scale))
        .clamp(config.min_scale, config.max_scale);

    if !config.deform {
        return Some(Transform::scale(scale));
    }

    let half = viewport.center();
    let signed = ((center - half) / half).clamp(Vec2::NEG_ONE, Vec2::ONE);
    let rot = config.max_rotation;
    let (mut rotate_x, mut rotate_y) = (0.0, 0.0);
    let (mut translate_x, mut translate_y) = (0.0, 0.0);
    if mode.uses_x() {
        rotate_y = -signed.x * rot;
        translate_x = -signed.x * rot * DEFORM_TRANSLATE_PER_DEG;
    }
    if mode.uses_y() {
        rotate_x = signed.y * rot;
        translate_y = -signed.y * rot * DEFORM_TRANSLATE_PER_DEG;
    }
    Some(
        Transform::IDENTITY
            .with_perspective(config.perspective)
            .with_translate(translate_x, translate_y)
            .with_scale(scale)
            .with_rotation(rotate_x, rotate_y),
    )
}

/// Per-element scaler state driven by its own frame loop.
#[derive(Clone, Debug)]
pub struct DistanceScaler {
    config: ScalerConfig,
    visible: bool,
    last_center: Option<Vec2>,
    viewport: Viewport,
}

impl DistanceScaler {
    pub fn new(config: ScalerConfig) -> Result<Self> {
        Ok(Self {
            config: config.validate()?,
            visible: false,
            last_center: None,
            viewport: Viewport::default(),
        })
    }

    pub fn config(&self) -> &ScalerConfig {
        &self.config
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }

    /// Intersection change. Becoming visible forces the next tick to write.
    pub fn set_visible(&mut self, visible: bool) {
        if visible && !self.visible {
            self.last_center = None;
        }
        self.visible = visible;
    }

    /// Transform to write this frame, if any.
    ///
    /// Skips while off-screen, while geometry is degenerate, and when the
    /// element center and viewport are unchanged since the last write.
    pub fn tick(&mut self, element: &ContainerRect, viewport: &Viewport) -> Option<Transform> {
        if !self.visible {
            return None;
        }
        let center = element.center();
        if self.last_center == Some(center) && self.viewport == *viewport {
            return None;
        }
        let transform = compute(&self.config, element, viewport)?;
        self.last_center = Some(center);
        self.viewport = *viewport;
        Some(transform)
    }
}
