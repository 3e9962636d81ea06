//! JSON options accepted from JS callers and `data-*` attributes.

use crate::composer::{Displacement, PartSpec};
use crate::error::{MotionError, Result};
use crate::presets;
use crate::rect::ContainerRect;
use crate::scaler::ScalerConfig;
use serde::Deserialize;

/// Where an assembly's reference size comes from.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Sizing {
    /// Pinned to a size given in the options.
    Fixed(f32),
    /// Follows the container's measured width; `initial` is used until the
    /// first measurement.
    Container { initial: f32 },
    /// No size at all. Only valid when every part has a pixel clamp.
    Unsized,
}

impl Sizing {
    pub fn initial(self) -> f32 {
        match self {
            Sizing::Fixed(size) => size,
            Sizing::Container { initial } => initial,
            Sizing::Unsized => 0.0,
        }
    }

    /// New reference size after `rect` was measured, if this sizing tracks
    /// the container and the container has been laid out.
    pub fn measure(self, rect: &ContainerRect) -> Option<f32> {
        match self {
            Sizing::Container { .. } if rect.has_area() => Some(rect.width),
            _ => None,
        }
    }
}

/// Follow-assembly options.
///
/// `parts` wins over `assembly` when both are present; one of them is
/// required. Parts with ratio clamps need `referenceSize` or
/// `fitContainer`, unless the preset brings its own size.
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase", default, deny_unknown_fields)]
pub struct FollowOptions {
    pub assembly: Option<String>,
    pub parts: Option<Vec<PartSpec>>,
    pub reference_size: Option<f32>,
    pub fit_container: bool,
}

impl FollowOptions {
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn for_assembly(name: &str) -> Self {
        Self {
            assembly: Some(name.to_string()),
            ..Self::default()
        }
    }

    /// Part table these options describe.
    pub fn part_specs(&self) -> Result<Vec<PartSpec>> {
        match (&self.parts, &self.assembly) {
            (Some(parts), _) if !parts.is_empty() => Ok(parts.clone()),
            (Some(_), _) => Err(MotionError::EmptyAssembly),
            (None, Some(name)) => presets::assembly(name),
            (None, None) => Err(MotionError::EmptyAssembly),
        }
    }

    pub fn sizing(&self) -> Sizing {
        if let Some(size) = self.reference_size {
            return Sizing::Fixed(size);
        }
        let preset = match (&self.parts, self.assembly.as_deref()) {
            (None, Some(name)) => presets::reference_size(name),
            _ => None,
        };
        match preset {
            Some(initial) => Sizing::Container { initial },
            None if self.fit_container => Sizing::Container { initial: 0.0 },
            None => Sizing::Unsized,
        }
    }

    /// Reference size to build the assembly with.
    pub fn reference_size(&self) -> f32 {
        self.sizing().initial()
    }

    /// Check the whole part table and return it.
    pub fn validate(&self) -> Result<Vec<PartSpec>> {
        let specs = self.part_specs()?;
        let sizing = self.sizing();
        if sizing == Sizing::Unsized {
            let relative = specs
                .iter()
                .find(|s| matches!(s.displacement, Displacement::Relative(_)));
            if let Some(spec) = relative {
                return Err(MotionError::MissingReferenceSize(spec.name.clone()));
            }
        }
        let size = sizing.initial();
        if !(size.is_finite() && size >= 0.0) {
            return Err(MotionError::InvalidReferenceSize(size));
        }
        for spec in &specs {
            spec.resolve(size)?;
        }
        Ok(specs)
    }
}

/// Parse scaler options; an empty string yields the defaults.
pub fn scaler_config_from_json(json: &str) -> Result<ScalerConfig> {
    let json = json.trim();
    if json.is_empty() {
        return Ok(ScalerConfig::default());
    }
    let config: ScalerConfig = serde_json::from_str(json)?;
    config.validate()
}
