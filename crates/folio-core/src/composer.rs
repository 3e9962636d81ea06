use crate::constants::INLINE_PARTS;
use crate::error::{MotionError, Result};
use crate::motion::{step, PartConfig, PartState};
use crate::transform::Transform;
use fnv::FnvHashMap;
use glam::Vec2;
use serde::Deserialize;
use smallvec::SmallVec;

/// How far a part may travel from its rest position.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Displacement {
    /// Absolute clamp in pixels.
    Fixed(f32),
    /// Clamp as a ratio of the assembly's reference size.
    Relative(f32),
}

impl Displacement {
    #[inline]
    pub fn resolve(self, reference_size: f32) -> f32 {
        match self {
            Displacement::Fixed(px) => px,
            Displacement::Relative(ratio) => ratio * reference_size,
        }
    }
}

/// Declarative description of one part, as listed in an assembly table or
/// received from options.
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(try_from = "RawPartSpec")]
pub struct PartSpec {
    pub name: String,
    pub move_factor: f32,
    pub displacement: Displacement,
    pub smoothing: f32,
}

impl PartSpec {
    pub fn fixed(name: &str, move_factor: f32, max_displacement: f32, smoothing: f32) -> Self {
        Self {
            name: name.to_string(),
            move_factor,
            displacement: Displacement::Fixed(max_displacement),
            smoothing,
        }
    }

    pub fn relative(name: &str, move_factor: f32, ratio: f32, smoothing: f32) -> Self {
        Self {
            name: name.to_string(),
            move_factor,
            displacement: Displacement::Relative(ratio),
            smoothing,
        }
    }

    /// Validated config for the given reference size.
    pub fn resolve(&self, reference_size: f32) -> Result<PartConfig> {
        PartConfig::new(
            self.move_factor,
            self.displacement.resolve(reference_size),
            self.smoothing,
        )
    }
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
struct RawPartSpec {
    name: String,
    move_factor: f32,
    max_displacement: Option<f32>,
    max_displacement_ratio: Option<f32>,
    smoothing: f32,
}

impl TryFrom<RawPartSpec> for PartSpec {
    type Error = String;

    fn try_from(raw: RawPartSpec) -> std::result::Result<Self, Self::Error> {
        let displacement = match (raw.max_displacement, raw.max_displacement_ratio) {
            (Some(px), None) => Displacement::Fixed(px),
            (None, Some(ratio)) => Displacement::Relative(ratio),
            (Some(_), Some(_)) => {
                return Err(format!(
                    "part `{}`: set either maxDisplacement or maxDisplacementRatio, not both",
                    raw.name
                ))
            }
            (None, None) => {
                return Err(format!(
                    "part `{}`: missing maxDisplacement or maxDisplacementRatio",
                    raw.name
                ))
            }
        };
        Ok(Self {
            name: raw.name,
            move_factor: raw.move_factor,
            displacement,
            smoothing: raw.smoothing,
        })
    }
}

pub struct Part<T> {
    spec: PartSpec,
    config: PartConfig,
    state: PartState,
    target: T,
}

impl<T> Part<T> {
    pub fn name(&self) -> &str {
        &self.spec.name
    }

    pub fn config(&self) -> &PartConfig {
        &self.config
    }

    pub fn state(&self) -> PartState {
        self.state
    }

    pub fn target(&self) -> &T {
        &self.target
    }
}

/// A set of named parts sharing one follow-loop subscription.
///
/// Every tick steps all parts with the same raw offset; the parallax comes
/// purely from each part's own config. `T` is whatever the caller renders
/// into (a DOM element on the web, `()` in tests).
pub struct MultiPartComposer<T> {
    parts: SmallVec<[Part<T>; INLINE_PARTS]>,
    index: FnvHashMap<String, usize>,
    reference_size: f32,
}

impl<T> MultiPartComposer<T> {
    /// Build from `(spec, target)` pairs, validating every config against
    /// `reference_size`.
    pub fn new(
        parts: impl IntoIterator<Item = (PartSpec, T)>,
        reference_size: f32,
    ) -> Result<Self> {
        check_reference_size(reference_size)?;
        let mut out = SmallVec::new();
        let mut index = FnvHashMap::default();
        for (spec, target) in parts {
            if index.contains_key(&spec.name) {
                return Err(MotionError::DuplicatePart(spec.name));
            }
            let config = spec.resolve(reference_size)?;
            index.insert(spec.name.clone(), out.len());
            out.push(Part {
                spec,
                config,
                state: PartState::ORIGIN,
                target,
            });
        }
        if out.is_empty() {
            return Err(MotionError::EmptyAssembly);
        }
        log::debug!(
            "[composer] {} parts, reference size {}",
            out.len(),
            reference_size
        );
        Ok(Self {
            parts: out,
            index,
            reference_size,
        })
    }

    pub fn len(&self) -> usize {
        self.parts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.parts.is_empty()
    }

    pub fn reference_size(&self) -> f32 {
        self.reference_size
    }

    pub fn parts(&self) -> impl Iterator<Item = &Part<T>> {
        self.parts.iter()
    }

    pub fn part(&self, name: &str) -> Option<&Part<T>> {
        self.index.get(name).map(|&i| &self.parts[i])
    }

    pub fn state(&self, name: &str) -> Result<PartState> {
        self.part(name)
            .map(Part::state)
            .ok_or_else(|| MotionError::UnknownPart(name.to_string()))
    }

    /// Step every part with the same `offset` and hand each new transform
    /// to `apply`.
    pub fn tick(&mut self, offset: Vec2, mut apply: impl FnMut(&T, Transform)) {
        for part in self.parts.iter_mut() {
            part.state = step(offset, &part.config, part.state);
            apply(&part.target, part.state.transform());
        }
    }

    /// Re-resolve ratio-based clamps for a new overall size. Positions are
    /// kept, pulled inside the new clamp when the assembly shrank.
    pub fn set_reference_size(&mut self, size: f32) -> Result<()> {
        check_reference_size(size)?;
        if size == self.reference_size {
            return Ok(());
        }
        let resolved = self
            .parts
            .iter()
            .map(|p| p.spec.resolve(size))
            .collect::<Result<SmallVec<[PartConfig; INLINE_PARTS]>>>()?;
        for (part, config) in self.parts.iter_mut().zip(resolved) {
            let max = Vec2::splat(config.max_displacement());
            part.state = PartState::from(part.state.position().clamp(-max, max));
            part.config = config;
        }
        log::debug!(
            "[composer] reference size {} -> {}",
            self.reference_size,
            size
        );
        self.reference_size = size;
        Ok(())
    }

    /// Put every part back at rest.
    pub fn reset(&mut self) {
        for part in self.parts.iter_mut() {
            part.state = PartState::ORIGIN;
        }
    }
}

fn check_reference_size(size: f32) -> Result<()> {
    if size.is_finite() && size >= 0.0 {
        Ok(())
    } else {
        Err(MotionError::InvalidReferenceSize(size))
    }
}
