//! Built-in part tables for the site's animated assemblies.
//!
//! Each assembly is plain data: a list of named parts with their own
//! follow tunables. Part names match the `data-part` attributes of the
//! markup that renders them.

use crate::composer::PartSpec;
use crate::error::{MotionError, Result};

/// Names accepted by [`assembly`].
pub const ASSEMBLY_NAMES: &[&str] = &["reaper", "hooded-reaper", "lamp", "sized-lamp"];

/// Reference size the sized lamp was tuned at, in px.
pub const LAMP_REFERENCE_SIZE: f32 = 200.0;

/// Two-layer reaper: the skull reacts quickly, the cape trails.
pub fn reaper() -> Vec<PartSpec> {
    vec![
        PartSpec::fixed("skull", 35.0, 20.0, 0.3),
        PartSpec::fixed("cape", 35.0, 12.0, 0.1),
    ]
}

/// Four-layer reaper used in the hero section.
///
/// Layers step evenly from the back cape to the eyes: each one closer to
/// the viewer reacts faster and travels further.
pub fn hooded_reaper() -> Vec<PartSpec> {
    vec![
        PartSpec::fixed("cape-back", 15.0, 55.0, 0.15),
        PartSpec::fixed("hoodie-front", 12.0, 62.5, 0.225),
        PartSpec::fixed("skull", 9.0, 70.0, 0.3),
        PartSpec::fixed("eyes", 6.0, 77.5, 0.375),
    ]
}

/// Oil lamp: the flame leads the body.
pub fn lamp() -> Vec<PartSpec> {
    vec![
        PartSpec::fixed("body", 12.0, 60.0, 0.2),
        PartSpec::fixed("flame", 7.0, 80.0, 0.4),
    ]
}

/// Lamp whose clamps follow its rendered size (ratios of
/// [`LAMP_REFERENCE_SIZE`] equivalent to [`lamp`]).
pub fn sized_lamp() -> Vec<PartSpec> {
    vec![
        PartSpec::relative("body", 12.0, 60.0 / LAMP_REFERENCE_SIZE, 0.2),
        PartSpec::relative("flame", 7.0, 80.0 / LAMP_REFERENCE_SIZE, 0.4),
    ]
}

/// Size a preset's ratio clamps were tuned at, for presets that have them.
pub fn reference_size(name: &str) -> Option<f32> {
    match name {
        "sized-lamp" => Some(LAMP_REFERENCE_SIZE),
        _ => None,
    }
}

pub fn assembly(name: &str) -> Result<Vec<PartSpec>> {
    match name {
        "reaper" => Ok(reaper()),
        "hooded-reaper" => Ok(hooded_reaper()),
        "lamp" => Ok(lamp()),
        "sized-lamp" => Ok(sized_lamp()),
        _ => Err(MotionError::UnknownAssembly(name.to_string())),
    }
}
