use crate::constants::{FOLLOW_SIZE_AUTO, PX_SUFFIX};
use folio_core::{scaler_config_from_json, FollowOptions, MotionError, PartSpec, ScalerConfig};

/// Reference size from an attribute value such as `"240"` or `"240px"`.
pub fn parse_size(raw: &str) -> Result<f32, MotionError> {
    let trimmed = raw.trim();
    let number = trimmed.strip_suffix(PX_SUFFIX).unwrap_or(trimmed).trim();
    match number.parse::<f32>() {
        Ok(size) if size.is_finite() && size >= 0.0 => Ok(size),
        Ok(size) => Err(MotionError::InvalidReferenceSize(size)),
        Err(_) => Err(MotionError::InvalidReferenceSize(f32::NAN)),
    }
}

/// Follow options from a container's attributes.
///
/// `parts` may hold a bare JSON array of parts or a full options object;
/// `assembly` names a preset and `size` pins the reference size, or makes
/// it follow the container width when set to `auto`. The resulting part
/// table is checked before returning.
pub fn follow_options_from_attrs(
    assembly: Option<&str>,
    parts: Option<&str>,
    size: Option<&str>,
) -> Result<FollowOptions, MotionError> {
    let mut options = match parts.map(str::trim).filter(|s| !s.is_empty()) {
        Some(json) if json.starts_with('[') => FollowOptions {
            parts: Some(serde_json::from_str::<Vec<PartSpec>>(json)?),
            ..FollowOptions::default()
        },
        Some(json) => FollowOptions::from_json(json)?,
        None => FollowOptions::default(),
    };
    if let Some(name) = assembly.map(str::trim).filter(|s| !s.is_empty()) {
        options.assembly = Some(name.to_string());
    }
    match size.map(str::trim) {
        Some(FOLLOW_SIZE_AUTO) => options.fit_container = true,
        Some(size) => options.reference_size = Some(parse_size(size)?),
        None => {}
    }
    options.validate()?;
    Ok(options)
}

/// Scaler options from the `data-distance-scaler` attribute value.
pub fn scaler_options_from_attr(raw: &str) -> Result<ScalerConfig, MotionError> {
    scaler_config_from_json(raw)
}
