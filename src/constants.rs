/// DOM hooks the front-end looks for.
///
/// Markup opts in with data attributes; everything else is configured
/// through `folio_core` options.
// Follow assemblies
pub const FOLLOW_ASSEMBLY_ATTR: &str = "data-follow-assembly"; // preset name
pub const FOLLOW_PARTS_ATTR: &str = "data-follow-parts"; // JSON parts list or full options
pub const FOLLOW_SIZE_ATTR: &str = "data-follow-size"; // reference size, px or `auto`
pub const FOLLOW_SIZE_AUTO: &str = "auto"; // track the container width
pub const PART_ATTR: &str = "data-part"; // part element inside a follow container

// Distance scalers
pub const SCALER_ATTR: &str = "data-distance-scaler"; // JSON options, may be empty

// Hero fade
pub const HERO_FADE_ATTR: &str = "data-hero-fade";
pub const HERO_INDICATOR_ATTR: &str = "data-hero-indicator";
pub const HERO_OVERLAY_ATTR: &str = "data-hero-overlay";

// Size attributes may carry a CSS unit suffix
pub const PX_SUFFIX: &str = "px";
