// Shared motion tuning constants used by the core and the web frontend.

// Distance scaler defaults
pub const DEFAULT_MAX_SCALE: f32 = 1.0;
pub const DEFAULT_MIN_SCALE: f32 = 0.5;
pub const DEFAULT_MAX_ROTATION_DEG: f32 = 45.0;
pub const DEFAULT_PERSPECTIVE_PX: f32 = 1000.0;

// Deform: translation (px) applied per degree of rotation, pulling the element back toward center
pub const DEFORM_TRANSLATE_PER_DEG: f32 = 2.0;

// Hero fade curve
pub const HERO_FADE_DISTANCE_RATIO: f32 = 0.7; // fraction of the viewport height scrolled to reach full progress
pub const HERO_CONTENT_FADE_RATE: f32 = 1.4;
pub const HERO_INDICATOR_FADE_RATE: f32 = 4.0;
pub const HERO_OVERLAY_MAX_OPACITY: f32 = 0.9;
pub const HERO_OPACITY_EPSILON: f32 = 0.01; // smaller content opacity changes are not written

// Assemblies rarely exceed this many parts; larger ones spill to the heap
pub const INLINE_PARTS: usize = 8;
