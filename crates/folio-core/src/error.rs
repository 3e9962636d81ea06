use thiserror::Error;

/// Configuration errors raised while building motion components.
///
/// Every variant is a setup-time failure. Per-frame code never produces
/// one of these: unready geometry and missing host support are handled by
/// skipping the tick or relaxing to center.
#[derive(Debug, Error)]
pub enum MotionError {
    #[error("move factor must be finite and > 0, got {0}")]
    InvalidMoveFactor(f32),
    #[error("max displacement must be finite and >= 0, got {0}")]
    InvalidMaxDisplacement(f32),
    #[error("smoothing must be in (0, 1], got {0}")]
    InvalidSmoothing(f32),
    #[error("scale range must satisfy 0 <= min ({min}) <= max ({max})")]
    InvalidScaleRange { min: f32, max: f32 },
    #[error("max rotation must be finite, got {0}")]
    InvalidRotation(f32),
    #[error("perspective must be finite and > 0, got {0}")]
    InvalidPerspective(f32),
    #[error("reference size must be finite and >= 0, got {0}")]
    InvalidReferenceSize(f32),
    #[error("part `{0}` uses maxDisplacementRatio but no referenceSize or fitContainer is set")]
    MissingReferenceSize(String),
    #[error("part `{0}` is defined more than once")]
    DuplicatePart(String),
    #[error("unknown part `{0}`")]
    UnknownPart(String),
    #[error("unknown assembly `{0}`")]
    UnknownAssembly(String),
    #[error("assembly has no parts")]
    EmptyAssembly,
    #[error("invalid options: {0}")]
    Options(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, MotionError>;
