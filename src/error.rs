use thiserror::Error;

/// Rejected mountain parameters. Raised when a `Mountain` is built, never during generation.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ParamError {
    #[error("profile width must be at least 2, got {0}")]
    WidthTooSmall(usize),

    #[error("min height {min} exceeds max height {max}")]
    InvertedHeightRange { min: f64, max: f64 },

    #[error("height range [{min}, {max}] must be finite")]
    NonFiniteHeightRange { min: f64, max: f64 },

    #[error("boundary height must be finite and within ±1e6, got {0}")]
    BoundaryHeight(f64),

    #[error("vertical span must be in (0, 1], got {0}")]
    VerticalSpan(f64),

    #[error("roughness must be in (0, 1.5), got {0}")]
    Roughness(f64),

    #[error("initial displacement must be in [0, 1e6], got {0}")]
    Displacement(f64),
}
