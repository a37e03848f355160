// Copyright @yucwang 2026

use thiserror::Error;

/// Failures of the outer surfaces: argument parsing, scene construction and
/// image output. Sampling failures inside the transport core are sentinels,
/// not errors.
#[derive(Debug, Error)]
pub enum RenderError {
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to write OpenEXR image: {0}")]
    Exr(String),
    #[error("invalid argument: {0}")]
    InvalidArgument(String),
    #[error("transform matrix is not invertible")]
    SingularTransform,
    #[error("scene has no camera")]
    MissingCamera,
}

pub type Result<T> = std::result::Result<T, RenderError>;
