use thiserror::Error;

#[derive(Debug, Error)]
pub enum FaceOverlayError {
    #[error("input image buffer is empty")]
    EmptyInput,

    #[error("failed to decode image: {0}")]
    DecodeError(String),

    #[error("image dimensions must be non-zero, got {width}x{height}")]
    InvalidDimension { width: u32, height: u32 },

    #[error("stroke width must be > 0")]
    InvalidStrokeWidth,

    #[error("face detection failed: {0}")]
    DetectionFailed(String),

    #[error("failed to encode image: {0}")]
    EncodeError(String),

    #[error("no face detector configured")]
    NoDetector,
}
