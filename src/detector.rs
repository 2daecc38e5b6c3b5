use crate::error::FaceOverlayError;
use crate::record::FaceRecord;

/// Pluggable face detection backend.
///
/// Implement this trait to provide a detector (managed API, ONNX, dlib, etc.)
/// and pass it to [`crate::FaceAnnotator::detector`]. Implementations must
/// return records in the order the backend reported them; the renderer and
/// the report both preserve that order.
///
/// Detection failures (network errors, malformed responses) surface through
/// the `Result` — the rendering core never swallows them. Finding no faces
/// is not a failure; return an empty `Vec`.
pub trait FaceDetector: Send + Sync {
    /// Detect faces in an encoded image (JPEG, PNG, or WebP bytes).
    fn detect(&self, image_bytes: &[u8]) -> Result<Vec<FaceRecord>, FaceOverlayError>;
}
