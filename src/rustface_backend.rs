use std::path::Path;

use crate::detector::FaceDetector;
use crate::error::FaceOverlayError;
use crate::record::{FaceRecord, NormalizedBox};

/// Face detector backed by the `rustface` crate (SeetaFace engine).
///
/// Runs fully offline against a SeetaFace frontal-face model loaded from
/// disk. SeetaFace scores are unbounded, so they are mapped onto the 0–100
/// confidence scale as `(score * 10).clamp(0, 100)`. SeetaFace reports no
/// facial attributes, so `emotions` is always empty.
pub struct RustfaceDetector {
    model: rustface::Model,
}

impl RustfaceDetector {
    /// Load a SeetaFace model (e.g. `seeta_fd_frontal_v1.0.bin`) from disk.
    pub fn from_model_path(path: impl AsRef<Path>) -> Result<Self, FaceOverlayError> {
        let data = std::fs::read(path.as_ref()).map_err(|e| {
            FaceOverlayError::DetectionFailed(format!("failed to read model file: {e}"))
        })?;
        let model = rustface::read_model(std::io::Cursor::new(data)).map_err(|e| {
            FaceOverlayError::DetectionFailed(format!("failed to load SeetaFace model: {e}"))
        })?;
        Ok(Self { model })
    }
}

impl FaceDetector for RustfaceDetector {
    fn detect(&self, image_bytes: &[u8]) -> Result<Vec<FaceRecord>, FaceOverlayError> {
        let decoded = image::load_from_memory(image_bytes)
            .map_err(|e| FaceOverlayError::DecodeError(e.to_string()))?;
        let gray = image::imageops::grayscale(&decoded);
        let (width, height) = (gray.width(), gray.height());
        if width == 0 || height == 0 {
            return Err(FaceOverlayError::InvalidDimension { width, height });
        }

        let mut detector = rustface::create_detector_with_model(self.model.clone());
        detector.set_min_face_size(20);
        detector.set_score_thresh(2.0);
        detector.set_pyramid_scale_factor(0.8);
        detector.set_slide_window_step(4, 4);

        let faces = detector.detect(&rustface::ImageData::new(gray.as_raw(), width, height));

        Ok(faces
            .iter()
            .map(|face| {
                let bbox = face.bbox();
                FaceRecord {
                    bounding_box: NormalizedBox {
                        left: bbox.x() as f64 / width as f64,
                        top: bbox.y() as f64 / height as f64,
                        width: bbox.width() as f64 / width as f64,
                        height: bbox.height() as f64 / height as f64,
                    },
                    confidence: (face.score() * 10.0).clamp(0.0, 100.0),
                    emotions: Vec::new(),
                }
            })
            .collect())
    }
}
