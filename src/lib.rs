//! Face detection overlay: project normalized bounding boxes into pixel space
//! and draw them over the source image.
//!
//! The detector is an external collaborator behind the [`FaceDetector`] trait;
//! this crate decodes the image, projects each detected face's normalized box
//! into pixel coordinates, draws one outline per face on a copy of the image,
//! and formats a per-face confidence listing.
//!
//! # Example
//!
//! ```no_run
//! use face_overlay::{FaceAnnotator, FaceDetector, FaceOverlayError, FaceRecord};
//!
//! struct MyDetector;
//! impl FaceDetector for MyDetector {
//!     fn detect(&self, image_bytes: &[u8]) -> Result<Vec<FaceRecord>, FaceOverlayError> {
//!         // Call your detection service here
//!         Ok(vec![])
//!     }
//! }
//!
//! let raw_bytes = std::fs::read("photo.jpg").unwrap();
//! let result = FaceAnnotator::new(raw_bytes)
//!     .unwrap()
//!     .detector(Box::new(MyDetector))
//!     .annotate()
//!     .unwrap();
//! println!("{}", result.report());
//! ```
#![warn(missing_docs)]

/// Face detection trait.
pub mod detector;
mod error;
mod overlay;
mod project;
mod record;
/// HTTP detection backend speaking the Rekognition `DetectFaces` wire shape.
#[cfg(feature = "remote")]
pub mod remote;
mod report;
/// Built-in SeetaFace-based face detector backend.
#[cfg(feature = "rustface")]
pub mod rustface_backend;

use image::codecs::jpeg::JpegEncoder;
use image::codecs::png::PngEncoder;
use image::{ImageEncoder, RgbImage};
use tracing::debug;

/// Pluggable face detection backend trait.
pub use detector::FaceDetector;
/// Error type returned by face-overlay operations.
pub use error::FaceOverlayError;
/// Overlay drawing function and style options.
pub use overlay::{draw_face_boxes, OverlayStyle, DEFAULT_COLOR, DEFAULT_STROKE_WIDTH};
/// Normalized-to-pixel projection and its result type.
pub use project::{project, PixelRect};
/// Face record data types.
pub use record::{EmotionScore, FaceRecord, NormalizedBox};
/// Detector that calls a remote detection endpoint.
#[cfg(feature = "remote")]
pub use remote::RemoteDetector;
/// Per-face report formatting.
pub use report::format_report;
/// Detector that runs the bundled SeetaFace engine locally.
#[cfg(feature = "rustface")]
pub use rustface_backend::RustfaceDetector;

/// Result of an annotation pass: the rendered image plus the face records
/// that produced it. Lives for one detect-and-render cycle; nothing is
/// shared across invocations.
#[derive(Debug)]
pub struct Annotated {
    /// Copy of the input image with one outline per detected face.
    pub image: RgbImage,
    /// Detected faces in the order the detector reported them.
    pub faces: Vec<FaceRecord>,
}

impl Annotated {
    /// Number of faces drawn.
    pub fn face_count(&self) -> usize {
        self.faces.len()
    }

    /// True when detection returned no faces. A valid empty result, not an
    /// error — the image is then an unmarked copy of the input.
    pub fn is_empty(&self) -> bool {
        self.faces.is_empty()
    }

    /// Human-readable per-face confidence listing, in detection order.
    pub fn report(&self) -> String {
        report::format_report(&self.faces)
    }

    /// Encode the annotated image as PNG.
    pub fn encode_png(&self) -> Result<Vec<u8>, FaceOverlayError> {
        let mut buffer = Vec::new();
        let encoder = PngEncoder::new(&mut buffer);
        encoder
            .write_image(
                self.image.as_raw(),
                self.image.width(),
                self.image.height(),
                image::ExtendedColorType::Rgb8,
            )
            .map_err(|e| FaceOverlayError::EncodeError(e.to_string()))?;
        Ok(buffer)
    }

    /// Encode the annotated image as JPEG at the given quality (1–100).
    pub fn encode_jpeg(&self, quality: u8) -> Result<Vec<u8>, FaceOverlayError> {
        let mut buffer = Vec::new();
        let encoder = JpegEncoder::new_with_quality(&mut buffer, quality);
        encoder
            .write_image(
                self.image.as_raw(),
                self.image.width(),
                self.image.height(),
                image::ExtendedColorType::Rgb8,
            )
            .map_err(|e| FaceOverlayError::EncodeError(e.to_string()))?;
        Ok(buffer)
    }
}

/// Builder for running face detection and rendering outlines over an image.
///
/// Validates the input bytes on construction, then runs the configured
/// detector and draws the detected faces on a copy of the decoded image.
/// The detector is always an explicitly passed-in collaborator; there is no
/// ambient client or global session state.
pub struct FaceAnnotator {
    input: Vec<u8>,
    style: OverlayStyle,
    detector: Option<Box<dyn FaceDetector>>,
}

impl std::fmt::Debug for FaceAnnotator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FaceAnnotator")
            .field("input", &format_args!("{} bytes", self.input.len()))
            .field("style", &self.style)
            .field("detector", &self.detector.as_ref().map(|_| "dyn FaceDetector"))
            .finish()
    }
}

impl FaceAnnotator {
    /// Create an annotator from raw image bytes (JPEG, PNG, or WebP).
    ///
    /// Empty buffers are rejected here, before any detection call, and input
    /// that is not a recognizable image format is rejected up front as well.
    pub fn new(input: Vec<u8>) -> Result<Self, FaceOverlayError> {
        if input.is_empty() {
            return Err(FaceOverlayError::EmptyInput);
        }
        image::guess_format(&input).map_err(|e| FaceOverlayError::DecodeError(e.to_string()))?;

        Ok(Self {
            input,
            style: OverlayStyle::default(),
            detector: None,
        })
    }

    /// Set the RGB outline color (default: red).
    pub fn outline_color(mut self, color: [u8; 3]) -> Self {
        self.style.color = color;
        self
    }

    /// Set the outline stroke width in pixels (default: 3, must be > 0).
    pub fn stroke_width(mut self, width: u32) -> Self {
        self.style.stroke_width = width;
        self
    }

    /// Provide the face detection backend.
    ///
    /// ```no_run
    /// use face_overlay::{FaceAnnotator, FaceDetector, FaceOverlayError, FaceRecord};
    ///
    /// struct MyDetector;
    /// impl FaceDetector for MyDetector {
    ///     fn detect(&self, image_bytes: &[u8]) -> Result<Vec<FaceRecord>, FaceOverlayError> {
    ///         Ok(vec![])
    ///     }
    /// }
    ///
    /// let bytes = std::fs::read("photo.jpg").unwrap();
    /// let result = FaceAnnotator::new(bytes).unwrap()
    ///     .detector(Box::new(MyDetector))
    ///     .annotate().unwrap();
    /// ```
    pub fn detector(mut self, detector: Box<dyn FaceDetector>) -> Self {
        self.detector = Some(detector);
        self
    }

    /// Run the pipeline: decode → detect → project and draw.
    ///
    /// The output image has the same dimensions as the input. Detection and
    /// decode failures surface as errors; zero detected faces does not.
    pub fn annotate(self) -> Result<Annotated, FaceOverlayError> {
        if self.style.stroke_width == 0 {
            return Err(FaceOverlayError::InvalidStrokeWidth);
        }
        let detector = self.detector.as_deref().ok_or(FaceOverlayError::NoDetector)?;

        let decoded = image::load_from_memory(&self.input)
            .map_err(|e| FaceOverlayError::DecodeError(e.to_string()))?;
        let rgb = decoded.to_rgb8();
        if rgb.width() == 0 || rgb.height() == 0 {
            return Err(FaceOverlayError::InvalidDimension {
                width: rgb.width(),
                height: rgb.height(),
            });
        }

        let faces = detector.detect(&self.input)?;
        debug!(
            faces = faces.len(),
            width = rgb.width(),
            height = rgb.height(),
            "rendering face outlines"
        );

        let image = overlay::draw_face_boxes(&rgb, &faces, &self.style)?;
        Ok(Annotated { image, faces })
    }
}
