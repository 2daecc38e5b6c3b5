use serde::{Deserialize, Serialize};

/// Bounding box expressed as fractions of image width/height, origin at the
/// top-left corner.
///
/// Fields are nominally in `[0.0, 1.0]` but are carried through unclamped;
/// a malformed box projects to an out-of-range pixel rectangle rather than
/// an error (see [`crate::project`]).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct NormalizedBox {
    /// Distance of the left edge from the image's left edge, as a fraction
    /// of image width.
    pub left: f64,
    /// Distance of the top edge from the image's top edge, as a fraction
    /// of image height.
    pub top: f64,
    /// Box width as a fraction of image width.
    pub width: f64,
    /// Box height as a fraction of image height.
    pub height: f64,
}

/// Confidence that a detected face shows a particular emotion.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EmotionScore {
    /// Emotion label as reported by the detector, e.g. `HAPPY`.
    pub kind: String,
    /// Confidence in percent (0–100).
    pub confidence: f64,
}

/// One detected face: bounding box, confidence, and optional emotion scores.
///
/// Records are immutable once produced and live only for a single
/// detect-and-render cycle.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FaceRecord {
    /// Where the face sits in the image, in normalized coordinates.
    pub bounding_box: NormalizedBox,
    /// Detection confidence in percent (0–100).
    pub confidence: f64,
    /// Emotion scores in the order the detector reported them. May be empty.
    #[serde(default)]
    pub emotions: Vec<EmotionScore>,
}
