use serde::Deserialize;
use tracing::debug;

use crate::detector::FaceDetector;
use crate::error::FaceOverlayError;
use crate::record::{EmotionScore, FaceRecord, NormalizedBox};

/// Face detector that POSTs raw image bytes to a remote detection endpoint
/// and parses a Rekognition-style `DetectFaces` JSON response:
///
/// ```json
/// {
///   "FaceDetails": [
///     {
///       "BoundingBox": {"Left": 0.1, "Top": 0.2, "Width": 0.3, "Height": 0.4},
///       "Confidence": 98.5,
///       "Emotions": [{"Type": "HAPPY", "Confidence": 93.2}]
///     }
///   ]
/// }
/// ```
///
/// Uses a blocking client — the detection call is the only blocking step in
/// the pipeline and there is no concurrent use of the annotator.
pub struct RemoteDetector {
    endpoint: String,
    client: reqwest::blocking::Client,
}

impl RemoteDetector {
    /// Create a detector for the given endpoint URL with a default client.
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self {
            endpoint: endpoint.into(),
            client: reqwest::blocking::Client::new(),
        }
    }

    /// Create a detector with a pre-configured client (timeouts, proxies,
    /// auth headers).
    pub fn with_client(endpoint: impl Into<String>, client: reqwest::blocking::Client) -> Self {
        Self {
            endpoint: endpoint.into(),
            client,
        }
    }
}

impl FaceDetector for RemoteDetector {
    fn detect(&self, image_bytes: &[u8]) -> Result<Vec<FaceRecord>, FaceOverlayError> {
        if image_bytes.is_empty() {
            return Err(FaceOverlayError::EmptyInput);
        }

        debug!(
            endpoint = %self.endpoint,
            bytes = image_bytes.len(),
            "sending detection request"
        );

        let body = self
            .client
            .post(&self.endpoint)
            .header(reqwest::header::CONTENT_TYPE, "application/octet-stream")
            .body(image_bytes.to_vec())
            .send()
            .map_err(|e| FaceOverlayError::DetectionFailed(e.to_string()))?
            .error_for_status()
            .map_err(|e| FaceOverlayError::DetectionFailed(e.to_string()))?
            .text()
            .map_err(|e| FaceOverlayError::DetectionFailed(e.to_string()))?;

        let records = parse_response(&body)?;
        debug!(faces = records.len(), "detection response parsed");
        Ok(records)
    }
}

/// Parse a `DetectFaces` response body into face records, preserving the
/// order of `FaceDetails`.
fn parse_response(body: &str) -> Result<Vec<FaceRecord>, FaceOverlayError> {
    let parsed: DetectFacesResponse = serde_json::from_str(body).map_err(|e| {
        FaceOverlayError::DetectionFailed(format!("malformed detection response: {e}"))
    })?;
    Ok(parsed.face_details.into_iter().map(Into::into).collect())
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "PascalCase")]
struct DetectFacesResponse {
    #[serde(default)]
    face_details: Vec<FaceDetail>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "PascalCase")]
struct FaceDetail {
    bounding_box: WireBoundingBox,
    confidence: f64,
    #[serde(default)]
    emotions: Vec<WireEmotion>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "PascalCase")]
struct WireBoundingBox {
    left: f64,
    top: f64,
    width: f64,
    height: f64,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "PascalCase")]
struct WireEmotion {
    r#type: String,
    confidence: f64,
}

impl From<FaceDetail> for FaceRecord {
    fn from(detail: FaceDetail) -> Self {
        FaceRecord {
            bounding_box: NormalizedBox {
                left: detail.bounding_box.left,
                top: detail.bounding_box.top,
                width: detail.bounding_box.width,
                height: detail.bounding_box.height,
            },
            confidence: detail.confidence,
            emotions: detail
                .emotions
                .into_iter()
                .map(|e| EmotionScore {
                    kind: e.r#type,
                    confidence: e.confidence,
                })
                .collect(),
        }
    }
}
