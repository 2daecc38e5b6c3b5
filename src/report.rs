use crate::record::FaceRecord;

/// Format the per-face listing shown alongside the annotated image.
///
/// One `Face N: Confidence XX.XX%` line per record, in detection order,
/// with any emotion scores indented beneath their face. An empty slice
/// formats as the no-faces message — a valid result, not an error.
pub fn format_report(faces: &[FaceRecord]) -> String {
    if faces.is_empty() {
        return "No faces detected.".to_string();
    }

    let mut out = format!("Detected {} face(s).\n", faces.len());
    for (i, face) in faces.iter().enumerate() {
        out.push_str(&format!(
            "Face {}: Confidence {:.2}%\n",
            i + 1,
            face.confidence
        ));
        for emotion in &face.emotions {
            out.push_str(&format!("  {}: {:.2}%\n", emotion.kind, emotion.confidence));
        }
    }
    out
}
