use image::{Rgb, RgbImage};
use imageproc::drawing::draw_hollow_rect_mut;
use imageproc::rect::Rect;
use tracing::debug;

use crate::error::FaceOverlayError;
use crate::project::{project, PixelRect};
use crate::record::FaceRecord;

/// Default outline color: red.
pub const DEFAULT_COLOR: [u8; 3] = [255, 0, 0];

/// Default outline stroke width in pixels.
pub const DEFAULT_STROKE_WIDTH: u32 = 3;

/// How face outlines are drawn.
#[derive(Debug, Clone)]
pub struct OverlayStyle {
    /// RGB outline color (default: red).
    pub color: [u8; 3],
    /// Outline thickness in pixels (default: 3). Must be > 0.
    pub stroke_width: u32,
}

impl Default for OverlayStyle {
    fn default() -> Self {
        Self {
            color: DEFAULT_COLOR,
            stroke_width: DEFAULT_STROKE_WIDTH,
        }
    }
}

/// Draw one rectangle outline per face record onto a copy of `image`.
///
/// The input image is not modified. Rectangles are drawn in the order the
/// records appear; later outlines may overlap earlier ones. An empty record
/// slice returns a plain copy. Out-of-range boxes are clipped to the image
/// bounds at draw time.
pub fn draw_face_boxes(
    image: &RgbImage,
    faces: &[FaceRecord],
    style: &OverlayStyle,
) -> Result<RgbImage, FaceOverlayError> {
    if style.stroke_width == 0 {
        return Err(FaceOverlayError::InvalidStrokeWidth);
    }

    let mut annotated = image.clone();
    for face in faces {
        let rect = project(&face.bounding_box, annotated.width(), annotated.height())?;
        debug!(
            left = rect.left,
            top = rect.top,
            right = rect.right,
            bottom = rect.bottom,
            "drawing face outline"
        );
        draw_outline(&mut annotated, &rect, style);
    }

    Ok(annotated)
}

/// Draw a hollow rectangle with the configured stroke width as nested
/// one-pixel rings shrinking inward from the rect's edges.
fn draw_outline(image: &mut RgbImage, rect: &PixelRect, style: &OverlayStyle) {
    let x = rect.left.round() as i64;
    let y = rect.top.round() as i64;
    let w = rect.width().round() as i64;
    let h = rect.height().round() as i64;

    for ring in 0..i64::from(style.stroke_width) {
        let ring_w = w - 2 * ring;
        let ring_h = h - 2 * ring;
        if ring_w <= 0 || ring_h <= 0 {
            // Zero-area or fully collapsed — nothing left to draw.
            break;
        }
        let ring_rect =
            Rect::at((x + ring) as i32, (y + ring) as i32).of_size(ring_w as u32, ring_h as u32);
        draw_hollow_rect_mut(image, ring_rect, Rgb(style.color));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::record::NormalizedBox;

    const WHITE: Rgb<u8> = Rgb([255, 255, 255]);
    const RED: Rgb<u8> = Rgb([255, 0, 0]);

    fn white_image(width: u32, height: u32) -> RgbImage {
        RgbImage::from_pixel(width, height, WHITE)
    }

    fn face_at(left: f64, top: f64, width: f64, height: f64) -> FaceRecord {
        FaceRecord {
            bounding_box: NormalizedBox {
                left,
                top,
                width,
                height,
            },
            confidence: 99.0,
            emotions: Vec::new(),
        }
    }

    #[test]
    fn empty_sequence_returns_identical_copy() {
        let input = white_image(64, 48);
        let output = draw_face_boxes(&input, &[], &OverlayStyle::default()).unwrap();
        assert_eq!(output.dimensions(), (64, 48));
        assert_eq!(output.as_raw(), input.as_raw());
    }

    #[test]
    fn input_image_is_not_mutated() {
        let input = white_image(100, 100);
        let faces = [face_at(0.1, 0.1, 0.5, 0.5)];
        let _ = draw_face_boxes(&input, &faces, &OverlayStyle::default()).unwrap();
        assert!(input.pixels().all(|p| *p == WHITE));
    }

    #[test]
    fn outline_covers_stroke_width_rings() {
        let input = white_image(100, 100);
        // Projects to rect (10, 10) .. (60, 60).
        let faces = [face_at(0.1, 0.1, 0.5, 0.5)];
        let output = draw_face_boxes(&input, &faces, &OverlayStyle::default()).unwrap();

        // Three nested rings at the top-left corner, then interior untouched.
        assert_eq!(*output.get_pixel(10, 10), RED);
        assert_eq!(*output.get_pixel(11, 11), RED);
        assert_eq!(*output.get_pixel(12, 12), RED);
        assert_eq!(*output.get_pixel(13, 13), WHITE);
        assert_eq!(*output.get_pixel(30, 30), WHITE);

        // Edges of the outer ring.
        assert_eq!(*output.get_pixel(59, 10), RED);
        assert_eq!(*output.get_pixel(10, 59), RED);
        assert_eq!(*output.get_pixel(59, 59), RED);
        assert_eq!(*output.get_pixel(60, 60), WHITE);
    }

    #[test]
    fn one_outline_per_record_in_order() {
        let input = white_image(200, 100);
        let faces = [
            face_at(0.0, 0.0, 0.25, 0.5),  // rect (0, 0) .. (50, 50)
            face_at(0.5, 0.2, 0.25, 0.5),  // rect (100, 20) .. (150, 70)
        ];
        let output = draw_face_boxes(&input, &faces, &OverlayStyle::default()).unwrap();

        assert_eq!(*output.get_pixel(0, 0), RED);
        assert_eq!(*output.get_pixel(49, 49), RED);
        assert_eq!(*output.get_pixel(100, 20), RED);
        assert_eq!(*output.get_pixel(149, 69), RED);
        // A point inside neither outline stays white.
        assert_eq!(*output.get_pixel(75, 90), WHITE);
    }

    #[test]
    fn overlapping_records_are_acceptable() {
        let input = white_image(100, 100);
        // Identical boxes overlap completely; both draw, no error.
        let both = [face_at(0.0, 0.0, 0.5, 1.0), face_at(0.0, 0.0, 0.5, 1.0)];
        let output = draw_face_boxes(&input, &both, &OverlayStyle::default()).unwrap();
        assert_eq!(*output.get_pixel(49, 50), RED);
    }

    #[test]
    fn custom_color_and_stroke() {
        let input = white_image(100, 100);
        let style = OverlayStyle {
            color: [0, 255, 0],
            stroke_width: 1,
        };
        let faces = [face_at(0.1, 0.1, 0.5, 0.5)];
        let output = draw_face_boxes(&input, &faces, &style).unwrap();
        assert_eq!(*output.get_pixel(10, 10), Rgb([0, 255, 0]));
        // Single ring — second ring position untouched.
        assert_eq!(*output.get_pixel(11, 11), WHITE);
    }

    #[test]
    fn zero_stroke_width_is_rejected() {
        let input = white_image(10, 10);
        let style = OverlayStyle {
            color: DEFAULT_COLOR,
            stroke_width: 0,
        };
        let err = draw_face_boxes(&input, &[], &style).unwrap_err();
        assert!(matches!(err, FaceOverlayError::InvalidStrokeWidth));
    }

    #[test]
    fn out_of_range_box_is_clipped_not_panicking() {
        let input = white_image(50, 50);
        let faces = [face_at(-0.5, -0.5, 2.0, 2.0)];
        let output = draw_face_boxes(&input, &faces, &OverlayStyle::default()).unwrap();
        assert_eq!(output.dimensions(), (50, 50));
        // The oversized outline lies entirely outside the visible area
        // except where it crosses the image, which is nowhere here — the
        // rect spans (-25, -25) .. (75, 75), so all four edges are off-image.
        assert!(output.pixels().all(|p| *p == WHITE));
    }

    #[test]
    fn zero_area_box_draws_nothing() {
        let input = white_image(50, 50);
        let faces = [face_at(0.5, 0.5, 0.0, 0.0)];
        let output = draw_face_boxes(&input, &faces, &OverlayStyle::default()).unwrap();
        assert!(output.pixels().all(|p| *p == WHITE));
    }
}
