use crate::error::FaceOverlayError;
use crate::record::NormalizedBox;

/// Axis-aligned rectangle in pixel coordinates.
///
/// Derived from a [`NormalizedBox`] by [`project`]; never persisted.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PixelRect {
    /// X coordinate of the left edge (pixels).
    pub left: f64,
    /// Y coordinate of the top edge (pixels).
    pub top: f64,
    /// X coordinate of the right edge (pixels).
    pub right: f64,
    /// Y coordinate of the bottom edge (pixels).
    pub bottom: f64,
}

impl PixelRect {
    /// Width of the rectangle in pixels.
    pub fn width(&self) -> f64 {
        self.right - self.left
    }

    /// Height of the rectangle in pixels.
    pub fn height(&self) -> f64 {
        self.bottom - self.top
    }
}

/// Map a normalized bounding box onto an image of the given pixel dimensions.
///
/// This is a pass-through transform, not a sanitizer: no clamping or range
/// validation is performed, so an out-of-range input box produces an
/// out-of-range rectangle. The renderer clips at draw time instead
/// (see [`crate::draw_face_boxes`]).
///
/// The only error is `InvalidDimension` when either image dimension is zero.
pub fn project(
    bbox: &NormalizedBox,
    width: u32,
    height: u32,
) -> Result<PixelRect, FaceOverlayError> {
    if width == 0 || height == 0 {
        return Err(FaceOverlayError::InvalidDimension { width, height });
    }

    let left = bbox.left * width as f64;
    let top = bbox.top * height as f64;

    Ok(PixelRect {
        left,
        top,
        right: left + bbox.width * width as f64,
        bottom: top + bbox.height * height as f64,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn full_image_box_maps_to_full_image_rect() {
        let bbox = NormalizedBox {
            left: 0.0,
            top: 0.0,
            width: 1.0,
            height: 1.0,
        };
        let rect = project(&bbox, 640, 480).unwrap();
        assert_eq!(rect.left, 0.0);
        assert_eq!(rect.top, 0.0);
        assert_eq!(rect.right, 640.0);
        assert_eq!(rect.bottom, 480.0);
    }

    #[test]
    fn reference_scenario_1000x500() {
        let bbox = NormalizedBox {
            left: 0.1,
            top: 0.2,
            width: 0.3,
            height: 0.4,
        };
        let rect = project(&bbox, 1000, 500).unwrap();
        assert_eq!(rect.left, 100.0);
        assert_eq!(rect.top, 100.0);
        assert_eq!(rect.right, 400.0);
        assert_eq!(rect.bottom, 300.0);
    }

    #[test]
    fn zero_width_box_has_zero_area() {
        let bbox = NormalizedBox {
            left: 0.5,
            top: 0.1,
            width: 0.0,
            height: 0.4,
        };
        let rect = project(&bbox, 800, 600).unwrap();
        assert_eq!(rect.left, rect.right);
        assert_eq!(rect.width(), 0.0);
    }

    #[test]
    fn zero_height_box_has_zero_area() {
        let bbox = NormalizedBox {
            left: 0.2,
            top: 0.3,
            width: 0.5,
            height: 0.0,
        };
        let rect = project(&bbox, 800, 600).unwrap();
        assert_eq!(rect.top, rect.bottom);
        assert_eq!(rect.height(), 0.0);
    }

    #[test]
    fn projection_is_linear_in_width() {
        // Scaling left/width by a factor while dividing the image width by
        // the same factor leaves the projected edges unchanged.
        let bbox = NormalizedBox {
            left: 0.2,
            top: 0.0,
            width: 0.4,
            height: 1.0,
        };
        let scaled = NormalizedBox {
            left: 0.4,
            top: 0.0,
            width: 0.8,
            height: 1.0,
        };
        let a = project(&bbox, 1000, 100).unwrap();
        let b = project(&scaled, 500, 100).unwrap();
        assert_eq!(a.left, b.left);
        assert_eq!(a.right, b.right);
    }

    #[test]
    fn out_of_range_box_passes_through_unclamped() {
        let bbox = NormalizedBox {
            left: -0.2,
            top: 0.5,
            width: 1.5,
            height: 0.8,
        };
        let rect = project(&bbox, 100, 100).unwrap();
        assert_eq!(rect.left, -20.0);
        assert_eq!(rect.right, 130.0);
        assert_eq!(rect.bottom, 130.0);
    }

    #[test]
    fn zero_width_image_is_rejected() {
        let bbox = NormalizedBox {
            left: 0.0,
            top: 0.0,
            width: 1.0,
            height: 1.0,
        };
        let err = project(&bbox, 0, 100).unwrap_err();
        assert!(matches!(
            err,
            FaceOverlayError::InvalidDimension { width: 0, height: 100 }
        ));
    }

    #[test]
    fn zero_height_image_is_rejected() {
        let bbox = NormalizedBox {
            left: 0.0,
            top: 0.0,
            width: 1.0,
            height: 1.0,
        };
        assert!(project(&bbox, 100, 0).is_err());
    }
}
