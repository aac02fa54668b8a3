//! Black border detection and cropping.
//!
//! After rotation the canvas corners are filled with pure black. This module
//! finds the bounding box of everything brighter than a small luma threshold
//! and crops to it, keeping a few pixels of padding.
//!
//! # Limitation
//!
//! Black is a sentinel, not an alpha channel: dark content touching the edge
//! of the source is indistinguishable from the border and gets cropped with it.

use serde::{Deserialize, Serialize};

use crate::decode::RasterImage;
use crate::luminance::luma_u8;

/// Padding kept around the detected content, in pixels.
pub const DEFAULT_PADDING: u32 = 5;

/// Pixels with luma strictly above this value count as content.
pub const CONTENT_THRESHOLD: u8 = 10;

/// An axis-aligned rectangle in pixel coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct BoundingBox {
    pub x: u32,
    pub y: u32,
    pub width: u32,
    pub height: u32,
}

impl BoundingBox {
    pub fn new(x: u32, y: u32, width: u32, height: u32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Box covering a whole `width x height` image.
    pub fn full(width: u32, height: u32) -> Self {
        Self::new(0, 0, width, height)
    }

    /// Exclusive right edge.
    pub fn right(&self) -> u32 {
        self.x + self.width
    }

    /// Exclusive bottom edge.
    pub fn bottom(&self) -> u32 {
        self.y + self.height
    }

    /// True if the box lies inside a `width x height` image.
    pub fn is_within(&self, width: u32, height: u32) -> bool {
        self.right() <= width && self.bottom() <= height
    }

    /// Grow by `padding` on every side, then clamp to the image.
    ///
    /// The origin is clamped first and the size is then limited to what
    /// remains of the image from that origin.
    pub fn pad_and_clamp(&self, padding: u32, image_width: u32, image_height: u32) -> Self {
        let x = self.x.saturating_sub(padding);
        let y = self.y.saturating_sub(padding);
        let width = image_width
            .saturating_sub(x)
            .min(self.width.saturating_add(padding.saturating_mul(2)));
        let height = image_height
            .saturating_sub(y)
            .min(self.height.saturating_add(padding.saturating_mul(2)));

        Self::new(x, y, width, height)
    }
}

/// Find the smallest box containing every pixel with luma above `threshold`.
///
/// Returns `None` when no pixel qualifies.
pub fn content_bounds(image: &RasterImage, threshold: u8) -> Option<BoundingBox> {
    let width = image.width as usize;
    if width == 0 {
        return None;
    }

    let mut min_x = u32::MAX;
    let mut min_y = u32::MAX;
    let mut max_x = 0u32;
    let mut max_y = 0u32;
    let mut found = false;

    for (y, row) in image.pixels.chunks_exact(width * 3).enumerate() {
        for (x, px) in row.chunks_exact(3).enumerate() {
            if luma_u8(px[0], px[1], px[2]) > threshold {
                let (x, y) = (x as u32, y as u32);
                min_x = min_x.min(x);
                min_y = min_y.min(y);
                max_x = max_x.max(x);
                max_y = max_y.max(y);
                found = true;
            }
        }
    }

    found.then(|| BoundingBox::new(min_x, min_y, max_x - min_x + 1, max_y - min_y + 1))
}

/// Copy the pixels inside `bbox` into a new image.
///
/// The box is clamped to the image first; an empty intersection yields a
/// copy of the input.
pub fn crop_to_box(image: &RasterImage, bbox: BoundingBox) -> RasterImage {
    let left = bbox.x.min(image.width);
    let top = bbox.y.min(image.height);
    let right = bbox.right().min(image.width);
    let bottom = bbox.bottom().min(image.height);

    let out_width = right.saturating_sub(left);
    let out_height = bottom.saturating_sub(top);
    if out_width == 0 || out_height == 0 {
        return image.clone();
    }
    if out_width == image.width && out_height == image.height {
        return image.clone();
    }

    let src_stride = image.width as usize * 3;
    let row_bytes = out_width as usize * 3;
    let mut output = Vec::with_capacity(row_bytes * out_height as usize);

    // Copy pixel data row by row
    for src_y in top..bottom {
        let start = src_y as usize * src_stride + left as usize * 3;
        output.extend_from_slice(&image.pixels[start..start + row_bytes]);
    }

    RasterImage {
        width: out_width,
        height: out_height,
        pixels: output,
    }
}

/// Crop the black border using the default threshold.
///
/// An image with no content at all is returned unchanged.
pub fn crop_black_border(image: &RasterImage, padding: u32) -> RasterImage {
    crop_black_border_with(image, padding, CONTENT_THRESHOLD)
}

/// Crop the black border with an explicit padding and luma threshold.
pub fn crop_black_border_with(image: &RasterImage, padding: u32, threshold: u8) -> RasterImage {
    let Some(bounds) = content_bounds(image, threshold) else {
        log::debug!(
            "no content above luma {} in {}x{} image, keeping it as is",
            threshold,
            image.width,
            image.height
        );
        return image.clone();
    };

    let crop = bounds.pad_and_clamp(padding, image.width, image.height);
    log::debug!("content {:?}, cropping to {:?}", bounds, crop);
    crop_to_box(image, crop)
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Black canvas with a white rectangle at (x, y) of size (w, h).
    fn framed_image(width: u32, height: u32, x: u32, y: u32, w: u32, h: u32) -> RasterImage {
        let mut img = RasterImage::filled(width, height, [0, 0, 0]);
        for py in y..y + h {
            for px in x..x + w {
                let idx = ((py * width + px) * 3) as usize;
                img.pixels[idx..idx + 3].copy_from_slice(&[255, 255, 255]);
            }
        }
        img
    }

    #[test]
    fn test_content_bounds_finds_rectangle() {
        let img = framed_image(50, 40, 10, 5, 20, 12);
        assert_eq!(content_bounds(&img, 10), Some(BoundingBox::new(10, 5, 20, 12)));
    }

    #[test]
    fn test_content_bounds_single_pixel() {
        let img = framed_image(9, 9, 4, 7, 1, 1);
        assert_eq!(content_bounds(&img, 10), Some(BoundingBox::new(4, 7, 1, 1)));
    }

    #[test]
    fn test_content_bounds_all_black() {
        let img = RasterImage::filled(20, 20, [0, 0, 0]);
        assert_eq!(content_bounds(&img, 10), None);
    }

    #[test]
    fn test_threshold_is_strict() {
        let dim = RasterImage::filled(6, 6, [10, 10, 10]);
        assert_eq!(content_bounds(&dim, 10), None);

        let brighter = RasterImage::filled(6, 6, [11, 11, 11]);
        assert_eq!(content_bounds(&brighter, 10), Some(BoundingBox::full(6, 6)));
    }

    #[test]
    fn test_pad_and_clamp_inside() {
        let padded = BoundingBox::new(10, 10, 20, 20).pad_and_clamp(5, 100, 100);
        assert_eq!(padded, BoundingBox::new(5, 5, 30, 30));
    }

    #[test]
    fn test_pad_and_clamp_at_edges() {
        // Origin clamps to zero, then the size is limited by the image.
        let padded = BoundingBox::new(2, 3, 90, 95).pad_and_clamp(5, 100, 100);
        assert_eq!(padded, BoundingBox::new(0, 0, 100, 100));
        assert!(padded.is_within(100, 100));

        let padded = BoundingBox::new(2, 0, 10, 4).pad_and_clamp(5, 100, 100);
        assert_eq!(padded, BoundingBox::new(0, 0, 20, 14));
    }

    #[test]
    fn test_crop_black_border_pads_content() {
        let img = framed_image(100, 80, 20, 30, 40, 10);
        let result = crop_black_border(&img, DEFAULT_PADDING);

        assert_eq!((result.width, result.height), (50, 20));
        assert_eq!(result.pixel(0, 0), [0, 0, 0]);
        assert_eq!(result.pixel(5, 5), [255, 255, 255]);
        assert_eq!(result.pixel(44, 14), [255, 255, 255]);
        assert_eq!(result.pixel(45, 15), [0, 0, 0]);
    }

    #[test]
    fn test_crop_black_border_zero_padding_is_tight() {
        let img = framed_image(30, 30, 7, 9, 3, 4);
        let result = crop_black_border(&img, 0);

        assert_eq!((result.width, result.height), (3, 4));
        assert!(result.pixels.iter().all(|&v| v == 255));
    }

    #[test]
    fn test_all_black_returned_unchanged() {
        let img = RasterImage::filled(17, 9, [3, 3, 3]);
        assert_eq!(crop_black_border(&img, DEFAULT_PADDING), img);
    }

    #[test]
    fn test_no_border_returned_unchanged() {
        let img = RasterImage::filled(300, 400, [255, 255, 255]);
        assert_eq!(crop_black_border(&img, DEFAULT_PADDING), img);
    }

    #[test]
    fn test_custom_threshold() {
        let mut img = framed_image(20, 20, 5, 5, 2, 2);
        // A dim gray pixel outside the white block.
        let idx = (15 * 20 + 15) * 3;
        img.pixels[idx..idx + 3].copy_from_slice(&[40, 40, 40]);

        let loose = crop_black_border_with(&img, 0, 10);
        assert_eq!((loose.width, loose.height), (11, 11));

        let strict = crop_black_border_with(&img, 0, 100);
        assert_eq!((strict.width, strict.height), (2, 2));
    }

    #[test]
    fn test_crop_to_box_copies_region() {
        let mut img = RasterImage::filled(4, 3, [0, 0, 0]);
        for (i, v) in img.pixels.iter_mut().enumerate() {
            *v = i as u8;
        }

        let result = crop_to_box(&img, BoundingBox::new(1, 1, 2, 2));
        assert_eq!((result.width, result.height), (2, 2));
        assert_eq!(result.pixel(0, 0), img.pixel(1, 1));
        assert_eq!(result.pixel(1, 1), img.pixel(2, 2));
    }

    #[test]
    fn test_crop_to_box_clamps_oversized() {
        let img = framed_image(10, 10, 0, 0, 10, 10);
        let result = crop_to_box(&img, BoundingBox::new(6, 6, 50, 50));
        assert_eq!((result.width, result.height), (4, 4));
    }

    #[test]
    fn test_crop_to_box_outside_returns_copy() {
        let img = framed_image(10, 10, 0, 0, 10, 10);
        assert_eq!(crop_to_box(&img, BoundingBox::new(20, 20, 5, 5)), img);
    }
}

// ============================================================================
// Property-Based Tests
// ============================================================================
