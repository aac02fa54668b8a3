//! Rotsweep Core - rotated variants with black borders cropped away
//!
//! This crate decodes one image, rotates it across a sweep of angles onto
//! canvases large enough to hold the whole rotated source, crops the black
//! corners that rotation leaves behind and writes each variant to disk.

pub mod decode;
pub mod encode;
pub mod luminance;
pub mod sweep;
pub mod transform;

pub use decode::{decode_file, DecodeError, RasterImage};
pub use sweep::{run_sweep, AngleOutcome, AngleRange, SweepConfig, SweepError, SweepReport};
pub use transform::{
    compute_rotated_bounds, crop_black_border, rotate, AffineTransform, BoundingBox,
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_white_image_at_zero_degrees() {
        let img = RasterImage::filled(300, 400, [255, 255, 255]);

        let rotated = rotate(&img, 0.0);
        assert_eq!((rotated.width, rotated.height), (300, 400));

        let cropped = crop_black_border(&rotated, transform::DEFAULT_PADDING);
        assert_eq!(cropped, img);
    }

    #[test]
    fn test_white_image_at_45_degrees() {
        let img = RasterImage::filled(300, 400, [255, 255, 255]);

        let rotated = rotate(&img, 45.0);
        assert_eq!((rotated.width, rotated.height), (494, 494));
        assert_eq!(rotated.pixel(0, 0), [0, 0, 0]);

        // The rotated rectangle touches every canvas edge, so padding and
        // clamping keep the full canvas.
        let cropped = crop_black_border(&rotated, transform::DEFAULT_PADDING);
        assert_eq!((cropped.width, cropped.height), (494, 494));
    }

    #[test]
    fn test_rotated_content_box_is_tight() {
        // Black margin around a white square: the crop ends up just around
        // the rotated square rather than the whole canvas.
        let mut img = RasterImage::filled(120, 120, [0, 0, 0]);
        for y in 40..80 {
            for x in 40..80 {
                let idx = (y * 120 + x) * 3;
                img.pixels[idx..idx + 3].copy_from_slice(&[255, 255, 255]);
            }
        }

        let rotated = rotate(&img, 45.0);
        let bounds = transform::content_bounds(&rotated, transform::CONTENT_THRESHOLD).unwrap();
        // Diagonal of the 40px square is ~56.6px.
        assert!((55..=60).contains(&bounds.width), "width {}", bounds.width);
        assert!((55..=60).contains(&bounds.height), "height {}", bounds.height);

        let cropped = crop_black_border(&rotated, transform::DEFAULT_PADDING);
        assert_eq!(cropped.width, bounds.width + 10);
        assert_eq!(cropped.height, bounds.height + 10);
    }

    #[test]
    fn test_crop_after_rotate_is_idempotent() {
        let img = RasterImage::filled(50, 30, [90, 160, 220]);
        for angle in [-45.0, -15.0, 20.0, 45.0] {
            let once = crop_black_border(&rotate(&img, angle), transform::DEFAULT_PADDING);
            let twice = crop_black_border(&once, transform::DEFAULT_PADDING);
            assert_eq!(once, twice, "angle {}", angle);
        }
    }
}
