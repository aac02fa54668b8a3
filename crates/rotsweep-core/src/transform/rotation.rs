//! Rotation onto an expanded canvas with a black sentinel background.
//!
//! The rotation uses inverse mapping: a pivot rotation matrix is built for
//! the source, its translation is shifted so the rotated content lands in
//! the middle of the larger canvas, and every canvas pixel is sampled from
//! the source through the inverse of that matrix.
//!
//! Canvas pixels whose source position falls outside the image are pure
//! black `(0, 0, 0)`. The border cropper relies on this.

use super::affine::AffineTransform;
use crate::decode::RasterImage;

/// Angles within this many degrees of a full turn are treated as no rotation.
const ZERO_ANGLE_TOLERANCE: f64 = 0.001;

/// Slack added before truncating canvas sizes, so that exact results such
/// as `100 * sin(90°)` are not pushed one pixel down by rounding noise.
const BOUNDS_EPSILON: f64 = 1e-9;

/// Normalize an angle into `[0, 360)`.
#[inline]
fn normalize_angle(angle_degrees: f64) -> f64 {
    angle_degrees.rem_euclid(360.0)
}

#[inline]
fn is_full_turn(normalized: f64) -> bool {
    normalized < ZERO_ANGLE_TOLERANCE || 360.0 - normalized < ZERO_ANGLE_TOLERANCE
}

/// Compute the canvas size that holds a rotated image without clipping.
///
/// ```text
/// new_w = h * |sin| + w * |cos|
/// new_h = h * |cos| + w * |sin|
/// ```
///
/// Both values are truncated toward zero and are at least 1.
///
/// # Example
///
/// ```
/// use rotsweep_core::transform::compute_rotated_bounds;
///
/// assert_eq!(compute_rotated_bounds(100, 50, 90.0), (50, 100));
/// assert_eq!(compute_rotated_bounds(100, 50, 0.0), (100, 50));
/// ```
pub fn compute_rotated_bounds(width: u32, height: u32, angle_degrees: f64) -> (u32, u32) {
    let normalized = normalize_angle(angle_degrees);
    if is_full_turn(normalized) {
        return (width, height);
    }

    let m = AffineTransform::rotation((0.0, 0.0), normalized, 1.0).coefficients();
    bounds_from_trig(width, height, m[0].abs(), m[1].abs())
}

fn bounds_from_trig(width: u32, height: u32, cos: f64, sin: f64) -> (u32, u32) {
    let (w, h) = (width as f64, height as f64);

    let new_w = (h * sin + w * cos + BOUNDS_EPSILON).trunc() as u32;
    let new_h = (h * cos + w * sin + BOUNDS_EPSILON).trunc() as u32;

    (new_w.max(1), new_h.max(1))
}

/// Rotate an image about its center onto a canvas large enough to hold it.
///
/// * The pivot is `(width / 2, height / 2)` with integer division.
/// * The canvas size comes from [`compute_rotated_bounds`].
/// * Sampling is bilinear; neighbours outside the source read as black.
///
/// Angles equivalent to 0 modulo 360 return an identical copy.
pub fn rotate(image: &RasterImage, angle_degrees: f64) -> RasterImage {
    let normalized = normalize_angle(angle_degrees);
    if is_full_turn(normalized) {
        return image.clone();
    }

    let center = ((image.width / 2) as f64, (image.height / 2) as f64);
    let mut matrix = AffineTransform::rotation(center, normalized, 1.0);

    let m = matrix.coefficients();
    let (dst_w, dst_h) = bounds_from_trig(image.width, image.height, m[0].abs(), m[1].abs());

    matrix.translate(
        dst_w as f64 / 2.0 - center.0,
        dst_h as f64 / 2.0 - center.1,
    );

    log::debug!(
        "rotate {}x{} by {}° onto {}x{} canvas",
        image.width,
        image.height,
        angle_degrees,
        dst_w,
        dst_h
    );

    warp(image, &matrix, dst_w, dst_h)
}

/// Resample `image` through `matrix` into a `dst_w x dst_h` canvas.
fn warp(image: &RasterImage, matrix: &AffineTransform, dst_w: u32, dst_h: u32) -> RasterImage {
    let inverse = matrix.inverse();
    let mut output = vec![0u8; dst_w as usize * dst_h as usize * 3];

    for (dst_y, row) in output.chunks_exact_mut(dst_w as usize * 3).enumerate() {
        for (dst_x, out) in row.chunks_exact_mut(3).enumerate() {
            let (src_x, src_y) = inverse.apply(dst_x as f64, dst_y as f64);
            out.copy_from_slice(&sample_bilinear(image, src_x, src_y));
        }
    }

    RasterImage {
        width: dst_w,
        height: dst_h,
        pixels: output,
    }
}

/// Get a pixel as [f64; 3], reading black outside the image.
#[inline]
fn get_pixel_or_black(image: &RasterImage, px: i64, py: i64) -> [f64; 3] {
    if px < 0 || py < 0 || px >= image.width as i64 || py >= image.height as i64 {
        return [0.0; 3];
    }
    let idx = (py as usize * image.width as usize + px as usize) * 3;
    [
        image.pixels[idx] as f64,
        image.pixels[idx + 1] as f64,
        image.pixels[idx + 2] as f64,
    ]
}

/// Sample a pixel using bilinear interpolation over a constant black border.
///
/// Positions more than one pixel outside the source have no source
/// counterpart at all and come back as exact black.
fn sample_bilinear(image: &RasterImage, x: f64, y: f64) -> [u8; 3] {
    if !x.is_finite() || !y.is_finite() {
        return [0, 0, 0];
    }

    let x0 = x.floor() as i64;
    let y0 = y.floor() as i64;

    if x0 < -1 || y0 < -1 || x0 >= image.width as i64 || y0 >= image.height as i64 {
        return [0, 0, 0];
    }

    let fx = x - x0 as f64;
    let fy = y - y0 as f64;

    let p00 = get_pixel_or_black(image, x0, y0);
    let p10 = get_pixel_or_black(image, x0 + 1, y0);
    let p01 = get_pixel_or_black(image, x0, y0 + 1);
    let p11 = get_pixel_or_black(image, x0 + 1, y0 + 1);

    let mut result = [0u8; 3];
    for i in 0..3 {
        let v = p00[i] * (1.0 - fx) * (1.0 - fy)
            + p10[i] * fx * (1.0 - fy)
            + p01[i] * (1.0 - fx) * fy
            + p11[i] * fx * fy;
        result[i] = v.clamp(0.0, 255.0).round() as u8;
    }

    result
}


// ============================================================================
// Property-Based Tests
// ============================================================================
