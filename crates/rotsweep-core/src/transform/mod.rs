//! Geometric transforms: rotation onto an expanded canvas and border cropping.
//!
//! For every angle of a sweep the two steps run in this order:
//! 1. [`rotate`] the source onto a canvas sized to fit it, black background
//! 2. [`crop_black_border`] the result back to its content plus padding
//!
//! # Coordinate System
//!
//! - Rotation angles are in degrees, positive = counter-clockwise
//! - Origin is the top-left corner, y grows downwards
//! - The rotation pivot is `(width / 2, height / 2)` with integer division

mod affine;
mod crop;
mod rotation;

pub use affine::AffineTransform;
pub use crop::{
    content_bounds, crop_black_border, crop_black_border_with, crop_to_box, BoundingBox,
    CONTENT_THRESHOLD, DEFAULT_PADDING,
};
pub use rotation::{compute_rotated_bounds, rotate};
