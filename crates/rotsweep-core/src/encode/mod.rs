//! Image encoding for sweep output.
//!
//! This module provides functionality for:
//! - Encoding images to JPEG format with configurable quality
//! - Encoding images to lossless PNG
//! - Choosing the encoder from an output file extension
//!
//! # Examples
//!
//! ```ignore
//! use rotsweep_core::encode::{encode_image, OutputFormat};
//!
//! let format = OutputFormat::from_extension("jpg", 95)?;
//! let bytes = encode_image(&image, format)?;
//! ```

mod jpeg;
mod png;
mod types;

pub use jpeg::encode_jpeg;
pub use png::encode_png;
pub use types::{EncodeError, OutputFormat};

use crate::decode::RasterImage;

/// Encode a raster with the given output format.
pub fn encode_image(image: &RasterImage, format: OutputFormat) -> Result<Vec<u8>, EncodeError> {
    match format {
        OutputFormat::Jpeg { quality } => {
            encode_jpeg(&image.pixels, image.width, image.height, quality)
        }
        OutputFormat::Png => encode_png(&image.pixels, image.width, image.height),
    }
}
