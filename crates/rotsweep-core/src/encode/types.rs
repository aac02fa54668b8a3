//! Core types for image encoding.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors that can occur during encoding.
#[derive(Debug, Error)]
pub enum EncodeError {
    /// Pixel data length doesn't match expected dimensions
    #[error("Invalid pixel data: expected {expected} bytes (width * height * 3), got {actual}")]
    InvalidPixelData { expected: usize, actual: usize },

    /// Width or height is zero
    #[error("Invalid dimensions: width ({width}) and height ({height}) must be non-zero")]
    InvalidDimensions { width: u32, height: u32 },

    /// No encoder is available for the requested file extension
    #[error("Unsupported output format: .{0}")]
    UnsupportedFormat(String),

    /// The underlying codec failed
    #[error("Encoding failed: {0}")]
    EncodingFailed(String),
}

/// Output container chosen from the file extension.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum OutputFormat {
    /// Baseline JPEG with the given quality (1-100).
    Jpeg { quality: u8 },
    /// Lossless PNG.
    Png,
}

impl OutputFormat {
    /// Pick a format from a file extension (case insensitive, without dot).
    pub fn from_extension(ext: &str, jpeg_quality: u8) -> Result<Self, EncodeError> {
        match ext.to_ascii_lowercase().as_str() {
            "jpg" | "jpeg" => Ok(OutputFormat::Jpeg {
                quality: jpeg_quality,
            }),
            "png" => Ok(OutputFormat::Png),
            _ => Err(EncodeError::UnsupportedFormat(ext.to_string())),
        }
    }
}

/// Check that an RGB buffer is non-empty and matches its dimensions.
pub(crate) fn validate_rgb(pixels: &[u8], width: u32, height: u32) -> Result<(), EncodeError> {
    if width == 0 || height == 0 {
        return Err(EncodeError::InvalidDimensions { width, height });
    }

    let expected = (width as usize) * (height as usize) * 3;
    if pixels.len() != expected {
        return Err(EncodeError::InvalidPixelData {
            expected,
            actual: pixels.len(),
        });
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_from_extension() {
        assert_eq!(
            OutputFormat::from_extension("jpg", 90).unwrap(),
            OutputFormat::Jpeg { quality: 90 }
        );
        assert_eq!(
            OutputFormat::from_extension("JPEG", 75).unwrap(),
            OutputFormat::Jpeg { quality: 75 }
        );
        assert_eq!(OutputFormat::from_extension("Png", 90).unwrap(), OutputFormat::Png);
    }

    #[test]
    fn test_unknown_extension_rejected() {
        let err = OutputFormat::from_extension("tiff", 90).unwrap_err();
        assert!(matches!(err, EncodeError::UnsupportedFormat(ref ext) if ext == "tiff"));
        assert_eq!(err.to_string(), "Unsupported output format: .tiff");
    }

    #[test]
    fn test_validate_rgb() {
        assert!(validate_rgb(&[0; 12], 2, 2).is_ok());
        assert!(matches!(
            validate_rgb(&[0; 11], 2, 2),
            Err(EncodeError::InvalidPixelData {
                expected: 12,
                actual: 11
            })
        ));
        assert!(matches!(
            validate_rgb(&[], 0, 2),
            Err(EncodeError::InvalidDimensions { .. })
        ));
    }
}
