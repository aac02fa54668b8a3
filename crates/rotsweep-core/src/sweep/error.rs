//! Error types for the sweep driver.

use std::path::PathBuf;

use thiserror::Error;

use crate::decode::DecodeError;
use crate::encode::EncodeError;

/// Errors that stop a sweep before any angle is processed.
#[derive(Debug, Error)]
pub enum SweepError {
    /// The source image could not be read or decoded.
    #[error("Cannot load source image: {0}")]
    Decode(#[from] DecodeError),

    /// The angle range is empty or has a non-positive step.
    #[error("Invalid angle range {start}..={end} step {step}")]
    InvalidRange { start: i32, end: i32, step: i32 },

    /// The requested output extension has no encoder.
    #[error(transparent)]
    Format(#[from] EncodeError),

    /// The input path has no file name to derive output names from.
    #[error("Input path has no file name: {0}")]
    NoFileName(PathBuf),
}

/// Errors confined to a single angle; the sweep continues past them.
#[derive(Debug, Error)]
pub enum AngleError {
    /// Encoding the cropped image failed.
    #[error("encoding failed: {0}")]
    Encode(#[source] EncodeError),

    /// Writing the output file failed.
    #[error("cannot write {}: {source}", .path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}
