//! Sweep configuration.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use super::SweepError;
use crate::transform::{CONTENT_THRESHOLD, DEFAULT_PADDING};

/// Default JPEG quality for written variants.
pub const DEFAULT_JPEG_QUALITY: u8 = 95;

/// Default output extension.
pub const DEFAULT_EXTENSION: &str = "jpg";

/// Inclusive range of whole-degree angles.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct AngleRange {
    pub start: i32,
    pub end: i32,
    pub step: i32,
}

impl Default for AngleRange {
    /// -45° to +45° in 5° steps (19 angles).
    fn default() -> Self {
        Self {
            start: -45,
            end: 45,
            step: 5,
        }
    }
}

impl AngleRange {
    pub fn new(start: i32, end: i32, step: i32) -> Self {
        Self { start, end, step }
    }

    /// Reject ranges that would produce no angles.
    pub fn validate(&self) -> Result<(), SweepError> {
        if self.step <= 0 || self.start > self.end {
            return Err(SweepError::InvalidRange {
                start: self.start,
                end: self.end,
                step: self.step,
            });
        }
        Ok(())
    }

    /// The angles of the range, in ascending order.
    ///
    /// Empty for an invalid range.
    pub fn angles(&self) -> Vec<i32> {
        if self.validate().is_err() {
            return Vec::new();
        }
        (self.start..=self.end).step_by(self.step as usize).collect()
    }

    /// Number of angles in the range.
    pub fn len(&self) -> usize {
        if self.validate().is_err() {
            return 0;
        }
        ((self.end as i64 - self.start as i64) / self.step as i64 + 1) as usize
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Settings for one sweep run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SweepConfig {
    /// Angles to render.
    pub range: AngleRange,
    /// Pixels kept around the detected content.
    pub padding: u32,
    /// Luma above which a pixel counts as content.
    pub threshold: u8,
    /// Output file extension, which also selects the encoder.
    pub extension: String,
    /// JPEG quality (1-100) when writing JPEG.
    pub jpeg_quality: u8,
    /// Render angles on the rayon thread pool.
    pub parallel: bool,
    /// Where to write variants; `None` means next to the input.
    pub output_dir: Option<PathBuf>,
}

impl Default for SweepConfig {
    fn default() -> Self {
        Self {
            range: AngleRange::default(),
            padding: DEFAULT_PADDING,
            threshold: CONTENT_THRESHOLD,
            extension: DEFAULT_EXTENSION.to_string(),
            jpeg_quality: DEFAULT_JPEG_QUALITY,
            parallel: false,
            output_dir: None,
        }
    }
}
