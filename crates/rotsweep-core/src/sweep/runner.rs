//! The rotate, crop and write loop.

use std::path::{Path, PathBuf};

use rayon::prelude::*;

use super::{AngleError, AngleOutcome, SweepConfig, SweepError, SweepReport};
use crate::decode::{decode_file, RasterImage};
use crate::encode::{encode_image, OutputFormat};
use crate::transform::{crop_black_border_with, rotate};

/// File name of the variant for `angle`: `{base}.{angle}.{ext}`.
///
/// The angle keeps its sign, so `-45` gives `image1.-45.jpg`.
pub fn output_file_name(base: &str, angle: i32, extension: &str) -> String {
    format!("{}.{}.{}", base, angle, extension)
}

/// Everything needed to render and write a single angle.
#[derive(Debug, Clone)]
pub struct SweepPlan {
    output_dir: PathBuf,
    base_name: String,
    extension: String,
    format: OutputFormat,
    padding: u32,
    threshold: u8,
}

impl SweepPlan {
    /// Resolve output naming and encoding for `input`.
    ///
    /// Without an explicit output directory, variants go next to the input,
    /// or into `.` when the input path has no directory part.
    pub fn new(input: &Path, config: &SweepConfig) -> Result<Self, SweepError> {
        let format = OutputFormat::from_extension(&config.extension, config.jpeg_quality)?;

        let base_name = input
            .file_stem()
            .map(|stem| stem.to_string_lossy().into_owned())
            .ok_or_else(|| SweepError::NoFileName(input.to_path_buf()))?;

        let output_dir = match &config.output_dir {
            Some(dir) => dir.clone(),
            None => match input.parent() {
                Some(parent) if !parent.as_os_str().is_empty() => parent.to_path_buf(),
                _ => PathBuf::from("."),
            },
        };

        Ok(Self {
            output_dir,
            base_name,
            extension: config.extension.clone(),
            format,
            padding: config.padding,
            threshold: config.threshold,
        })
    }

    pub fn output_dir(&self) -> &Path {
        &self.output_dir
    }

    /// Where the variant for `angle` is written.
    pub fn output_path(&self, angle: i32) -> PathBuf {
        self.output_dir
            .join(output_file_name(&self.base_name, angle, &self.extension))
    }

    /// Rotate and crop `source` for `angle`.
    pub fn render(&self, source: &RasterImage, angle: i32) -> RasterImage {
        let rotated = rotate(source, angle as f64);
        crop_black_border_with(&rotated, self.padding, self.threshold)
    }

    /// Render, encode and write the variant for `angle`.
    pub fn process_angle(&self, source: &RasterImage, angle: i32) -> Result<PathBuf, AngleError> {
        let cropped = self.render(source, angle);
        let bytes = encode_image(&cropped, self.format).map_err(AngleError::Encode)?;

        let path = self.output_path(angle);
        std::fs::write(&path, bytes).map_err(|source| AngleError::Write {
            path: path.clone(),
            source,
        })?;

        log::info!(
            "wrote {} ({}x{}) for {}°",
            path.display(),
            cropped.width,
            cropped.height,
            angle
        );
        Ok(path)
    }

    fn outcome(&self, source: &RasterImage, angle: i32) -> AngleOutcome {
        match self.process_angle(source, angle) {
            Ok(path) => AngleOutcome::succeeded(angle, path),
            Err(err) => {
                log::warn!("angle {}° failed: {}", angle, err);
                AngleOutcome::failed(angle, err.to_string())
            }
        }
    }
}

/// Decode `input` once and write one rotated, cropped variant per angle.
///
/// A decode failure aborts the sweep. Failures of individual angles are
/// recorded in the report and the remaining angles still run.
pub fn run_sweep(input: impl AsRef<Path>, config: &SweepConfig) -> Result<SweepReport, SweepError> {
    let input = input.as_ref();
    config.range.validate()?;
    let plan = SweepPlan::new(input, config)?;

    let source = decode_file(input)?;
    log::info!(
        "sweeping {} ({}x{}) over {} angles into {}",
        input.display(),
        source.width,
        source.height,
        config.range.len(),
        plan.output_dir().display()
    );

    let angles = config.range.angles();
    let outcomes: Vec<AngleOutcome> = if config.parallel {
        angles
            .par_iter()
            .map(|&angle| plan.outcome(&source, angle))
            .collect()
    } else {
        angles
            .iter()
            .map(|&angle| plan.outcome(&source, angle))
            .collect()
    };

    Ok(SweepReport {
        input: input.to_path_buf(),
        output_dir: plan.output_dir,
        outcomes,
    })
}
