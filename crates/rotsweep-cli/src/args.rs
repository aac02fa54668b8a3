//! Command line arguments.

use std::path::PathBuf;

use argh::FromArgs;
use rotsweep_core::sweep::{AngleRange, DEFAULT_EXTENSION, DEFAULT_JPEG_QUALITY};
use rotsweep_core::transform::{CONTENT_THRESHOLD, DEFAULT_PADDING};
use rotsweep_core::SweepConfig;

#[derive(FromArgs, Debug)]
/// Write rotated copies of an image with the black rotation border cropped off
pub struct Args {
    /// path to the input image
    #[argh(positional)]
    pub image_path: PathBuf,

    /// first angle in degrees (default: -45)
    #[argh(option, default = "-45")]
    pub start: i32,

    /// last angle in degrees, inclusive (default: 45)
    #[argh(option, default = "45")]
    pub end: i32,

    /// angle increment in degrees (default: 5)
    #[argh(option, default = "5")]
    pub step: i32,

    /// pixels kept around the detected content (default: 5)
    #[argh(option, short = 'p', default = "DEFAULT_PADDING")]
    pub padding: u32,

    /// luma above which a pixel counts as content (default: 10)
    #[argh(option, short = 't', default = "CONTENT_THRESHOLD")]
    pub threshold: u8,

    /// output extension, jpg or png (default: jpg)
    #[argh(option, short = 'e', default = "String::from(DEFAULT_EXTENSION)")]
    pub ext: String,

    /// jpeg quality 1-100 (default: 95)
    #[argh(option, short = 'q', default = "DEFAULT_JPEG_QUALITY")]
    pub quality: u8,

    /// directory for the variants (default: next to the input)
    #[argh(option, short = 'o')]
    pub output_dir: Option<PathBuf>,

    /// render angles in parallel
    #[argh(switch)]
    pub parallel: bool,

    /// print the report as JSON
    #[argh(switch)]
    pub json: bool,
}

impl Args {
    /// Build the sweep configuration from the parsed options.
    pub fn to_config(&self) -> SweepConfig {
        SweepConfig {
            range: AngleRange::new(self.start, self.end, self.step),
            padding: self.padding,
            threshold: self.threshold,
            extension: self.ext.clone(),
            jpeg_quality: self.quality,
            parallel: self.parallel,
            output_dir: self.output_dir.clone(),
        }
    }
}
