//! The angle sweep: decode once, then rotate, crop and write per angle.
//!
//! Each angle yields a tagged [`AngleOutcome`]; a failing angle is recorded
//! and the loop moves on. Only problems that make every angle impossible
//! (bad range, unknown output format, undecodable input) end the run early.
//!
//! Angles are independent, so with [`SweepConfig::parallel`] set they are
//! rendered on the rayon thread pool. The report keeps angle order either way.

mod config;
mod error;
mod report;
mod runner;

pub use config::{AngleRange, SweepConfig, DEFAULT_EXTENSION, DEFAULT_JPEG_QUALITY};
pub use error::{AngleError, SweepError};
pub use report::{AngleOutcome, AngleResult, SweepReport};
pub use runner::{output_file_name, run_sweep, SweepPlan};
