//! `rotsweep`: write rotated, border-cropped variants of one image.
//!
//! ```text
//! rotsweep photos/image1.jpg
//! rotsweep photos/image1.jpg --start -30 --end 30 --step 10 -e png --parallel
//! ```
//!
//! Logging goes through `env_logger`; set `RUST_LOG=info` to see every
//! written file and `RUST_LOG=debug` for the rotation geometry.

mod args;
mod report;

use std::process::ExitCode;

use args::Args;
use rotsweep_core::run_sweep;

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let args: Args = argh::from_env();

    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            log::error!("{}", e);
            eprintln!("Error: {}", e);
            eprintln!();
            eprintln!("{}", report::remediation_hints());
            ExitCode::FAILURE
        }
    }
}

fn run(args: &Args) -> Result<(), Box<dyn std::error::Error>> {
    let config = args.to_config();
    let report = run_sweep(&args.image_path, &config)?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        println!("{}", report::render(&report));
    }

    if !report.is_complete() {
        log::warn!(
            "{} of {} angles failed",
            report.failures(),
            report.total()
        );
    }

    Ok(())
}
