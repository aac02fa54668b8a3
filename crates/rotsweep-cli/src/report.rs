//! Human readable rendering of a sweep report.

use rotsweep_core::sweep::AngleResult;
use rotsweep_core::{AngleOutcome, SweepReport};

const RULE: &str = "==================================================";

/// One line per angle.
pub fn outcome_line(outcome: &AngleOutcome) -> String {
    match &outcome.result {
        AngleResult::Succeeded { file } => {
            let name = file
                .file_name()
                .map(|n| n.to_string_lossy().into_owned())
                .unwrap_or_else(|| file.display().to_string());
            format!("✓ {:+3}° → {}", outcome.angle, name)
        }
        AngleResult::Failed { reason } => format!("✗ {}°: {}", outcome.angle, reason),
    }
}

/// The full report: per-angle lines, summary and created files.
pub fn render(report: &SweepReport) -> String {
    let mut lines = vec![
        format!("Input: {}", report.input.display()),
        format!("Output directory: {}", report.output_dir.display()),
        RULE.to_string(),
    ];
    lines.extend(report.outcomes.iter().map(outcome_line));
    lines.push(RULE.to_string());
    lines.push(format!(
        "Created {}/{} files",
        report.successes(),
        report.total()
    ));

    let created = report.created_files();
    if !created.is_empty() {
        lines.push(String::new());
        lines.push("Created files:".to_string());
        lines.extend(created.iter().map(|path| format!("  {}", path.display())));
    }

    lines.join("\n")
}

/// Hints printed after a fatal error.
pub fn remediation_hints() -> &'static str {
    "Please check:\n\
     1. that the image path exists and is spelled correctly\n\
     2. that the file is a JPEG or PNG image\n\
     3. that you can write to the output directory"
}
