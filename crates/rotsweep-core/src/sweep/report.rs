//! Per-angle outcomes and the sweep summary.

use std::path::{Path, PathBuf};

use serde::Serialize;

/// What happened to one angle.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum AngleResult {
    /// The variant was written to `file`.
    Succeeded { file: PathBuf },
    /// The variant could not be produced.
    Failed { reason: String },
}

/// Outcome of a single angle of the sweep.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AngleOutcome {
    pub angle: i32,
    #[serde(flatten)]
    pub result: AngleResult,
}

impl AngleOutcome {
    pub fn succeeded(angle: i32, file: PathBuf) -> Self {
        Self {
            angle,
            result: AngleResult::Succeeded { file },
        }
    }

    pub fn failed(angle: i32, reason: impl Into<String>) -> Self {
        Self {
            angle,
            result: AngleResult::Failed {
                reason: reason.into(),
            },
        }
    }

    pub fn is_success(&self) -> bool {
        matches!(self.result, AngleResult::Succeeded { .. })
    }

    /// The written file, if any.
    pub fn file(&self) -> Option<&Path> {
        match &self.result {
            AngleResult::Succeeded { file } => Some(file),
            AngleResult::Failed { .. } => None,
        }
    }
}

/// Aggregated result of a sweep, outcomes in angle order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SweepReport {
    pub input: PathBuf,
    pub output_dir: PathBuf,
    pub outcomes: Vec<AngleOutcome>,
}

impl SweepReport {
    pub fn total(&self) -> usize {
        self.outcomes.len()
    }

    pub fn successes(&self) -> usize {
        self.outcomes.iter().filter(|o| o.is_success()).count()
    }

    pub fn failures(&self) -> usize {
        self.total() - self.successes()
    }

    /// True when every angle produced a file.
    pub fn is_complete(&self) -> bool {
        self.failures() == 0
    }

    /// Paths of all written files, in angle order.
    pub fn created_files(&self) -> Vec<&Path> {
        self.outcomes.iter().filter_map(AngleOutcome::file).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn report() -> SweepReport {
        SweepReport {
            input: PathBuf::from("in/image1.jpg"),
            output_dir: PathBuf::from("in"),
            outcomes: vec![
                AngleOutcome::succeeded(-5, PathBuf::from("in/image1.-5.jpg")),
                AngleOutcome::failed(0, "disk full"),
                AngleOutcome::succeeded(5, PathBuf::from("in/image1.5.jpg")),
            ],
        }
    }

    #[test]
    fn test_counts() {
        let report = report();
        assert_eq!(report.total(), 3);
        assert_eq!(report.successes(), 2);
        assert_eq!(report.failures(), 1);
        assert!(!report.is_complete());
    }

    #[test]
    fn test_created_files_in_order() {
        let report = report();
        assert_eq!(
            report.created_files(),
            vec![Path::new("in/image1.-5.jpg"), Path::new("in/image1.5.jpg")]
        );
    }

    #[test]
    fn test_outcome_accessors() {
        let ok = AngleOutcome::succeeded(10, PathBuf::from("a.10.jpg"));
        assert!(ok.is_success());
        assert_eq!(ok.file(), Some(Path::new("a.10.jpg")));

        let failed = AngleOutcome::failed(10, "nope");
        assert!(!failed.is_success());
        assert_eq!(failed.file(), None);
    }
}
