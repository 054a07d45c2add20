//! Run configuration: grading policy and output locations.

use std::path::PathBuf;

/// Minimum average score for a [`Pass`](crate::types::Status::Pass).
pub const PASS_THRESHOLD: f64 = 40.0;

/// Default path of the per-student results CSV.
pub const DEFAULT_RESULTS_PATH: &str = "grades_output.csv";

/// Default path of the plain-text class summary.
pub const DEFAULT_SUMMARY_PATH: &str = "summary.txt";

/// Rules the processor grades against.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GradingPolicy {
    pub pass_threshold: f64,
}

impl Default for GradingPolicy {
    fn default() -> Self {
        Self {
            pass_threshold: PASS_THRESHOLD,
        }
    }
}

/// Everything a pipeline run needs besides the input path.
#[derive(Debug, Clone)]
pub struct PipelineOptions {
    pub results_path: PathBuf,
    pub summary_path: PathBuf,
    pub policy: GradingPolicy,
}

impl Default for PipelineOptions {
    fn default() -> Self {
        Self {
            results_path: PathBuf::from(DEFAULT_RESULTS_PATH),
            summary_path: PathBuf::from(DEFAULT_SUMMARY_PATH),
            policy: GradingPolicy::default(),
        }
    }
}
