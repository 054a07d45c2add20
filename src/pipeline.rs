//! Linear grading run: read, grade, summarize, write.

use std::path::Path;
use tracing::info;

use crate::config::PipelineOptions;
use crate::error::GradesError;
use crate::output::{write_results, write_summary};
use crate::processor::process;
use crate::reader::read_students;
use crate::summary::Summary;

/// Grades the CSV at `input` and writes both reports.
///
/// The summary is computed before anything is written, so an input without
/// student rows fails with [`GradesError::EmptyInput`] and leaves no files
/// behind.
#[tracing::instrument(skip_all, fields(input = %input.display()))]
pub fn run(input: &Path, options: &PipelineOptions) -> Result<Summary, GradesError> {
    let students = read_students(input)?;
    let results = process(&students, &options.policy);
    let summary = Summary::from_results(&results)?;

    write_results(&options.results_path, &results)?;
    write_summary(&options.summary_path, &summary)?;

    info!(
        students = summary.count,
        passed = summary.pass_count,
        failed = summary.fail_count,
        "Grading run complete"
    );
    Ok(summary)
}
