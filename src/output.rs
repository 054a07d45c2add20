//! Output formatting and persistence for graded results.
//!
//! Writes the per-student CSV and the plain-text class summary, and renders
//! the summary as JSON for `--json`.

use csv::WriterBuilder;
use std::fs::{self, File};
use std::path::Path;
use tracing::debug;

use crate::error::GradesError;
use crate::summary::Summary;
use crate::types::ResultRecord;
use crate::utility::format_score;

/// Writes `results` as a CSV with header `Name,Average,Status`.
///
/// Any existing file at `path` is truncated.
pub fn write_results(path: &Path, results: &[ResultRecord]) -> Result<(), GradesError> {
    debug!(path = %path.display(), rows = results.len(), "Writing results CSV");

    let file = File::create(path).map_err(|source| GradesError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let csv_err = |source: csv::Error| GradesError::CsvWrite {
        path: path.to_path_buf(),
        source,
    };

    let mut writer = WriterBuilder::new().has_headers(true).from_writer(file);
    for record in results {
        writer.serialize(record).map_err(csv_err)?;
    }
    writer.flush().map_err(|source| GradesError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    Ok(())
}

/// Renders the fixed six-line summary report.
pub fn render_summary(summary: &Summary) -> String {
    format!(
        "Number of students: {}\n\
         Highest Scorer: {} ({})\n\
         Lowest Scorer: {} ({})\n\
         Average Class Score: {}\n\
         Pass Count: {}\n\
         Fail Count: {}\n",
        summary.count,
        summary.highest.name,
        format_score(summary.highest.average),
        summary.lowest.name,
        format_score(summary.lowest.average),
        format_score(summary.class_average),
        summary.pass_count,
        summary.fail_count,
    )
}

/// Writes the rendered summary to `path`, replacing any existing file.
pub fn write_summary(path: &Path, summary: &Summary) -> Result<(), GradesError> {
    debug!(path = %path.display(), "Writing summary report");

    fs::write(path, render_summary(summary)).map_err(|source| GradesError::Io {
        path: path.to_path_buf(),
        source,
    })
}

/// Serializes the summary as pretty-printed JSON.
pub fn summary_json(summary: &Summary) -> Result<String, GradesError> {
    Ok(serde_json::to_string_pretty(summary)?)
}
