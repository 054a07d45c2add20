//! CSV reader for student score sheets.
//!
//! The schema is positional: column 0 is the student name and every later
//! column is a numeric score. Header labels are only used in error messages.

use csv::{ReaderBuilder, StringRecord, Trim};
use std::fs::File;
use std::io::Read;
use std::path::Path;
use tracing::debug;

use crate::error::GradesError;
use crate::types::StudentRecord;

/// Reads every student row from the CSV file at `path`, in file order.
///
/// # Errors
///
/// Returns [`GradesError::FileNotFound`] if `path` does not exist, and a
/// parse error if the header has no score columns, a row is ragged, or a
/// score is not numeric.
#[tracing::instrument(skip(path), fields(path = %path.as_ref().display()))]
pub fn read_students(path: impl AsRef<Path>) -> Result<Vec<StudentRecord>, GradesError> {
    let path = path.as_ref();
    let file = File::open(path).map_err(|e| GradesError::from_io(path, e))?;
    let students = read_students_from(file)?;

    debug!(students = students.len(), "Student records loaded");
    Ok(students)
}

/// Same as [`read_students`] but over any byte source.
pub fn read_students_from<R: Read>(source: R) -> Result<Vec<StudentRecord>, GradesError> {
    let mut rdr = ReaderBuilder::new().trim(Trim::All).from_reader(source);

    let headers = rdr.headers()?.clone();
    if headers.is_empty() {
        // Zero-byte file: nothing to grade, reported later as empty input.
        return Ok(Vec::new());
    }
    if headers.len() < 2 {
        return Err(GradesError::MissingScoreColumns);
    }

    let mut students = Vec::new();
    for result in rdr.records() {
        let record = result?;
        students.push(parse_row(&headers, &record)?);
    }

    Ok(students)
}

fn parse_row(headers: &StringRecord, record: &StringRecord) -> Result<StudentRecord, GradesError> {
    let line = record.position().map(|p| p.line()).unwrap_or(0);
    let name = record.get(0).unwrap_or_default().to_string();

    let scores = record
        .iter()
        .zip(headers.iter())
        .skip(1)
        .map(|(value, subject)| {
            value.parse::<f64>().map_err(|_| GradesError::InvalidScore {
                line,
                subject: subject.to_string(),
                value: value.to_string(),
            })
        })
        .collect::<Result<Vec<_>, _>>()?;

    Ok(StudentRecord { name, scores })
}
