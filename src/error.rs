use std::path::PathBuf;
use thiserror::Error;

/// Everything that can abort a grading run.
#[derive(Debug, Error)]
pub enum GradesError {
    #[error("file '{}' not found", path.display())]
    FileNotFound { path: PathBuf },

    #[error("I/O error on '{}': {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("malformed CSV: {0}")]
    Csv(#[from] csv::Error),

    #[error("failed to write CSV '{}': {source}", path.display())]
    CsvWrite {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },

    #[error("failed to encode summary as JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("line {line}: score '{value}' for '{subject}' is not a number")]
    InvalidScore {
        line: u64,
        subject: String,
        value: String,
    },

    #[error("header must have a name column followed by at least one score column")]
    MissingScoreColumns,

    #[error("no student rows in input")]
    EmptyInput,
}

impl GradesError {
    /// Builds the right variant for a failed open/read/write of `path`.
    pub fn from_io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        let path = path.into();
        if source.kind() == std::io::ErrorKind::NotFound {
            GradesError::FileNotFound { path }
        } else {
            GradesError::Io { path, source }
        }
    }

    /// True for errors caused by the content of the input file.
    pub fn is_parse_error(&self) -> bool {
        matches!(
            self,
            GradesError::Csv(_) | GradesError::InvalidScore { .. } | GradesError::MissingScoreColumns
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io;

    #[test]
    fn test_not_found_maps_to_file_not_found() {
        let err = GradesError::from_io("missing.csv", io::Error::from(io::ErrorKind::NotFound));
        assert!(matches!(err, GradesError::FileNotFound { .. }));
        assert_eq!(err.to_string(), "file 'missing.csv' not found");
    }

    #[test]
    fn test_other_io_error_kept() {
        let err = GradesError::from_io(
            "locked.csv",
            io::Error::from(io::ErrorKind::PermissionDenied),
        );
        assert!(matches!(err, GradesError::Io { .. }));
        assert!(!err.is_parse_error());
    }

    #[test]
    fn test_parse_error_class() {
        assert!(GradesError::MissingScoreColumns.is_parse_error());
        assert!(
            GradesError::InvalidScore {
                line: 2,
                subject: "Math".into(),
                value: "abc".into(),
            }
            .is_parse_error()
        );
        assert!(!GradesError::EmptyInput.is_parse_error());
    }
}
