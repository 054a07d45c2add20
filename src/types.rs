//! Records passed between the reader, processor and writers.

use serde::Serialize;
use std::fmt;

/// One input row: a student name and that student's subject scores.
#[derive(Debug, Clone, PartialEq)]
pub struct StudentRecord {
    pub name: String,
    pub scores: Vec<f64>,
}

/// Pass/fail outcome for a single student.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Status {
    Pass,
    Fail,
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Status::Pass => f.write_str("Pass"),
            Status::Fail => f.write_str("Fail"),
        }
    }
}

/// One output row, derived from exactly one [`StudentRecord`].
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ResultRecord {
    #[serde(rename = "Name")]
    pub name: String,
    #[serde(rename = "Average")]
    pub average: f64,
    #[serde(rename = "Status")]
    pub status: Status,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_display() {
        assert_eq!(Status::Pass.to_string(), "Pass");
        assert_eq!(Status::Fail.to_string(), "Fail");
    }
}
