//! Class-level statistics over graded results.

use serde::Serialize;

use crate::error::GradesError;
use crate::types::{ResultRecord, Status};
use crate::utility::round2;

/// Aggregated view of a whole class.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Summary {
    pub count: usize,
    pub highest: ResultRecord,
    pub lowest: ResultRecord,
    pub class_average: f64,
    pub pass_count: usize,
    pub fail_count: usize,
}

impl Summary {
    /// Aggregates graded results into a [`Summary`].
    ///
    /// On ties for highest or lowest average the earliest record wins.
    ///
    /// # Errors
    ///
    /// Returns [`GradesError::EmptyInput`] when `results` is empty.
    pub fn from_results(results: &[ResultRecord]) -> Result<Self, GradesError> {
        let (first, rest) = results.split_first().ok_or(GradesError::EmptyInput)?;

        let mut highest = first;
        let mut lowest = first;
        let mut total = first.average;
        let mut pass_count = usize::from(first.status == Status::Pass);

        for r in rest {
            if r.average > highest.average {
                highest = r;
            }
            if r.average < lowest.average {
                lowest = r;
            }
            total += r.average;
            if r.status == Status::Pass {
                pass_count += 1;
            }
        }

        let count = results.len();

        Ok(Summary {
            count,
            highest: highest.clone(),
            lowest: lowest.clone(),
            class_average: round2(total / count as f64),
            pass_count,
            fail_count: count - pass_count,
        })
    }
}
