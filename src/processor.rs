//! Turns student score rows into graded results.

use tracing::debug;

use crate::config::GradingPolicy;
use crate::types::{ResultRecord, Status, StudentRecord};
use crate::utility::{mean, round2};

/// Maps an average onto a pass/fail status.
///
/// | Average               | Status |
/// |-----------------------|--------|
/// | >= `pass_threshold`   | Pass   |
/// | < `pass_threshold`    | Fail   |
pub fn status_for(average: f64, policy: &GradingPolicy) -> Status {
    match average {
        a if a >= policy.pass_threshold => Status::Pass,
        _ => Status::Fail,
    }
}

/// Grades a single student. The status is decided on the rounded average.
pub fn grade_student(student: &StudentRecord, policy: &GradingPolicy) -> ResultRecord {
    let average = round2(mean(&student.scores));

    ResultRecord {
        name: student.name.clone(),
        average,
        status: status_for(average, policy),
    }
}

/// Grades every student, preserving input order.
pub fn process(students: &[StudentRecord], policy: &GradingPolicy) -> Vec<ResultRecord> {
    let results: Vec<ResultRecord> = students
        .iter()
        .map(|s| grade_student(s, policy))
        .collect();

    debug!(
        students = results.len(),
        threshold = policy.pass_threshold,
        "Students graded"
    );
    results
}
