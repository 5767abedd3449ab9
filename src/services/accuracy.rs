use std::collections::{BTreeMap, HashMap};

use crate::{error::RecordError, models::Submission};

/// A submission left out of the accuracy computation
#[derive(Debug, Clone, PartialEq)]
pub struct SkippedRecord {
    /// Position in the submission list
    pub position: usize,
    pub error: RecordError,
}

/// Per-tag solve accuracy plus the records that could not be used
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AccuracyReport {
    /// Tag → solved / attempted, always within [0, 1]
    pub accuracy: BTreeMap<String, f64>,
    pub skipped: Vec<SkippedRecord>,
}

#[derive(Default)]
struct TagCounts {
    attempted: u32,
    solved: u32,
}

/// Computes solve accuracy per tag.
///
/// Every (submission, tag) pair counts as one attempt, so repeated attempts
/// at the same problem all count. Tags never attempted are absent. A
/// submission with an unreadable tag list is skipped and reported.
pub fn calculate_accuracy(submissions: &[Submission]) -> AccuracyReport {
    let mut counts: HashMap<&str, TagCounts> = HashMap::new();
    let mut skipped = Vec::new();

    for (position, submission) in submissions.iter().enumerate() {
        let tags = match submission.tags.tags() {
            Ok(tags) => tags,
            Err(error) => {
                skipped.push(SkippedRecord { position, error });
                continue;
            }
        };

        let solved = submission.verdict.is_solved();
        for tag in tags {
            let entry = counts.entry(tag.as_str()).or_default();
            entry.attempted += 1;
            if solved {
                entry.solved += 1;
            }
        }
    }

    let accuracy = counts
        .into_iter()
        .filter(|(_, c)| c.attempted > 0)
        .map(|(tag, c)| (tag.to_string(), c.solved as f64 / c.attempted as f64))
        .collect();

    AccuracyReport { accuracy, skipped }
}
