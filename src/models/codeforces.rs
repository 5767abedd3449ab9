// ============================================================================
// Codeforces API Types
// ============================================================================

use chrono::{DateTime, Utc};
use serde::Deserialize;
use serde_json::Value;

use super::{Submission, TagList, Verdict};

/// Response envelope shared by every Codeforces API method
#[derive(Debug, Clone, Deserialize)]
pub struct CfEnvelope<T> {
    pub status: String,
    #[serde(default)]
    pub comment: Option<String>,
    #[serde(default)]
    pub result: Option<T>,
}

impl<T> CfEnvelope<T> {
    pub fn is_ok(&self) -> bool {
        self.status == "OK"
    }
}

/// Entry of `user.info`
#[derive(Debug, Clone, Deserialize)]
pub struct CfUser {
    pub handle: String,
    #[serde(default)]
    pub rating: Option<i32>,
}

/// Entry of `user.status`
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CfSubmission {
    pub id: i64,
    pub creation_time_seconds: i64,
    pub problem: CfProblem,
    /// Absent while the submission is still being judged
    #[serde(default)]
    pub verdict: Option<Verdict>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CfProblem {
    #[serde(default)]
    pub contest_id: Option<i64>,
    pub index: String,
    pub name: String,
    #[serde(default)]
    pub tags: Option<Value>,
    #[serde(default)]
    pub rating: Option<i32>,
}

impl From<CfSubmission> for Submission {
    fn from(raw: CfSubmission) -> Self {
        let time = DateTime::<Utc>::from_timestamp(raw.creation_time_seconds, 0)
            .unwrap_or_default();

        Submission {
            contest_id: raw.problem.contest_id,
            problem_index: raw.problem.index,
            name: raw.problem.name,
            tags: TagList::from_value(raw.problem.tags.as_ref()),
            rating: raw.problem.rating,
            verdict: raw.verdict.unwrap_or(Verdict::Testing),
            time,
        }
    }
}
