use serde::Serialize;

pub mod codeforces;
pub mod problem;
pub mod submission;
pub mod tags;

pub use codeforces::{CfEnvelope, CfProblem, CfSubmission, CfUser};
pub use problem::Problem;
pub use submission::{Outcome, Submission, Verdict};
pub use tags::{parse_tag_literal, TagList};

/// Which recommendation bucket a problem was drawn from
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Bucket {
    /// Problems at the user's usual difficulty touching weak topics
    Weak,
    /// Slightly harder problems touching strong topics
    Strong,
}

/// A catalog problem chosen for the user
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct Recommendation {
    #[serde(flatten)]
    pub problem: Problem,
    pub similarity: f64,
    pub bucket: Bucket,
}

/// Response body of `GET /recommend`
#[derive(Debug, Clone, Serialize)]
pub struct RecommendationResponse {
    pub mode_rating: i32,
    pub strong_topics: Vec<String>,
    pub weak_topics: Vec<String>,
    pub recommendations: Vec<Recommendation>,
}

/// Response body of `GET /history`
#[derive(Debug, Clone, Serialize)]
pub struct HistoryResponse {
    pub history: Vec<Submission>,
}
