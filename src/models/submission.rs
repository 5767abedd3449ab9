use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::TagList;

/// Judge verdict codes as reported by Codeforces
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Verdict {
    Ok,
    Failed,
    Partial,
    CompilationError,
    RuntimeError,
    WrongAnswer,
    PresentationError,
    TimeLimitExceeded,
    MemoryLimitExceeded,
    IdlenessLimitExceeded,
    SecurityViolated,
    Crashed,
    InputPreparationCrashed,
    Challenged,
    Skipped,
    Testing,
    Rejected,
    #[serde(other)]
    Other,
}

/// What a verdict means for accuracy
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Solved,
    NotSolved,
    Other,
}

impl Verdict {
    pub fn outcome(&self) -> Outcome {
        match self {
            Verdict::Ok => Outcome::Solved,
            Verdict::Failed
            | Verdict::Partial
            | Verdict::CompilationError
            | Verdict::RuntimeError
            | Verdict::WrongAnswer
            | Verdict::PresentationError
            | Verdict::TimeLimitExceeded
            | Verdict::MemoryLimitExceeded
            | Verdict::IdlenessLimitExceeded
            | Verdict::SecurityViolated
            | Verdict::Crashed
            | Verdict::InputPreparationCrashed
            | Verdict::Challenged => Outcome::NotSolved,
            Verdict::Skipped | Verdict::Testing | Verdict::Rejected | Verdict::Other => {
                Outcome::Other
            }
        }
    }

    pub fn is_solved(&self) -> bool {
        self.outcome() == Outcome::Solved
    }
}

/// One attempt by a user at a problem.
///
/// Repeated attempts at the same problem are separate submissions.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct Submission {
    pub contest_id: Option<i64>,
    pub problem_index: String,
    pub name: String,
    pub tags: TagList,
    pub rating: Option<i32>,
    pub verdict: Verdict,
    #[serde(with = "chrono::serde::ts_seconds")]
    pub time: DateTime<Utc>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_verdict_deserialization() {
        let v: Verdict = serde_json::from_str(r#""OK""#).unwrap();
        assert_eq!(v, Verdict::Ok);
        let v: Verdict = serde_json::from_str(r#""TIME_LIMIT_EXCEEDED""#).unwrap();
        assert_eq!(v, Verdict::TimeLimitExceeded);
        let v: Verdict = serde_json::from_str(r#""SOMETHING_NEW""#).unwrap();
        assert_eq!(v, Verdict::Other);
    }

    #[test]
    fn test_verdict_outcome() {
        assert_eq!(Verdict::Ok.outcome(), Outcome::Solved);
        assert_eq!(Verdict::WrongAnswer.outcome(), Outcome::NotSolved);
        assert_eq!(Verdict::CompilationError.outcome(), Outcome::NotSolved);
        assert_eq!(Verdict::Testing.outcome(), Outcome::Other);
        assert_eq!(Verdict::Skipped.outcome(), Outcome::Other);
        assert!(!Verdict::Other.is_solved());
    }

    #[test]
    fn test_submission_serialization() {
        let submission = Submission {
            contest_id: Some(4),
            problem_index: "A".to_string(),
            name: "Watermelon".to_string(),
            tags: TagList::Parsed(vec!["brute force".to_string(), "math".to_string()]),
            rating: Some(800),
            verdict: Verdict::WrongAnswer,
            time: Utc.timestamp_opt(1_700_000_000, 0).unwrap(),
        };

        let json = serde_json::to_value(&submission).unwrap();
        assert_eq!(json["contest_id"], 4);
        assert_eq!(json["problem_index"], "A");
        assert_eq!(json["tags"][1], "math");
        assert_eq!(json["verdict"], "WRONG_ANSWER");
        assert_eq!(json["time"], 1_700_000_000);
    }
}
