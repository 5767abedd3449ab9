/// Submission data provider abstraction
///
/// The recommendation pipeline only needs two things from the contest
/// platform: confirmation that a handle exists, and that handle's
/// submission history. Keeping them behind a trait lets the HTTP layer and
/// the tests run against any source.
use crate::{error::AppResult, models::Submission};

pub mod codeforces;

pub use codeforces::CodeforcesProvider;

/// Trait for submission history providers
#[cfg_attr(test, mockall::automock)]
#[async_trait::async_trait]
pub trait SubmissionSource: Send + Sync {
    /// Confirms that the handle exists upstream
    ///
    /// Returns `InvalidHandle` when it does not, or when the upstream check
    /// itself fails.
    async fn ensure_handle(&self, handle: &str) -> AppResult<()>;

    /// Fetches every submission of the handle, most recent first
    ///
    /// Duplicate attempts at the same problem are all returned.
    async fn fetch_submissions(&self, handle: &str) -> AppResult<Vec<Submission>>;

    /// Provider name for logging and debugging
    fn name(&self) -> &'static str;
}
