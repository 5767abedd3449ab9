pub mod accuracy;
pub mod classifier;
pub mod providers;
pub mod ranker;
pub mod recommendations;
pub mod tfidf;

pub use providers::{CodeforcesProvider, SubmissionSource};
pub use ranker::Recommender;
