use rand::Rng;

use crate::{
    error::{AppError, AppResult},
    models::{HistoryResponse, RecommendationResponse, Submission},
    services::{
        accuracy::calculate_accuracy,
        classifier::categorize_strengths,
        providers::SubmissionSource,
        ranker::{mode_rating, Recommender},
    },
};

const HANDLE_MIN_LEN: usize = 3;
const HANDLE_MAX_LEN: usize = 24;

/// Checks a handle's shape before anything is sent upstream
pub fn validate_handle(raw: Option<&str>) -> AppResult<&str> {
    let handle = raw.unwrap_or_default();

    let valid_length = (HANDLE_MIN_LEN..=HANDLE_MAX_LEN).contains(&handle.chars().count());
    let valid_chars = handle
        .chars()
        .all(|c| c.is_ascii_alphanumeric() || matches!(c, '_' | '.' | '-'));

    if valid_length && valid_chars {
        Ok(handle)
    } else {
        Err(AppError::invalid_handle())
    }
}

/// Confirms the handle upstream and fetches its non-empty history
pub async fn load_history(
    source: &dyn SubmissionSource,
    handle: &str,
) -> AppResult<Vec<Submission>> {
    source.ensure_handle(handle).await?;

    let submissions = source.fetch_submissions(handle).await?;
    if submissions.is_empty() {
        tracing::info!(handle = %handle, provider = source.name(), "Handle has no submissions");
        return Err(AppError::empty_history());
    }

    Ok(submissions)
}

/// Runs accuracy, classification and ranking over a fetched history
pub fn build_recommendations<R: Rng + ?Sized>(
    recommender: &Recommender,
    submissions: &[Submission],
    rng: &mut R,
) -> RecommendationResponse {
    let report = calculate_accuracy(submissions);

    for skipped in &report.skipped {
        tracing::warn!(
            position = skipped.position,
            error = %skipped.error,
            "Submission left out of accuracy"
        );
    }

    let classification = categorize_strengths(&report.accuracy);
    let mode_rating = mode_rating(submissions);

    let recommendations = recommender.recommend(
        submissions,
        &classification.weak,
        &classification.strong,
        mode_rating,
        rng,
    );

    tracing::info!(
        submissions = submissions.len(),
        skipped = report.skipped.len(),
        tags = report.accuracy.len(),
        strong = classification.strong.len(),
        weak = classification.weak.len(),
        mode_rating,
        recommendations = recommendations.len(),
        "Recommendation pipeline completed"
    );

    RecommendationResponse {
        mode_rating,
        strong_topics: classification.strong,
        weak_topics: classification.weak,
        recommendations,
    }
}

/// Recommends problems for a handle
pub async fn get_recommendations(
    source: &dyn SubmissionSource,
    recommender: &Recommender,
    handle: Option<&str>,
) -> AppResult<RecommendationResponse> {
    let handle = validate_handle(handle)?;
    let submissions = load_history(source, handle).await?;

    Ok(build_recommendations(
        recommender,
        &submissions,
        &mut rand::thread_rng(),
    ))
}

/// Returns the raw submission history for a handle
pub async fn get_history(
    source: &dyn SubmissionSource,
    handle: Option<&str>,
) -> AppResult<HistoryResponse> {
    let handle = validate_handle(handle)?;
    let history = load_history(source, handle).await?;

    Ok(HistoryResponse { history })
}
