/// Codeforces API provider
///
/// API Flow:
/// 1. Handle check: /user.info?handles={handle} → `status: "OK"` when the handle exists
/// 2. History: /user.status?handle={handle} → every submission, most recent first
///
/// Both endpoints wrap their payload in `{status, comment?, result?}`.
use crate::{
    error::{AppError, AppResult},
    models::{CfEnvelope, CfSubmission, CfUser, Submission},
    services::providers::SubmissionSource,
};
use reqwest::{Client as HttpClient, StatusCode};
use serde_json::Value;

#[derive(Clone)]
pub struct CodeforcesProvider {
    http_client: HttpClient,
    api_url: String,
}

impl CodeforcesProvider {
    pub fn new(api_url: String) -> Self {
        Self {
            http_client: HttpClient::new(),
            api_url: api_url.trim_end_matches('/').to_string(),
        }
    }

    /// Sends a GET to an API method and returns status plus body text
    async fn call(
        &self,
        method: &str,
        query: &[(&str, &str)],
    ) -> reqwest::Result<(StatusCode, String)> {
        let url = format!("{}/{}", self.api_url, method);

        let response = self.http_client.get(&url).query(query).send().await?;
        let status = response.status();
        let body = response.text().await?;

        Ok((status, body))
    }
}

/// Interprets a `user.info` reply
fn check_user_info(status: StatusCode, body: &str) -> AppResult<()> {
    if !status.is_success() {
        tracing::info!(status = %status, body = %body, "Codeforces rejected handle");
        return Err(AppError::invalid_handle());
    }

    let envelope: CfEnvelope<Vec<CfUser>> = serde_json::from_str(body).map_err(|e| {
        tracing::error!(error = %e, body = %body, "Failed to parse Codeforces user.info response");
        AppError::ExternalApi(format!("Failed to parse Codeforces response: {}", e))
    })?;

    if !envelope.is_ok() {
        tracing::info!(comment = ?envelope.comment, "Codeforces reported handle as invalid");
        return Err(AppError::invalid_handle());
    }

    Ok(())
}

/// Interprets a `user.status` reply
///
/// Individual submissions that do not decode are skipped; the rest are kept.
fn decode_submissions(status: StatusCode, body: &str) -> AppResult<Vec<Submission>> {
    let envelope: CfEnvelope<Vec<Value>> = match serde_json::from_str(body) {
        Ok(envelope) => envelope,
        Err(_) if !status.is_success() => {
            tracing::info!(status = %status, "Codeforces user.status request failed");
            return Err(AppError::invalid_handle());
        }
        Err(e) => {
            tracing::error!(error = %e, "Failed to parse Codeforces user.status response");
            return Err(AppError::ExternalApi(format!(
                "Failed to parse Codeforces response: {}",
                e
            )));
        }
    };

    if !envelope.is_ok() {
        tracing::info!(comment = ?envelope.comment, "Codeforces returned no submissions");
        return Err(AppError::empty_history());
    }

    let raw = envelope.result.unwrap_or_default();
    let total = raw.len();

    let submissions: Vec<Submission> = raw
        .into_iter()
        .enumerate()
        .filter_map(|(position, value)| match serde_json::from_value::<CfSubmission>(value) {
            Ok(submission) => Some(Submission::from(submission)),
            Err(e) => {
                tracing::warn!(position, error = %e, "Skipping undecodable submission");
                None
            }
        })
        .collect();

    if submissions.len() < total {
        tracing::warn!(
            kept = submissions.len(),
            skipped = total - submissions.len(),
            "Partial submission decode"
        );
    }

    Ok(submissions)
}

#[async_trait::async_trait]
impl SubmissionSource for CodeforcesProvider {
    async fn ensure_handle(&self, handle: &str) -> AppResult<()> {
        let (status, body) = self
            .call("user.info", &[("handles", handle)])
            .await
            .map_err(|e| {
                tracing::warn!(handle = %handle, error = %e, "Codeforces user.info request failed");
                AppError::invalid_handle()
            })?;

        check_user_info(status, &body)?;

        tracing::debug!(handle = %handle, provider = "codeforces", "Handle confirmed");
        Ok(())
    }

    async fn fetch_submissions(&self, handle: &str) -> AppResult<Vec<Submission>> {
        let (status, body) = self
            .call("user.status", &[("handle", handle)])
            .await
            .map_err(|e| {
                tracing::warn!(handle = %handle, error = %e, "Codeforces user.status request failed");
                AppError::invalid_handle()
            })?;

        let submissions = decode_submissions(status, &body)?;

        tracing::info!(
            handle = %handle,
            submissions = submissions.len(),
            provider = "codeforces",
            "Submissions fetched"
        );

        Ok(submissions)
    }

    fn name(&self) -> &'static str {
        "codeforces"
    }
}
