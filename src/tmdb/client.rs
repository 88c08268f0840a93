use reqwest::Client;
use serde_json::Value;

use crate::{config::Config, errors::MovieDbError, tmdb::request::ApiRequest};

/// Thin HTTP client for the TMDB v3 API.
///
/// Issues exactly one GET per call. There is no retry and no request timeout,
/// so a stalled connection stalls the command.
#[derive(Debug, Clone)]
pub struct ApiClient {
    http: Client,
    api_url: String,
    api_key: Option<String>,
}

impl ApiClient {
    pub fn new(config: &Config) -> Self {
        Self {
            http: Client::new(),
            api_url: config.api_url.clone(),
            api_key: config.api_key.clone(),
        }
    }

    /// Sends `request` and returns the fully buffered body parsed as JSON.
    ///
    /// # Errors
    ///
    /// - [`MovieDbError::Transport`] when no response could be obtained
    /// - [`MovieDbError::Api`] for non-success statuses, carrying TMDB's
    ///   `status_message` when the error body has one
    /// - [`MovieDbError::Parse`] when the body is not valid JSON
    pub async fn get_json(&self, request: &ApiRequest) -> Result<Value, MovieDbError> {
        let url = format!("{}{}", self.api_url, request.path);

        let mut query = request.query.clone();
        if let Some(key) = &self.api_key {
            query.push(("api_key", key.clone()));
        }

        let response = self.http.get(&url).query(&query).send().await?;
        let status = response.status();
        let body = response.text().await?;

        if !status.is_success() {
            return Err(MovieDbError::Api {
                status,
                message: status_message(&body).unwrap_or_else(|| {
                    status
                        .canonical_reason()
                        .unwrap_or("unknown error")
                        .to_string()
                }),
            });
        }

        Ok(serde_json::from_str(&body)?)
    }
}

/// Extracts `status_message` from a TMDB error body such as
/// `{"success":false,"status_code":7,"status_message":"Invalid API key"}`.
fn status_message(body: &str) -> Option<String> {
    serde_json::from_str::<Value>(body)
        .ok()?
        .get("status_message")?
        .as_str()
        .map(str::to_string)
}
