use std::time::Duration;

use reqwest_middleware::{ClientBuilder, ClientWithMiddleware};
use reqwest_retry::{policies::ExponentialBackoff, RetryTransientMiddleware};
use serde::{Deserialize, Serialize};

use crate::llm::{RemoteFailure, RemoteSummarizer, RemoteSummary};

/// Client for the Gemini `generateContent` API.
pub struct GeminiClient {
    client: ClientWithMiddleware,
    api_key: String,
    base_url: String,
}

#[derive(Debug, thiserror::Error)]
pub enum GeminiError {
    #[error("HTTP error: {0}")]
    Request(#[source] reqwest_middleware::Error),
    #[error("the request timed out")]
    Timeout,
    #[error("API error: {status} - {message}")]
    Api { status: u16, message: String },
    #[error("malformed response body: {0}")]
    MalformedResponse(#[from] serde_json::Error),
    #[error("response contained no candidate text")]
    NoCandidates,
}

impl From<GeminiError> for RemoteFailure {
    fn from(e: GeminiError) -> Self {
        match e {
            GeminiError::Timeout => RemoteFailure::Timeout,
            GeminiError::NoCandidates => RemoteFailure::EmptyResponse,
            GeminiError::Api { status, message } => RemoteFailure::Provider { status, message },
            GeminiError::MalformedResponse(e) => RemoteFailure::MalformedResponse(e.to_string()),
            GeminiError::Request(e) => RemoteFailure::Transport(e.to_string()),
        }
    }
}

impl GeminiClient {
    pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);
    const MAX_RETRIES: u32 = 2;

    pub fn new(api_key: impl Into<String>) -> Self {
        Self::with_timeout(api_key, Self::DEFAULT_TIMEOUT)
    }

    /// Builds a client whose requests abort after `timeout`, so a stalled
    /// provider cannot block a session indefinitely. Transient failures are
    /// retried with exponential backoff before surfacing.
    pub fn with_timeout(api_key: impl Into<String>, timeout: Duration) -> Self {
        let inner = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .expect("failed to construct http client");

        let retry_policy = ExponentialBackoff::builder().build_with_max_retries(Self::MAX_RETRIES);
        let client = ClientBuilder::new(inner)
            .with(RetryTransientMiddleware::new_with_policy(retry_policy))
            .build();

        GeminiClient {
            client,
            api_key: api_key.into(),
            base_url: "https://generativelanguage.googleapis.com/v1beta".into(),
        }
    }

    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into();
        self
    }

    pub async fn send_generate_request(
        &self,
        model_name: &str,
        prompt: impl Into<String>,
    ) -> Result<GenerateContentResponse, GeminiError> {
        let body = GenerateContentRequest {
            contents: vec![Content {
                parts: vec![Part {
                    text: prompt.into(),
                }],
            }],
        };

        let resp = self
            .client
            .post(format!(
                "{}/models/{}:generateContent",
                self.base_url, model_name
            ))
            .header("x-goog-api-key", &self.api_key)
            .json(&body)
            .send()
            .await
            .map_err(classify_transport)
            .inspect_err(|e| tracing::error!(error = %e, "Failed to make http request"))?;

        let status = resp.status();
        let payload = resp.text().await.map_err(|e| {
            if e.is_timeout() {
                GeminiError::Timeout
            } else {
                GeminiError::Request(e.into())
            }
        })?;

        if !status.is_success() {
            // The provider wraps failures in a structured error payload;
            // fall back to the raw body when it does not.
            let message = serde_json::from_str::<ErrorResponse>(&payload)
                .map(|e| e.error.message)
                .unwrap_or(payload);
            return Err(GeminiError::Api {
                status: status.as_u16(),
                message,
            });
        }

        Ok(serde_json::from_str(&payload)?)
    }
}

fn classify_transport(e: reqwest_middleware::Error) -> GeminiError {
    match &e {
        reqwest_middleware::Error::Reqwest(inner) if inner.is_timeout() => GeminiError::Timeout,
        _ => GeminiError::Request(e),
    }
}

#[derive(Debug, Serialize)]
pub struct GenerateContentRequest {
    pub contents: Vec<Content>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct Content {
    pub parts: Vec<Part>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct Part {
    pub text: String,
}

#[derive(Debug, Deserialize)]
pub struct GenerateContentResponse {
    pub candidates: Option<Vec<Candidate>>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Candidate {
    pub content: Option<Content>,
    pub finish_reason: Option<String>,
}

#[derive(Debug, Deserialize)]
struct ErrorResponse {
    error: ApiErrorPayload,
}

#[derive(Debug, Deserialize)]
struct ApiErrorPayload {
    message: String,
}

/// Concatenated text of the first candidate, `None` when the reply carries
/// no usable text at all.
fn first_candidate_text(response: GenerateContentResponse) -> Option<String> {
    let parts = response.candidates?.into_iter().next()?.content?.parts;
    let text: String = parts.into_iter().map(|p| p.text).collect();

    if text.is_empty() {
        None
    } else {
        Some(text)
    }
}

impl RemoteSummarizer for GeminiClient {
    const MODEL: &'static str = "gemini-1.5-pro-latest";
    const CONTEXT_WINDOW_LIMIT: usize = 1_048_576 - 8_192;

    type Error = GeminiError;

    async fn summarize(&self, prompt: &str) -> Result<RemoteSummary, Self::Error> {
        let response = self
            .send_generate_request(Self::MODEL, prompt)
            .await
            .inspect_err(|e| tracing::error!(error = %e, "Failed to generate summary"))?;

        let text = first_candidate_text(response).ok_or(GeminiError::NoCandidates)?;

        Ok(RemoteSummary { text })
    }
}
