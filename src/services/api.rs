use crate::config::ApiSettings;
use crate::core::quiz::{QuizEngine, QuizError};
use crate::models::{
    ChatMessage, ClassifyRequest, ClassifyResponse, FounderProfile, MatchResponse, MessagesResponse, Persona,
    SendMessageRequest, SendMessageResponse,
};
use reqwest::{Client, Response};
use serde::de::DeserializeOwned;
use serde_json::Value;
use std::time::Duration;
use thiserror::Error;

/// Errors that can occur when talking to the FundMatch backend
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("HTTP request failed: {0}")]
    RequestError(#[from] reqwest::Error),

    #[error("{message}")]
    Status { status: u16, message: String },

    #[error("{0}")]
    Rejected(String),

    #[error(transparent)]
    Validation(#[from] QuizError),
}

/// FundMatch backend client
///
/// Covers matching, persona classification and the dashboard message feed.
/// Every non-2xx response is a failure; nothing is retried.
pub struct ApiClient {
    base_url: String,
    client: Client,
}

impl ApiClient {
    /// Create a new client for `base_url` (without the `/api` suffix)
    pub fn new(base_url: impl Into<String>, timeout: Duration) -> Result<Self, ApiError> {
        let client = Client::builder().timeout(timeout).build()?;

        Ok(Self {
            base_url: base_url.into().trim_end_matches('/').to_string(),
            client,
        })
    }

    /// Create a client from the `[api]` configuration section
    pub fn from_settings(settings: &ApiSettings) -> Result<Self, ApiError> {
        Self::new(settings.base_url.clone(), Duration::from_secs(settings.timeout_secs))
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        format!("{}/api/{}", self.base_url, path)
    }

    /// Request investor matches for a founder profile
    pub async fn find_matches(&self, profile: &FounderProfile) -> Result<MatchResponse, ApiError> {
        tracing::debug!("Requesting matches for {} ({})", profile.company_name, profile.industry);

        let response = self.client.post(self.url("match")).json(profile).send().await?;
        let body: MatchResponse = read_json(response).await?;

        if !body.success {
            return Err(rejected(body.error, "Failed to find matches"));
        }

        tracing::debug!("Received {} matches of {}", body.matches.len(), body.total_matches);
        Ok(body)
    }

    /// Send questionnaire results for classification, returning the raw classification text
    pub async fn classify(&self, request: &ClassifyRequest) -> Result<String, ApiError> {
        let response = self.client.post(self.url("classify")).json(request).send().await?;
        let body: ClassifyResponse = read_json(response).await?;

        if !body.success {
            return Err(rejected(body.error, "Classification failed"));
        }

        Ok(body.classification)
    }

    /// Classify the quiz answers into a persona
    ///
    /// Enforces the minimum-answers gate before any network call. A malformed
    /// classification degrades to a placeholder persona rather than an error.
    pub async fn request_persona(&self, quiz: &QuizEngine, goal: &str) -> Result<Persona, ApiError> {
        let request = quiz.classify_request(goal)?;

        tracing::info!(
            "Requesting persona for {} answered questions",
            request.questionnaire_results.len()
        );

        let classification = self.classify(&request).await?;
        Ok(Persona::from_classification(&classification))
    }

    pub async fn fetch_messages(&self) -> Result<Vec<ChatMessage>, ApiError> {
        let response = self.client.get(self.url("messages")).send().await?;
        let body: MessagesResponse = read_json(response).await?;

        if !body.success {
            return Err(rejected(body.error, "Failed to load messages"));
        }

        Ok(body.messages)
    }

    pub async fn send_message(&self, sender: &str, content: &str) -> Result<(), ApiError> {
        let request = SendMessageRequest {
            sender: sender.to_string(),
            content: content.to_string(),
        };

        let response = self
            .client
            .post(self.url("messages/send"))
            .json(&request)
            .send()
            .await?;
        let body: SendMessageResponse = read_json(response).await?;

        if !body.success {
            return Err(rejected(body.error, "Failed to send message"));
        }

        tracing::debug!("Message sent by {}", sender);
        Ok(())
    }
}

fn rejected(error: Option<String>, fallback: &str) -> ApiError {
    ApiError::Rejected(error.unwrap_or_else(|| fallback.to_string()))
}

/// Decode a 2xx body, or turn an error status into `ApiError::Status`
async fn read_json<T: DeserializeOwned>(response: Response) -> Result<T, ApiError> {
    let status = response.status();

    if !status.is_success() {
        let body = response.text().await.unwrap_or_default();
        tracing::error!("Backend returned {}: {}", status, body);
        return Err(ApiError::Status {
            status: status.as_u16(),
            message: error_message(&body, status.canonical_reason().unwrap_or("Request failed")),
        });
    }

    Ok(response.json().await?)
}

/// Best-effort `error` field of a JSON error body
fn error_message(body: &str, status_text: &str) -> String {
    serde_json::from_str::<Value>(body)
        .ok()
        .and_then(|json| json.get("error").and_then(Value::as_str).map(str::to_string))
        .unwrap_or_else(|| status_text.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_api_client_creation() {
        let client = ApiClient::new("https://fundmatch.test/", Duration::from_secs(5)).unwrap();
        assert_eq!(client.base_url(), "https://fundmatch.test");
        assert_eq!(client.url("messages/send"), "https://fundmatch.test/api/messages/send");
    }

    #[test]
    fn test_api_client_from_settings() {
        let settings = ApiSettings {
            base_url: "http://localhost:5000/".to_string(),
            timeout_secs: 10,
        };
        let client = ApiClient::from_settings(&settings).unwrap();
        assert_eq!(client.url("match"), "http://localhost:5000/api/match");
    }

    #[test]
    fn test_error_message_extraction() {
        assert_eq!(error_message(r#"{"error":"Missing required fields"}"#, "Bad Request"), "Missing required fields");
        assert_eq!(error_message(r#"{"message":"nope"}"#, "Bad Request"), "Bad Request");
        assert_eq!(error_message("<html>oops</html>", "Internal Server Error"), "Internal Server Error");
    }
}
