//! HTTP API Client - QuestionSource and SubmissionSink over the backend API.
//!
//! # Endpoints
//!
//! - `GET  /test/questions` -> `{questions: [{id, archetype, text}]}`
//! - `POST /test/submit` with `{answers: {id: score}}` -> archetype result
//!
//! Every request carries `Authorization: Bearer <token>` when the token
//! provider has one. A 401 invalidates the stored token and cached user.
//!
//! # Configuration
//!
//! ```ignore
//! let config = ApiClientConfig::new("https://api.example.com")
//!     .with_timeout(Duration::from_secs(10));
//! let client = HttpApiClient::new(config, token_provider)?;
//! ```

use async_trait::async_trait;
use reqwest::{Client, RequestBuilder, Response, StatusCode};
use secrecy::ExposeSecret;
use serde::de::DeserializeOwned;
use std::sync::Arc;
use std::time::Duration;

use super::dto::{ArchetypeResultDto, SubmitAnswersRequest};
use crate::adapters::questions::{into_questions, QuestionEnvelope};
use crate::domain::questionnaire::{Question, ResponseSet};
use crate::ports::{
    QuestionSource, QuestionSourceError, RemoteAggregation, SubmissionError, SubmissionSink,
    TokenProvider,
};

/// Configuration for the API client.
#[derive(Debug, Clone)]
pub struct ApiClientConfig {
    /// Base URL without trailing slash (default: http://localhost:8000).
    pub base_url: String,
    /// Request timeout (default: 30 seconds).
    pub timeout: Duration,
}

impl ApiClientConfig {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into().trim_end_matches('/').to_string(),
            timeout: Duration::from_secs(30),
        }
    }

    /// Sets the request timeout.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }
}

impl Default for ApiClientConfig {
    fn default() -> Self {
        Self::new("http://localhost:8000")
    }
}

/// Transport-level failure, before mapping to a port error.
#[derive(Debug)]
enum TransportError {
    Unavailable(String),
    Unauthorized,
    Status(StatusCode, String),
    Decode(String),
}

/// Client for the questionnaire backend.
pub struct HttpApiClient {
    client: Client,
    config: ApiClientConfig,
    tokens: Arc<dyn TokenProvider>,
}

impl HttpApiClient {
    /// Creates a client. Fails only if the TLS backend cannot initialize.
    pub fn new(
        config: ApiClientConfig,
        tokens: Arc<dyn TokenProvider>,
    ) -> Result<Self, reqwest::Error> {
        let client = Client::builder().timeout(config.timeout).build()?;
        Ok(Self {
            client,
            config,
            tokens,
        })
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.config.base_url, path)
    }

    async fn authorize(&self, request: RequestBuilder) -> RequestBuilder {
        match self.tokens.access_token().await {
            Ok(Some(token)) => request.bearer_auth(token.expose_secret()),
            Ok(None) => request,
            Err(e) => {
                tracing::warn!("Token provider failed, sending unauthenticated request: {}", e);
                request
            }
        }
    }

    async fn send<T: DeserializeOwned>(&self, request: RequestBuilder) -> Result<T, TransportError> {
        let response = self.authorize(request).await.send().await.map_err(|e| {
            tracing::warn!("API request failed: {}", e);
            TransportError::Unavailable(e.to_string())
        })?;

        let response = self.handle_response_status(response).await?;
        let body = response
            .text()
            .await
            .map_err(|e| TransportError::Unavailable(e.to_string()))?;

        serde_json::from_str(&body).map_err(|e| {
            tracing::warn!("API response failed schema validation: {}", e);
            TransportError::Decode(e.to_string())
        })
    }

    /// Maps non-success statuses; a 401 also invalidates the stored token.
    async fn handle_response_status(&self, response: Response) -> Result<Response, TransportError> {
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }

        if status == StatusCode::UNAUTHORIZED {
            tracing::warn!(url = %response.url(), "API returned 401, clearing stored token");
            if let Err(e) = self.tokens.invalidate().await {
                tracing::error!("Failed to clear stored token: {}", e);
            }
            return Err(TransportError::Unauthorized);
        }

        let body = response.text().await.unwrap_or_default();
        tracing::debug!(%status, "API error response: {}", body);
        Err(TransportError::Status(status, body))
    }
}

#[async_trait]
impl QuestionSource for HttpApiClient {
    async fn fetch_questions(&self) -> Result<Vec<Question>, QuestionSourceError> {
        let request = self.client.get(self.url("/test/questions"));
        let envelope: QuestionEnvelope = self.send(request).await.map_err(|e| match e {
            TransportError::Unauthorized => QuestionSourceError::Unauthorized,
            TransportError::Decode(msg) => QuestionSourceError::Malformed(msg),
            TransportError::Unavailable(msg) => QuestionSourceError::Unavailable(msg),
            TransportError::Status(status, _) => {
                QuestionSourceError::Unavailable(format!("unexpected status {}", status))
            }
        })?;

        let questions = into_questions(envelope.questions)?;
        tracing::info!(count = questions.len(), "Fetched questions from API");
        Ok(questions)
    }
}

#[async_trait]
impl SubmissionSink for HttpApiClient {
    async fn submit(&self, answers: &ResponseSet) -> Result<RemoteAggregation, SubmissionError> {
        let request = self
            .client
            .post(self.url("/test/submit"))
            .json(&SubmitAnswersRequest::from(answers));

        let dto: ArchetypeResultDto = self.send(request).await.map_err(|e| match e {
            TransportError::Unauthorized => SubmissionError::Unauthorized,
            TransportError::Decode(msg) => SubmissionError::Malformed(msg),
            TransportError::Unavailable(msg) => SubmissionError::Unavailable(msg),
            TransportError::Status(status, body) if status.is_client_error() => {
                SubmissionError::Rejected(format!("{}: {}", status, body))
            }
            TransportError::Status(status, _) => {
                SubmissionError::Unavailable(format!("unexpected status {}", status))
            }
        })?;

        let remote = RemoteAggregation::try_from(dto)?;
        tracing::info!(
            primary = %remote.result.primary(),
            secondary = %remote.result.secondary(),
            "Submitted answers"
        );
        Ok(remote)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::auth::StoredTokenProvider;
    use crate::adapters::storage::InMemoryKeyValueStore;
    use crate::ports::{KeyValueStore, ACCESS_TOKEN_KEY, USER_KEY};
    use tokio::io::{AsyncReadExt, AsyncWriteExt};
    use tokio::net::TcpListener;
    use tokio::task::JoinHandle;

    /// Serves one canned HTTP response and returns the raw request it saw.
    async fn one_shot_server(status: &'static str, body: &'static str) -> (String, JoinHandle<String>) {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();

        let handle = tokio::spawn(async move {
            let (mut socket, _) = listener.accept().await.unwrap();
            let mut request = Vec::new();
            let mut buf = [0u8; 4096];
            loop {
                let n = socket.read(&mut buf).await.unwrap();
                if n == 0 {
                    break;
                }
                request.extend_from_slice(&buf[..n]);
                let text = String::from_utf8_lossy(&request);
                if let Some(header_end) = text.find("\r\n\r\n") {
                    let content_length = text[..header_end]
                        .lines()
                        .find_map(|l| {
                            let lower = l.to_ascii_lowercase();
                            lower
                                .strip_prefix("content-length:")
                                .map(|v| v.trim().parse::<usize>().unwrap_or(0))
                        })
                        .unwrap_or(0);
                    if request.len() >= header_end + 4 + content_length {
                        break;
                    }
                }
            }

            let response = format!(
                "HTTP/1.1 {}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
                status,
                body.len(),
                body
            );
            socket.write_all(response.as_bytes()).await.unwrap();
            socket.shutdown().await.ok();
            String::from_utf8_lossy(&request).to_string()
        });

        (format!("http://{}", addr), handle)
    }

    fn client(base_url: &str, store: InMemoryKeyValueStore) -> HttpApiClient {
        let tokens = Arc::new(StoredTokenProvider::new(Arc::new(store)));
        HttpApiClient::new(
            ApiClientConfig::new(base_url).with_timeout(Duration::from_secs(5)),
            tokens,
        )
        .unwrap()
    }

    #[test]
    fn config_trims_trailing_slash_and_defaults() {
        let config = ApiClientConfig::new("https://api.example.com/");
        assert_eq!(config.base_url, "https://api.example.com");
        assert_eq!(config.timeout, Duration::from_secs(30));
        assert_eq!(ApiClientConfig::default().base_url, "http://localhost:8000");
    }

    #[tokio::test]
    async fn test_fetch_questions_sends_bearer_token() {
        let (url, server) = one_shot_server(
            "200 OK",
            r#"{"questions":[{"id":1,"archetype":"Explorer","text":"I crave change"},{"id":2,"archetype":"Sage","text":"I analyze"}]}"#,
        )
        .await;
        let store = InMemoryKeyValueStore::with_entries([(ACCESS_TOKEN_KEY, "tok-9")]);

        let questions = client(&url, store).fetch_questions().await.unwrap();
        let request = server.await.unwrap();

        assert_eq!(questions.len(), 2);
        assert!(request.starts_with("GET /test/questions"));
        assert!(request.to_ascii_lowercase().contains("authorization: bearer tok-9"));
    }

    #[tokio::test]
    async fn test_fetch_questions_rejects_malformed_payload() {
        let (url, server) = one_shot_server("200 OK", r#"{"questions":[{"id":1,"text":"x"}]}"#).await;
        let result = client(&url, InMemoryKeyValueStore::new()).fetch_questions().await;
        server.await.unwrap();
        assert!(matches!(result, Err(QuestionSourceError::Malformed(_))));
    }

    #[tokio::test]
    async fn test_unauthorized_clears_stored_token() {
        let (url, server) = one_shot_server("401 Unauthorized", r#"{"detail":"expired"}"#).await;
        let store = InMemoryKeyValueStore::with_entries([(ACCESS_TOKEN_KEY, "old"), (USER_KEY, "{}")]);

        let result = client(&url, store.clone()).fetch_questions().await;
        server.await.unwrap();

        assert_eq!(result.unwrap_err(), QuestionSourceError::Unauthorized);
        assert_eq!(store.get(ACCESS_TOKEN_KEY).await.unwrap(), None);
        assert_eq!(store.get(USER_KEY).await.unwrap(), None);
    }

    #[tokio::test]
    async fn test_submit_posts_answers_and_validates_result() {
        let (url, server) = one_shot_server(
            "200 OK",
            r#"{"primary_archetype":"A","secondary_archetype":"B","scores":{"A":10,"B":1},
                "scores_detailed":[{"archetype":"A","score":10,"max_score":10},{"archetype":"B","score":1,"max_score":5}]}"#,
        )
        .await;
        let answers = ResponseSet::from_raw([(1, 5), (2, 5), (3, 1)]).unwrap();

        let remote = client(&url, InMemoryKeyValueStore::new())
            .submit(&answers)
            .await
            .unwrap();
        let request = server.await.unwrap();

        assert!(request.starts_with("POST /test/submit"));
        assert!(request.contains(r#"{"answers":{"1":5,"2":5,"3":1}}"#));
        assert_eq!(remote.result.primary().as_str(), "A");
    }

    #[tokio::test]
    async fn test_submit_client_error_is_rejected() {
        let (url, server) = one_shot_server("422 Unprocessable Entity", r#"{"detail":"bad"}"#).await;
        let answers = ResponseSet::from_raw([(1, 3)]).unwrap();
        let result = client(&url, InMemoryKeyValueStore::new()).submit(&answers).await;
        server.await.unwrap();
        assert!(matches!(result, Err(SubmissionError::Rejected(_))));
    }

    #[tokio::test]
    async fn test_server_error_is_unavailable() {
        let (url, server) = one_shot_server("503 Service Unavailable", "").await;
        let result = client(&url, InMemoryKeyValueStore::new()).fetch_questions().await;
        server.await.unwrap();
        assert!(matches!(result, Err(QuestionSourceError::Unavailable(_))));
    }
}
