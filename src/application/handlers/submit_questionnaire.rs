//! SubmitQuestionnaireHandler - Scores a completed questionnaire.
//!
//! Answers are always scored locally. When a submission sink is configured,
//! the answers are also sent there and its verdict is checked against the
//! local result: disagreements are logged and the remote verdict wins.
//! The chosen verdict is written into the cached user record.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::sync::Arc;
use thiserror::Error;

use crate::domain::analysis::{AggregationResult, ArchetypeAggregator};
use crate::domain::foundation::{ArchetypeTag, DomainError, ErrorCode, Timestamp};
use crate::domain::questionnaire::{QuestionSet, QuestionnaireError, ResponseSet};
use crate::ports::{KeyValueStore, KeyValueStoreError, SubmissionError, SubmissionSink, USER_KEY};

/// Who produced the returned verdict.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ScoreSource {
    Local,
    Remote,
}

/// Result of a successful submission.
#[derive(Debug, Clone, Serialize)]
pub struct SubmitQuestionnaireResult {
    pub result: AggregationResult,
    pub source: ScoreSource,
    /// Localized archetype names, when the remote scorer sent them.
    pub display_names: BTreeMap<ArchetypeTag, String>,
    /// Differences between the remote verdict and the local one.
    pub discrepancies: Vec<String>,
    pub completed_at: Timestamp,
}

#[derive(Debug, Error)]
pub enum SubmitQuestionnaireError {
    #[error(transparent)]
    Questionnaire(#[from] QuestionnaireError),

    #[error(transparent)]
    Submission(#[from] SubmissionError),

    #[error("Failed to update cached user: {0}")]
    Storage(#[from] KeyValueStoreError),
}

impl SubmitQuestionnaireError {
    pub fn code(&self) -> ErrorCode {
        match self {
            SubmitQuestionnaireError::Questionnaire(e) => e.code(),
            SubmitQuestionnaireError::Submission(SubmissionError::Unauthorized) => {
                ErrorCode::Unauthorized
            }
            SubmitQuestionnaireError::Submission(SubmissionError::Unavailable(_)) => {
                ErrorCode::SourceUnavailable
            }
            SubmitQuestionnaireError::Submission(SubmissionError::Rejected(_)) => {
                ErrorCode::ValidationFailed
            }
            SubmitQuestionnaireError::Submission(SubmissionError::Malformed(_)) => {
                ErrorCode::InvalidFormat
            }
            SubmitQuestionnaireError::Storage(_) => ErrorCode::StorageError,
        }
    }
}

impl From<SubmitQuestionnaireError> for DomainError {
    fn from(err: SubmitQuestionnaireError) -> Self {
        match err {
            SubmitQuestionnaireError::Questionnaire(e) => e.into(),
            other => DomainError::new(other.code(), other.to_string()),
        }
    }
}

/// The fields of the cached user record this handler owns. Everything else
/// in the record is carried through untouched.
#[derive(Debug, Default, Serialize, Deserialize)]
struct CachedUser {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    primary_archetype: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    secondary_archetype: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    archetype_scores: Option<BTreeMap<String, u32>>,
    #[serde(flatten)]
    rest: serde_json::Map<String, serde_json::Value>,
}

/// Handler for submitting answers.
pub struct SubmitQuestionnaireHandler {
    store: Arc<dyn KeyValueStore>,
    sink: Option<Arc<dyn SubmissionSink>>,
}

impl SubmitQuestionnaireHandler {
    /// Scores locally only.
    pub fn local(store: Arc<dyn KeyValueStore>) -> Self {
        Self { store, sink: None }
    }

    /// Scores locally and remotely.
    pub fn with_sink(store: Arc<dyn KeyValueStore>, sink: Arc<dyn SubmissionSink>) -> Self {
        Self {
            store,
            sink: Some(sink),
        }
    }

    pub async fn handle(
        &self,
        questions: &QuestionSet,
        responses: &ResponseSet,
    ) -> Result<SubmitQuestionnaireResult, SubmitQuestionnaireError> {
        // 1. Local oracle
        let local = ArchetypeAggregator::aggregate(questions, responses)?;

        // 2. Remote verdict, if any
        let (result, source, display_names, discrepancies) = match &self.sink {
            Some(sink) => {
                let remote = sink.submit(responses).await.map_err(|e| {
                    tracing::warn!("Answer submission failed: {}", e);
                    e
                })?;
                let discrepancies = local.discrepancies(&remote.result);
                if !discrepancies.is_empty() {
                    tracing::warn!(
                        count = discrepancies.len(),
                        "Remote scoring disagrees with local scoring: {}",
                        discrepancies.join("; ")
                    );
                }
                (
                    remote.result,
                    ScoreSource::Remote,
                    remote.display_names,
                    discrepancies,
                )
            }
            None => (local, ScoreSource::Local, BTreeMap::new(), Vec::new()),
        };

        // 3. Cache the verdict on the user record
        self.update_cached_user(&result).await?;

        tracing::info!(
            primary = %result.primary(),
            secondary = %result.secondary(),
            source = ?source,
            "Questionnaire scored"
        );

        Ok(SubmitQuestionnaireResult {
            result,
            source,
            display_names,
            discrepancies,
            completed_at: Timestamp::now(),
        })
    }

    async fn update_cached_user(&self, result: &AggregationResult) -> Result<(), KeyValueStoreError> {
        let mut user: CachedUser = match self.store.get(USER_KEY).await? {
            Some(json) => serde_json::from_str(&json)
                .map_err(|e| KeyValueStoreError::DeserializationFailed(e.to_string()))?,
            None => CachedUser::default(),
        };

        user.primary_archetype = Some(result.primary().to_string());
        user.secondary_archetype = Some(result.secondary().to_string());
        user.archetype_scores = Some(
            result
                .ranked_scores()
                .iter()
                .map(|s| (s.archetype_tag.to_string(), s.raw_score))
                .collect(),
        );

        let json = serde_json::to_string(&user)
            .map_err(|e| KeyValueStoreError::SerializationFailed(e.to_string()))?;
        self.store.set(USER_KEY, &json).await
    }
}
