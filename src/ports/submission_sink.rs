//! Submission Sink Port - where completed answers are sent.
//!
//! The sink may score answers remotely. In that case the local
//! `ArchetypeAggregator` acts as a verification oracle for its result.

use async_trait::async_trait;
use serde::Serialize;
use std::collections::BTreeMap;

use crate::domain::analysis::AggregationResult;
use crate::domain::foundation::ArchetypeTag;
use crate::domain::questionnaire::ResponseSet;

/// Errors that can occur while submitting answers.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SubmissionError {
    #[error("Submission endpoint unavailable: {0}")]
    Unavailable(String),

    #[error("Not authorized to submit answers")]
    Unauthorized,

    #[error("Submission rejected: {0}")]
    Rejected(String),

    #[error("Malformed submission response: {0}")]
    Malformed(String),
}

/// Validated result returned by a remote scorer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RemoteAggregation {
    pub result: AggregationResult,
    /// Localized archetype names keyed by tag, when the scorer provides them.
    pub display_names: BTreeMap<ArchetypeTag, String>,
}

/// Port for submitting a completed response set.
#[async_trait]
pub trait SubmissionSink: Send + Sync {
    /// Sends `{question id: score}` answers and returns the scorer's verdict.
    ///
    /// # Errors
    ///
    /// - `Unavailable` for network failures and timeouts
    /// - `Unauthorized` when the token is missing or expired
    /// - `Malformed` when the response fails boundary validation
    async fn submit(&self, answers: &ResponseSet) -> Result<RemoteAggregation, SubmissionError>;
}
