//! Question Source Port - where questionnaire questions come from.
//!
//! Implementations convert their own wire or file format into domain
//! `Question`s at the boundary, so malformed records never reach the
//! questionnaire.

use async_trait::async_trait;

use crate::domain::questionnaire::Question;

/// Errors that can occur while fetching questions.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum QuestionSourceError {
    /// Network failure, timeout, missing file.
    #[error("Question source unavailable: {0}")]
    Unavailable(String),

    #[error("Not authorized to fetch questions")]
    Unauthorized,

    /// Payload reached us but does not describe valid questions.
    #[error("Malformed question payload: {0}")]
    Malformed(String),
}

/// Port for fetching the ordered question list.
///
/// # Contract
///
/// Implementations must:
/// - Return questions in provider order
/// - Return `Malformed` rather than silently dropping invalid records
/// - Return `Unavailable` for transient failures
#[async_trait]
pub trait QuestionSource: Send + Sync {
    async fn fetch_questions(&self) -> Result<Vec<Question>, QuestionSourceError>;
}
