//! Questionnaire and scoring error types.

use thiserror::Error;

use crate::domain::foundation::{DomainError, ErrorCode, QuestionId, ValidationError};

/// Errors raised by question loading, answer collection and aggregation.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum QuestionnaireError {
    /// Answer outside the 1..=5 slider scale.
    #[error("Answer must be between {min} and {max}, got {actual}")]
    OutOfRange { min: i64, max: i64, actual: i64 },

    /// Navigation or answering on a questionnaire with no questions.
    #[error("Questionnaire has no questions")]
    NoSuchQuestion,

    #[error("Response set has no entries")]
    EmptyResponseSet,

    /// Fewer than two archetypes, so no primary and secondary can be chosen.
    #[error("At least 2 distinct archetypes are required, found {found}")]
    InsufficientArchetypes { found: usize },

    /// Archetype scores that cannot form a ranking.
    #[error("Invalid archetype scores: {0}")]
    InvalidScores(String),

    #[error("Response references unknown question {0}")]
    UnknownQuestionReference(QuestionId),

    #[error("Question source unavailable: {0}")]
    SourceUnavailable(String),

    #[error("Invalid question{}: {reason}", id_suffix(.id))]
    InvalidQuestion {
        id: Option<QuestionId>,
        reason: String,
    },
}

fn id_suffix(id: &Option<QuestionId>) -> String {
    id.map(|id| format!(" {}", id)).unwrap_or_default()
}

impl QuestionnaireError {
    pub fn invalid_question(id: Option<QuestionId>, reason: impl Into<String>) -> Self {
        QuestionnaireError::InvalidQuestion {
            id,
            reason: reason.into(),
        }
    }

    pub fn source_unavailable(message: impl Into<String>) -> Self {
        QuestionnaireError::SourceUnavailable(message.into())
    }

    pub fn code(&self) -> ErrorCode {
        match self {
            QuestionnaireError::OutOfRange { .. } => ErrorCode::OutOfRange,
            QuestionnaireError::NoSuchQuestion => ErrorCode::NoSuchQuestion,
            QuestionnaireError::EmptyResponseSet => ErrorCode::EmptyResponseSet,
            QuestionnaireError::InsufficientArchetypes { .. } => ErrorCode::InsufficientArchetypes,
            QuestionnaireError::InvalidScores(_) => ErrorCode::ValidationFailed,
            QuestionnaireError::UnknownQuestionReference(_) => ErrorCode::UnknownQuestionReference,
            QuestionnaireError::SourceUnavailable(_) => ErrorCode::SourceUnavailable,
            QuestionnaireError::InvalidQuestion { .. } => ErrorCode::InvalidQuestion,
        }
    }
}

impl From<ValidationError> for QuestionnaireError {
    fn from(err: ValidationError) -> Self {
        match err {
            ValidationError::OutOfRange { min, max, actual, .. } => {
                QuestionnaireError::OutOfRange { min, max, actual }
            }
            other => QuestionnaireError::invalid_question(None, other.to_string()),
        }
    }
}

impl From<QuestionnaireError> for DomainError {
    fn from(err: QuestionnaireError) -> Self {
        let mut domain = DomainError::new(err.code(), err.to_string());
        match &err {
            QuestionnaireError::UnknownQuestionReference(id) => {
                domain = domain.with_detail("question_id", id.to_string());
            }
            QuestionnaireError::InvalidQuestion { id: Some(id), .. } => {
                domain = domain.with_detail("question_id", id.to_string());
            }
            _ => {}
        }
        domain
    }
}
