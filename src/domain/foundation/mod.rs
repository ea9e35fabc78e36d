//! Foundation module - Shared domain primitives.
//!
//! Contains value objects, identifiers, and error types that form the
//! vocabulary of the questionnaire and matrix domain.

mod answer;
mod errors;
mod ids;
mod timestamp;

pub use answer::AnswerValue;
pub use errors::{DomainError, ErrorCode, ValidationError};
pub use ids::{ArchetypeTag, QuestionId, QuestionnaireSessionId};
pub use timestamp::Timestamp;
