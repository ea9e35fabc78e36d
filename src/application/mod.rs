//! Application layer - Handlers.
//!
//! This layer orchestrates domain operations and coordinates between ports.
//! Loading and submitting a questionnaire are commands; building the matrix
//! chart is a query over values the caller already holds.

pub mod handlers;

pub use handlers::{
    BuildMatrixError, BuildMatrixHandler, LoadQuestionnaireHandler, ScoreSource,
    SubmitQuestionnaireError, SubmitQuestionnaireHandler, SubmitQuestionnaireResult,
};
