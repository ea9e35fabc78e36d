//! Application handlers.
//!
//! Command and query handlers that orchestrate domain operations.

mod build_matrix;
mod load_questionnaire;
mod submit_questionnaire;

pub use build_matrix::{BuildMatrixError, BuildMatrixHandler};
pub use load_questionnaire::LoadQuestionnaireHandler;
pub use submit_questionnaire::{
    ScoreSource, SubmitQuestionnaireError, SubmitQuestionnaireHandler, SubmitQuestionnaireResult,
};
