//! LoadQuestionnaireHandler - Starts a questionnaire session.

use std::sync::Arc;

use crate::domain::questionnaire::{QuestionSet, QuestionnaireError, ResponseCollector};
use crate::ports::QuestionSource;

/// Handler for loading questions and opening a session on them.
pub struct LoadQuestionnaireHandler {
    source: Arc<dyn QuestionSource>,
}

impl LoadQuestionnaireHandler {
    pub fn new(source: Arc<dyn QuestionSource>) -> Self {
        Self { source }
    }

    /// Fetches and validates the questions, then positions a fresh collector
    /// on the first one with every answer neutral.
    pub async fn handle(&self) -> Result<ResponseCollector, QuestionnaireError> {
        let questions = QuestionSet::load(self.source.as_ref())
            .await
            .map_err(|e| {
                tracing::warn!(code = %e.code(), "Failed to load questions: {}", e);
                e
            })?;

        if questions.is_empty() {
            tracing::warn!("Question source returned no questions");
        }

        let collector = ResponseCollector::initialize(Arc::new(questions));
        tracing::info!(
            session_id = %collector.session_id(),
            questions = collector.question_count(),
            "Questionnaire session started"
        );
        Ok(collector)
    }
}
