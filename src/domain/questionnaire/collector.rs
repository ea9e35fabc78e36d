//! ResponseCollector - answer state and navigation for one questionnaire run.
//!
//! Owns the `ResponseSet` for a session. Mutation goes through `&mut self`,
//! so callers serialize `set_current_answer`/`advance`/`retreat` by
//! construction; there is no internal locking.

use std::collections::BTreeMap;
use std::sync::Arc;

use serde::{Deserialize, Serialize};

use super::{Question, QuestionSet, QuestionnaireError, ResponseSet};
use crate::domain::foundation::{AnswerValue, QuestionId, QuestionnaireSessionId};

/// Outcome of moving forward.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NavigationStatus {
    /// Moved to the next question.
    Continue,
    /// Already on the last question; the questionnaire can be submitted.
    Complete,
}

/// Current position and answers for a questionnaire session.
#[derive(Debug, Clone)]
pub struct ResponseCollector {
    session_id: QuestionnaireSessionId,
    questions: Arc<QuestionSet>,
    index: usize,
    responses: ResponseSet,
}

impl ResponseCollector {
    /// Starts a session: every answer neutral, positioned on the first question.
    pub fn initialize(questions: Arc<QuestionSet>) -> Self {
        let responses = ResponseSet::neutral_for(&questions);
        Self {
            session_id: QuestionnaireSessionId::new(),
            questions,
            index: 0,
            responses,
        }
    }

    /// Overwrites the answer for the current question.
    ///
    /// # Errors
    ///
    /// - `OutOfRange` if `value` is not in 1..=5; state is untouched
    /// - `NoSuchQuestion` if the questionnaire is empty
    pub fn set_current_answer(&mut self, value: i64) -> Result<(), QuestionnaireError> {
        let answer = AnswerValue::try_new(value)?;
        let id = self
            .current_question()
            .map(Question::id)
            .ok_or(QuestionnaireError::NoSuchQuestion)?;
        self.responses.record(id, answer);
        Ok(())
    }

    /// Moves to the next question, or reports completion on the last one.
    pub fn advance(&mut self) -> Result<NavigationStatus, QuestionnaireError> {
        if self.questions.is_empty() {
            return Err(QuestionnaireError::NoSuchQuestion);
        }
        if self.is_last() {
            return Ok(NavigationStatus::Complete);
        }
        self.index += 1;
        Ok(NavigationStatus::Continue)
    }

    /// Walks the questionnaire front to back, answering from a
    /// `{question id: score}` map. Questions without an entry keep their
    /// current answer, and the collector ends on the last question.
    ///
    /// Every entry is checked before anything is recorded.
    ///
    /// # Errors
    ///
    /// - `UnknownQuestionReference` if an id is not in the questionnaire
    /// - `OutOfRange` if a score is not in 1..=5
    pub fn apply_answers(&mut self, answers: &BTreeMap<u32, i64>) -> Result<(), QuestionnaireError> {
        let mut validated = BTreeMap::new();
        for (&id, &value) in answers {
            let id = QuestionId::from(id);
            if !self.questions.contains(id) {
                return Err(QuestionnaireError::UnknownQuestionReference(id));
            }
            validated.insert(id, AnswerValue::try_new(value)?);
        }
        if self.questions.is_empty() {
            return Ok(());
        }

        self.index = 0;
        loop {
            let current = self.current_question().map(Question::id);
            if let Some((id, answer)) = current.and_then(|id| validated.get(&id).map(|a| (id, *a))) {
                self.responses.record(id, answer);
            }
            if self.advance()? == NavigationStatus::Complete {
                return Ok(());
            }
        }
    }

    /// Moves back one question. At the first question this is a no-op.
    pub fn retreat(&mut self) -> usize {
        self.index = self.index.saturating_sub(1);
        self.index
    }

    pub fn session_id(&self) -> QuestionnaireSessionId {
        self.session_id
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn question_count(&self) -> usize {
        self.questions.len()
    }

    pub fn current_question(&self) -> Option<&Question> {
        self.questions.get(self.index)
    }

    pub fn current_answer(&self) -> Option<AnswerValue> {
        self.current_question()
            .and_then(|q| self.responses.get(q.id()))
    }

    pub fn is_last(&self) -> bool {
        !self.questions.is_empty() && self.index + 1 == self.questions.len()
    }

    /// 1-based position for an "n/N" header.
    pub fn position(&self) -> (usize, usize) {
        if self.questions.is_empty() {
            return (0, 0);
        }
        (self.index + 1, self.questions.len())
    }

    /// Progress bar fill, `(index + 1) / count * 100`.
    pub fn progress_percent(&self) -> f64 {
        match self.position() {
            (_, 0) => 0.0,
            (current, total) => current as f64 / total as f64 * 100.0,
        }
    }

    pub fn questions(&self) -> &QuestionSet {
        &self.questions
    }

    pub fn responses(&self) -> &ResponseSet {
        &self.responses
    }

    pub fn into_responses(self) -> ResponseSet {
        self.responses
    }
}
