//! Wire/file shape of a question and its boundary validation.

use serde::{Deserialize, Serialize};

use crate::domain::questionnaire::Question;
use crate::ports::QuestionSourceError;

/// A question as providers describe it: `{id, archetype, text}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct QuestionRecord {
    pub id: u32,
    pub archetype: String,
    pub text: String,
}

/// The `{questions: [...]}` envelope used by both the API and fixture files.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuestionEnvelope {
    pub questions: Vec<QuestionRecord>,
}

impl TryFrom<QuestionRecord> for Question {
    type Error = QuestionSourceError;

    fn try_from(record: QuestionRecord) -> Result<Self, Self::Error> {
        Question::new(record.id, record.archetype, record.text)
            .map_err(|e| QuestionSourceError::Malformed(e.to_string()))
    }
}

/// Converts records in order, failing on the first invalid one.
pub fn into_questions(records: Vec<QuestionRecord>) -> Result<Vec<Question>, QuestionSourceError> {
    records.into_iter().map(Question::try_from).collect()
}
