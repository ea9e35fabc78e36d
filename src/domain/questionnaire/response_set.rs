//! ResponseSet - one answer per question.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use super::{QuestionSet, QuestionnaireError};
use crate::domain::foundation::{AnswerValue, QuestionId};

/// Mapping from question id to slider answer.
///
/// Keyed by a `BTreeMap` so iteration and serialization are in id order,
/// which keeps submissions and aggregation reproducible.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ResponseSet {
    answers: BTreeMap<QuestionId, AnswerValue>,
}

impl ResponseSet {
    /// Every question answered with the neutral midpoint.
    pub fn neutral_for(questions: &QuestionSet) -> Self {
        Self {
            answers: questions
                .iter()
                .map(|q| (q.id(), AnswerValue::NEUTRAL))
                .collect(),
        }
    }

    /// Builds a response set from raw `(question id, score)` pairs.
    ///
    /// Used when answers arrive from outside a live questionnaire, e.g. a
    /// restored session. Scores outside 1..=5 are rejected.
    pub fn from_raw<I>(answers: I) -> Result<Self, QuestionnaireError>
    where
        I: IntoIterator<Item = (u32, i64)>,
    {
        let answers = answers
            .into_iter()
            .map(|(id, score)| Ok((QuestionId::new(id), AnswerValue::try_new(score)?)))
            .collect::<Result<BTreeMap<_, _>, QuestionnaireError>>()?;
        Ok(Self { answers })
    }

    pub fn get(&self, id: QuestionId) -> Option<AnswerValue> {
        self.answers.get(&id).copied()
    }

    pub fn len(&self) -> usize {
        self.answers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.answers.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (QuestionId, AnswerValue)> + '_ {
        self.answers.iter().map(|(id, v)| (*id, *v))
    }

    /// Sum of every answer.
    pub fn total(&self) -> u32 {
        self.answers.values().map(|v| u32::from(v.value())).sum()
    }

    /// Plain `{question id: score}` map for the submission payload.
    pub fn to_submission(&self) -> BTreeMap<u32, u8> {
        self.answers
            .iter()
            .map(|(id, v)| (id.value(), v.value()))
            .collect()
    }

    pub(crate) fn record(&mut self, id: QuestionId, value: AnswerValue) {
        self.answers.insert(id, value);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::questionnaire::Question;

    #[test]
    fn neutral_for_answers_every_question_with_three() {
        let set = QuestionSet::from_questions(vec![
            Question::new(1, "A", "one").unwrap(),
            Question::new(2, "B", "two").unwrap(),
        ])
        .unwrap();

        let responses = ResponseSet::neutral_for(&set);
        assert_eq!(responses.len(), 2);
        assert_eq!(responses.get(QuestionId::new(1)), Some(AnswerValue::NEUTRAL));
        assert_eq!(responses.total(), 6);
    }

    #[test]
    fn from_raw_rejects_out_of_range_scores() {
        let err = ResponseSet::from_raw([(1, 5), (2, 0)]).unwrap_err();
        assert!(matches!(err, QuestionnaireError::OutOfRange { actual: 0, .. }));
    }

    #[test]
    fn serializes_as_id_keyed_object() {
        let responses = ResponseSet::from_raw([(2, 1), (1, 5)]).unwrap();
        let json = serde_json::to_string(&responses).unwrap();
        assert_eq!(json, r#"{"1":5,"2":1}"#);

        let back: ResponseSet = serde_json::from_str(&json).unwrap();
        assert_eq!(back, responses);
    }

    #[test]
    fn to_submission_is_plain_map() {
        let responses = ResponseSet::from_raw([(3, 4)]).unwrap();
        assert_eq!(responses.to_submission().get(&3), Some(&4));
    }
}
