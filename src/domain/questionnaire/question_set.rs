//! QuestionSet - ordered, validated collection of questions.

use serde::Serialize;
use std::collections::{BTreeSet, HashMap};

use super::{Question, QuestionnaireError};
use crate::domain::foundation::{ArchetypeTag, QuestionId};
use crate::ports::{QuestionSource, QuestionSourceError};

/// Questions in the order the provider gave them.
///
/// Order drives UI navigation, so it is never re-sorted. Ids are unique.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct QuestionSet {
    questions: Vec<Question>,
    #[serde(skip)]
    index_by_id: HashMap<QuestionId, usize>,
}

impl QuestionSet {
    /// Loads questions from the external source and validates them.
    ///
    /// # Errors
    ///
    /// - `SourceUnavailable` if the source cannot be reached
    /// - `InvalidQuestion` for malformed payloads, duplicate ids or empty text
    pub async fn load(source: &dyn QuestionSource) -> Result<Self, QuestionnaireError> {
        let questions = source.fetch_questions().await.map_err(|e| match e {
            QuestionSourceError::Malformed(reason) => {
                QuestionnaireError::invalid_question(None, reason)
            }
            other => QuestionnaireError::source_unavailable(other.to_string()),
        })?;
        Self::from_questions(questions)
    }

    /// Builds a set from already-parsed questions.
    ///
    /// Empty input is allowed; navigation reports `NoSuchQuestion` later.
    pub fn from_questions(questions: Vec<Question>) -> Result<Self, QuestionnaireError> {
        let mut index_by_id = HashMap::with_capacity(questions.len());

        for (position, question) in questions.iter().enumerate() {
            if question.text().trim().is_empty() {
                return Err(QuestionnaireError::invalid_question(
                    Some(question.id()),
                    "question text cannot be empty",
                ));
            }
            if index_by_id.insert(question.id(), position).is_some() {
                return Err(QuestionnaireError::invalid_question(
                    Some(question.id()),
                    "duplicate question id",
                ));
            }
        }

        Ok(Self {
            questions,
            index_by_id,
        })
    }

    pub fn len(&self) -> usize {
        self.questions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.questions.is_empty()
    }

    /// Question at a navigation position.
    pub fn get(&self, index: usize) -> Option<&Question> {
        self.questions.get(index)
    }

    pub fn by_id(&self, id: QuestionId) -> Option<&Question> {
        self.index_by_id.get(&id).map(|&i| &self.questions[i])
    }

    pub fn contains(&self, id: QuestionId) -> bool {
        self.index_by_id.contains_key(&id)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Question> {
        self.questions.iter()
    }

    pub fn as_slice(&self) -> &[Question] {
        &self.questions
    }

    /// Distinct archetype tags, lexically ordered.
    pub fn archetype_tags(&self) -> BTreeSet<&ArchetypeTag> {
        self.questions.iter().map(|q| q.archetype_tag()).collect()
    }
}

impl<'a> IntoIterator for &'a QuestionSet {
    type Item = &'a Question;
    type IntoIter = std::slice::Iter<'a, Question>;

    fn into_iter(self) -> Self::IntoIter {
        self.questions.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;

    fn q(id: u32, tag: &str) -> Question {
        Question::new(id, tag, format!("Statement {}", id)).unwrap()
    }

    struct FixedSource(Result<Vec<Question>, QuestionSourceError>);

    #[async_trait]
    impl QuestionSource for FixedSource {
        async fn fetch_questions(&self) -> Result<Vec<Question>, QuestionSourceError> {
            self.0.clone()
        }
    }

    #[test]
    fn preserves_provider_order() {
        let set = QuestionSet::from_questions(vec![q(9, "B"), q(2, "A"), q(5, "C")]).unwrap();
        let ids: Vec<u32> = set.iter().map(|q| q.id().value()).collect();
        assert_eq!(ids, vec![9, 2, 5]);
        assert_eq!(set.get(1).unwrap().id(), QuestionId::new(2));
    }

    #[test]
    fn rejects_duplicate_ids() {
        let err = QuestionSet::from_questions(vec![q(1, "A"), q(1, "B")]).unwrap_err();
        assert!(matches!(
            err,
            QuestionnaireError::InvalidQuestion { id: Some(id), .. } if id == QuestionId::new(1)
        ));
    }

    #[test]
    fn allows_empty_set() {
        let set = QuestionSet::from_questions(Vec::new()).unwrap();
        assert!(set.is_empty());
        assert_eq!(set.len(), 0);
    }

    #[test]
    fn looks_up_by_id() {
        let set = QuestionSet::from_questions(vec![q(10, "A"), q(20, "B")]).unwrap();
        assert_eq!(set.by_id(QuestionId::new(20)).unwrap().archetype_tag().as_str(), "B");
        assert!(set.by_id(QuestionId::new(30)).is_none());
        assert!(set.contains(QuestionId::new(10)));
    }

    #[test]
    fn archetype_tags_are_distinct_and_sorted() {
        let set = QuestionSet::from_questions(vec![q(1, "Sage"), q(2, "Hero"), q(3, "Sage")]).unwrap();
        let tags: Vec<&str> = set.archetype_tags().into_iter().map(|t| t.as_str()).collect();
        assert_eq!(tags, vec!["Hero", "Sage"]);
    }

    #[tokio::test]
    async fn load_maps_unreachable_source_to_source_unavailable() {
        let source = FixedSource(Err(QuestionSourceError::Unavailable("connection refused".into())));
        let err = QuestionSet::load(&source).await.unwrap_err();
        assert!(matches!(err, QuestionnaireError::SourceUnavailable(_)));
    }

    #[tokio::test]
    async fn load_maps_malformed_payload_to_invalid_question() {
        let source = FixedSource(Err(QuestionSourceError::Malformed("missing text".into())));
        let err = QuestionSet::load(&source).await.unwrap_err();
        assert!(matches!(err, QuestionnaireError::InvalidQuestion { id: None, .. }));
    }

    #[tokio::test]
    async fn load_validates_fetched_questions() {
        let source = FixedSource(Ok(vec![q(1, "A"), q(1, "A")]));
        assert!(QuestionSet::load(&source).await.is_err());

        let source = FixedSource(Ok(vec![q(1, "A"), q(2, "B")]));
        assert_eq!(QuestionSet::load(&source).await.unwrap().len(), 2);
    }
}
