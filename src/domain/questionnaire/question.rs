//! Question entity.

use serde::{Deserialize, Serialize};

use super::QuestionnaireError;
use crate::domain::foundation::{ArchetypeTag, QuestionId};

/// A single slider statement, tagged with the archetype it scores toward.
///
/// Immutable once constructed; the only way to build one is through
/// [`Question::new`], which rejects blank text and blank tags.
/// Deserialization goes through it as well.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "QuestionFields")]
pub struct Question {
    id: QuestionId,
    archetype_tag: ArchetypeTag,
    text: String,
}

/// Unvalidated wire shape of a [`Question`].
#[derive(Deserialize)]
struct QuestionFields {
    id: u32,
    archetype_tag: String,
    text: String,
}

impl TryFrom<QuestionFields> for Question {
    type Error = QuestionnaireError;

    fn try_from(fields: QuestionFields) -> Result<Self, Self::Error> {
        Question::new(fields.id, fields.archetype_tag, fields.text)
    }
}

impl Question {
    pub fn new(
        id: impl Into<QuestionId>,
        archetype_tag: impl Into<String>,
        text: impl Into<String>,
    ) -> Result<Self, QuestionnaireError> {
        let id = id.into();
        let text = text.into();
        if text.trim().is_empty() {
            return Err(QuestionnaireError::invalid_question(
                Some(id),
                "question text cannot be empty",
            ));
        }
        let archetype_tag = ArchetypeTag::new(archetype_tag)
            .map_err(|e| QuestionnaireError::invalid_question(Some(id), e.to_string()))?;

        Ok(Self {
            id,
            archetype_tag,
            text,
        })
    }

    pub fn id(&self) -> QuestionId {
        self.id
    }

    pub fn archetype_tag(&self) -> &ArchetypeTag {
        &self.archetype_tag
    }

    pub fn text(&self) -> &str {
        &self.text
    }
}
