//! Strongly-typed identifier value objects.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

use super::ValidationError;

/// Identifier of a questionnaire question, as assigned by the question source.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct QuestionId(u32);

impl QuestionId {
    pub const fn new(id: u32) -> Self {
        Self(id)
    }

    pub fn value(&self) -> u32 {
        self.0
    }
}

impl From<u32> for QuestionId {
    fn from(id: u32) -> Self {
        Self(id)
    }
}

impl fmt::Display for QuestionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for QuestionId {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.trim()
            .parse::<u32>()
            .map(Self)
            .map_err(|e| ValidationError::invalid_format("question_id", e.to_string()))
    }
}

/// Name of an archetype, used to group questions.
///
/// Ordering is plain lexical ordering of the tag, which is what ranking
/// uses to break score ties.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct ArchetypeTag(String);

impl ArchetypeTag {
    /// Creates a tag, rejecting blank names.
    pub fn new(tag: impl Into<String>) -> Result<Self, ValidationError> {
        let tag = tag.into();
        if tag.trim().is_empty() {
            return Err(ValidationError::empty_field("archetype_tag"));
        }
        Ok(Self(tag))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for ArchetypeTag {
    type Error = ValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<ArchetypeTag> for String {
    fn from(tag: ArchetypeTag) -> Self {
        tag.0
    }
}

impl AsRef<str> for ArchetypeTag {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ArchetypeTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Unique identifier for one questionnaire run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct QuestionnaireSessionId(Uuid);

impl QuestionnaireSessionId {
    /// Creates a new random QuestionnaireSessionId.
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    /// Creates a QuestionnaireSessionId from an existing UUID.
    pub fn from_uuid(uuid: Uuid) -> Self {
        Self(uuid)
    }

    /// Returns the inner UUID.
    pub fn as_uuid(&self) -> &Uuid {
        &self.0
    }
}

impl Default for QuestionnaireSessionId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for QuestionnaireSessionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for QuestionnaireSessionId {
    type Err = uuid::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self(Uuid::parse_str(s)?))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn question_id_parses_from_string() {
        let id: QuestionId = " 12 ".parse().unwrap();
        assert_eq!(id, QuestionId::new(12));
    }

    #[test]
    fn question_id_rejects_garbage() {
        assert!("twelve".parse::<QuestionId>().is_err());
        assert!("-1".parse::<QuestionId>().is_err());
    }

    #[test]
    fn archetype_tag_rejects_blank() {
        assert!(ArchetypeTag::new("").is_err());
        assert!(ArchetypeTag::new("   ").is_err());
        assert_eq!(ArchetypeTag::new("Hero").unwrap().as_str(), "Hero");
    }

    #[test]
    fn archetype_tag_orders_lexically() {
        let a = ArchetypeTag::new("Explorer").unwrap();
        let b = ArchetypeTag::new("Sage").unwrap();
        assert!(a < b);
    }

    #[test]
    fn archetype_tag_deserialization_validates() {
        let ok: ArchetypeTag = serde_json::from_str("\"Ruler\"").unwrap();
        assert_eq!(ok.as_str(), "Ruler");
        assert!(serde_json::from_str::<ArchetypeTag>("\"\"").is_err());
    }

    #[test]
    fn session_id_round_trips_through_display() {
        let id = QuestionnaireSessionId::new();
        let parsed: QuestionnaireSessionId = id.to_string().parse().unwrap();
        assert_eq!(id, parsed);
    }
}
