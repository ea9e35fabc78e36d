//! YAML Question Source Adapter
//!
//! Reads questions from a YAML file shaped like the API envelope:
//!
//! ```yaml
//! questions:
//!   - id: 1
//!     archetype: Explorer
//!     text: I often feel the need for change and new experiences
//! ```

use async_trait::async_trait;
use std::path::{Path, PathBuf};
use tokio::fs;

use super::{into_questions, QuestionEnvelope};
use crate::domain::questionnaire::Question;
use crate::ports::{QuestionSource, QuestionSourceError};

/// Question source backed by a YAML file
#[derive(Debug, Clone)]
pub struct YamlQuestionSource {
    path: PathBuf,
}

impl YamlQuestionSource {
    pub fn new<P: AsRef<Path>>(path: P) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }

    /// Parses questions from YAML text.
    pub fn parse(yaml: &str) -> Result<Vec<Question>, QuestionSourceError> {
        let envelope: QuestionEnvelope = serde_yaml::from_str(yaml)
            .map_err(|e| QuestionSourceError::Malformed(e.to_string()))?;
        into_questions(envelope.questions)
    }
}

#[async_trait]
impl QuestionSource for YamlQuestionSource {
    async fn fetch_questions(&self) -> Result<Vec<Question>, QuestionSourceError> {
        let yaml = fs::read_to_string(&self.path).await.map_err(|e| {
            tracing::warn!(path = %self.path.display(), "Failed to read question file: {}", e);
            QuestionSourceError::Unavailable(e.to_string())
        })?;

        let questions = Self::parse(&yaml)?;
        tracing::debug!(path = %self.path.display(), count = questions.len(), "Loaded questions");
        Ok(questions)
    }
}
