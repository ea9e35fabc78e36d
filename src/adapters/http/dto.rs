//! Request/response bodies for the questionnaire API and their validation.

use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashSet};

use crate::domain::analysis::{AggregationResult, ArchetypeScore};
use crate::domain::foundation::ArchetypeTag;
use crate::domain::questionnaire::ResponseSet;
use crate::ports::{RemoteAggregation, SubmissionError};

/// `POST /test/submit` body.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubmitAnswersRequest {
    pub answers: BTreeMap<u32, u8>,
}

impl From<&ResponseSet> for SubmitAnswersRequest {
    fn from(responses: &ResponseSet) -> Self {
        Self {
            answers: responses.to_submission(),
        }
    }
}

/// One entry of `scores_detailed`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreDetailDto {
    pub archetype: String,
    #[serde(default)]
    pub archetype_ru: Option<String>,
    pub score: u32,
    pub max_score: u32,
}

/// `POST /test/submit` response.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ArchetypeResultDto {
    pub primary_archetype: String,
    #[serde(default)]
    pub primary_archetype_ru: Option<String>,
    pub secondary_archetype: String,
    #[serde(default)]
    pub secondary_archetype_ru: Option<String>,
    #[serde(default)]
    pub scores: BTreeMap<String, u32>,
    pub scores_detailed: Vec<ScoreDetailDto>,
}

fn malformed(reason: impl Into<String>) -> SubmissionError {
    SubmissionError::Malformed(reason.into())
}

fn tag(name: &str) -> Result<ArchetypeTag, SubmissionError> {
    ArchetypeTag::new(name).map_err(|e| malformed(e.to_string()))
}

impl TryFrom<ArchetypeResultDto> for RemoteAggregation {
    type Error = SubmissionError;

    /// Validates the payload before it reaches the domain.
    ///
    /// Rejects blank or duplicate tags, scores above their maximum, fewer
    /// than two archetypes, a primary/secondary absent from the detailed
    /// scores, `scores` entries that contradict `scores_detailed`, and a
    /// primary/secondary that are not the top two of the ranked scores.
    fn try_from(dto: ArchetypeResultDto) -> Result<Self, Self::Error> {
        if dto.scores_detailed.len() < 2 {
            return Err(malformed(format!(
                "expected at least 2 archetype scores, got {}",
                dto.scores_detailed.len()
            )));
        }

        let mut seen = HashSet::new();
        let mut detailed = Vec::with_capacity(dto.scores_detailed.len());
        let mut display_names = BTreeMap::new();

        for detail in &dto.scores_detailed {
            let archetype = tag(&detail.archetype)?;
            if !seen.insert(archetype.clone()) {
                return Err(malformed(format!("duplicate archetype '{}'", archetype)));
            }
            if detail.score > detail.max_score {
                return Err(malformed(format!(
                    "score {} exceeds max {} for '{}'",
                    detail.score, detail.max_score, archetype
                )));
            }
            if let Some(&summary) = dto.scores.get(&detail.archetype) {
                if summary != detail.score {
                    return Err(malformed(format!(
                        "scores and scores_detailed disagree for '{}'",
                        archetype
                    )));
                }
            }
            if let Some(name) = detail.archetype_ru.as_ref().filter(|n| !n.trim().is_empty()) {
                display_names.insert(archetype.clone(), name.clone());
            }
            detailed.push(ArchetypeScore::new(archetype, detail.score, detail.max_score));
        }

        let primary = tag(&dto.primary_archetype)?;
        let secondary = tag(&dto.secondary_archetype)?;
        for chosen in [&primary, &secondary] {
            if !seen.contains(chosen) {
                return Err(malformed(format!("'{}' has no detailed score", chosen)));
            }
        }
        if primary == secondary {
            return Err(malformed("primary and secondary archetypes are identical"));
        }

        if let Some(name) = dto.primary_archetype_ru.filter(|n| !n.trim().is_empty()) {
            display_names.entry(primary.clone()).or_insert(name);
        }
        if let Some(name) = dto.secondary_archetype_ru.filter(|n| !n.trim().is_empty()) {
            display_names.entry(secondary.clone()).or_insert(name);
        }

        let result =
            AggregationResult::from_scores(detailed).map_err(|e| malformed(e.to_string()))?;
        if result.primary() != &primary || result.secondary() != &secondary {
            return Err(malformed(format!(
                "claimed {}/{} but scores rank {}/{} first",
                primary,
                secondary,
                result.primary(),
                result.secondary()
            )));
        }

        Ok(RemoteAggregation {
            result,
            display_names,
        })
    }
}
