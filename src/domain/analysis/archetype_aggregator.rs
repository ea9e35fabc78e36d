//! Archetype Aggregator - groups answers by archetype, scores and ranks them.

use serde::{Deserialize, Serialize};
use std::collections::btree_map::Entry;
use std::collections::BTreeMap;

use crate::domain::foundation::ArchetypeTag;
use crate::domain::questionnaire::{QuestionSet, QuestionnaireError, ResponseSet};

/// Highest slider answer; also the per-question contribution to the maximum.
const MAX_ANSWER: u32 = 5;

/// Aggregated score for one archetype.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ArchetypeScore {
    pub archetype_tag: ArchetypeTag,
    pub raw_score: u32,
    pub max_possible_score: u32,
}

impl ArchetypeScore {
    pub fn new(archetype_tag: ArchetypeTag, raw_score: u32, max_possible_score: u32) -> Self {
        Self {
            archetype_tag,
            raw_score,
            max_possible_score,
        }
    }

    /// Raw score as a fraction of the maximum (0.0 when the maximum is 0).
    pub fn fraction(&self) -> f64 {
        if self.max_possible_score == 0 {
            return 0.0;
        }
        f64::from(self.raw_score) / f64::from(self.max_possible_score)
    }
}

/// Outcome of scoring a completed questionnaire.
///
/// Built only through [`AggregationResult::from_scores`], so `primary` and
/// `secondary` are always the first two entries of `ranked_scores`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AggregationResult {
    primary: ArchetypeTag,
    secondary: ArchetypeTag,
    scores_by_tag: BTreeMap<ArchetypeTag, ArchetypeScore>,
    /// Descending by raw score, ties by ascending tag.
    ranked_scores: Vec<ArchetypeScore>,
}

impl AggregationResult {
    /// Ranks `scores` and picks the top two as primary and secondary.
    ///
    /// # Errors
    /// - `InsufficientArchetypes` for fewer than 2 scores
    /// - `InvalidScores` for a repeated tag or a raw score above its maximum
    pub fn from_scores(
        scores: impl IntoIterator<Item = ArchetypeScore>,
    ) -> Result<Self, QuestionnaireError> {
        let mut scores_by_tag = BTreeMap::new();
        for score in scores {
            if score.raw_score > score.max_possible_score {
                return Err(QuestionnaireError::InvalidScores(format!(
                    "score {} exceeds max {} for '{}'",
                    score.raw_score, score.max_possible_score, score.archetype_tag
                )));
            }
            match scores_by_tag.entry(score.archetype_tag.clone()) {
                Entry::Occupied(_) => {
                    return Err(QuestionnaireError::InvalidScores(format!(
                        "duplicate archetype '{}'",
                        score.archetype_tag
                    )))
                }
                Entry::Vacant(slot) => {
                    slot.insert(score);
                }
            }
        }

        if scores_by_tag.len() < 2 {
            return Err(QuestionnaireError::InsufficientArchetypes {
                found: scores_by_tag.len(),
            });
        }

        let mut ranked_scores: Vec<ArchetypeScore> = scores_by_tag.values().cloned().collect();
        ArchetypeAggregator::rank(&mut ranked_scores);

        Ok(Self {
            primary: ranked_scores[0].archetype_tag.clone(),
            secondary: ranked_scores[1].archetype_tag.clone(),
            scores_by_tag,
            ranked_scores,
        })
    }

    pub fn primary(&self) -> &ArchetypeTag {
        &self.primary
    }

    pub fn secondary(&self) -> &ArchetypeTag {
        &self.secondary
    }

    pub fn ranked_scores(&self) -> &[ArchetypeScore] {
        &self.ranked_scores
    }

    pub fn scores_by_tag(&self) -> &BTreeMap<ArchetypeTag, ArchetypeScore> {
        &self.scores_by_tag
    }

    pub fn score_for(&self, tag: &ArchetypeTag) -> Option<&ArchetypeScore> {
        self.scores_by_tag.get(tag)
    }

    /// Sum of raw scores across every archetype.
    pub fn total_raw_score(&self) -> u32 {
        self.ranked_scores.iter().map(|s| s.raw_score).sum()
    }

    /// Tags whose raw scores differ between two results, plus primary and
    /// secondary disagreements. Empty when the results agree.
    pub fn discrepancies(&self, other: &AggregationResult) -> Vec<String> {
        let mut diffs = Vec::new();

        if self.primary != other.primary {
            diffs.push(format!("primary: {} vs {}", self.primary, other.primary));
        }
        if self.secondary != other.secondary {
            diffs.push(format!("secondary: {} vs {}", self.secondary, other.secondary));
        }

        for (tag, score) in &self.scores_by_tag {
            match other.scores_by_tag.get(tag) {
                Some(theirs) if theirs.raw_score == score.raw_score => {}
                Some(theirs) => diffs.push(format!(
                    "{}: {} vs {}",
                    tag, score.raw_score, theirs.raw_score
                )),
                None => diffs.push(format!("{}: missing", tag)),
            }
        }
        for tag in other.scores_by_tag.keys() {
            if !self.scores_by_tag.contains_key(tag) {
                diffs.push(format!("{}: unexpected", tag));
            }
        }

        diffs
    }
}

/// Archetype scoring.
pub struct ArchetypeAggregator;

impl ArchetypeAggregator {
    /// Scores a completed questionnaire.
    ///
    /// # Algorithm
    /// 1. Group questions by archetype tag
    /// 2. raw = Σ answers in the group, max = 5 × group size
    /// 3. Rank descending by raw, ties by ascending tag
    /// 4. primary = ranked[0], secondary = ranked[1]
    ///
    /// A question with no recorded answer contributes 0 to its group's raw
    /// score but still counts toward the maximum.
    ///
    /// # Errors
    /// - `EmptyResponseSet` if no answers were recorded
    /// - `UnknownQuestionReference` if an answer names a question not in `questions`
    /// - `InsufficientArchetypes` if fewer than 2 distinct tags exist
    pub fn aggregate(
        questions: &QuestionSet,
        responses: &ResponseSet,
    ) -> Result<AggregationResult, QuestionnaireError> {
        if responses.is_empty() {
            return Err(QuestionnaireError::EmptyResponseSet);
        }

        if let Some((unknown, _)) = responses.iter().find(|(id, _)| !questions.contains(*id)) {
            return Err(QuestionnaireError::UnknownQuestionReference(unknown));
        }

        let mut groups: BTreeMap<&ArchetypeTag, (u32, u32)> = BTreeMap::new();
        for question in questions {
            let entry = groups.entry(question.archetype_tag()).or_insert((0, 0));
            entry.0 += responses
                .get(question.id())
                .map(|v| u32::from(v.value()))
                .unwrap_or(0);
            entry.1 += MAX_ANSWER;
        }

        AggregationResult::from_scores(
            groups
                .into_iter()
                .map(|(tag, (raw, max))| ArchetypeScore::new(tag.clone(), raw, max)),
        )
    }

    /// Sorts descending by raw score; equal scores fall back to tag order.
    pub fn rank(scores: &mut [ArchetypeScore]) {
        scores.sort_by(|a, b| {
            b.raw_score
                .cmp(&a.raw_score)
                .then_with(|| a.archetype_tag.cmp(&b.archetype_tag))
        });
    }
}
