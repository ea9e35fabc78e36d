//! Answer value object for the slider questionnaire (1 to 5 scale).

use serde::{Deserialize, Serialize};
use std::fmt;

use super::ValidationError;

/// Slider answer: 1 ("not me at all") to 5 ("definitely me").
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "i64", into = "u8")]
pub struct AnswerValue(u8);

impl AnswerValue {
    pub const MIN: u8 = 1;
    pub const MAX: u8 = 5;

    /// Neutral midpoint assigned before the user responds.
    pub const NEUTRAL: Self = Self(3);

    /// Creates an AnswerValue, returning error if out of range.
    pub fn try_new(value: i64) -> Result<Self, ValidationError> {
        if value < i64::from(Self::MIN) || value > i64::from(Self::MAX) {
            return Err(ValidationError::out_of_range(
                "answer",
                i64::from(Self::MIN),
                i64::from(Self::MAX),
                value,
            ));
        }
        Ok(Self(value as u8))
    }

    /// Returns the numeric value.
    pub fn value(&self) -> u8 {
        self.0
    }

    /// Returns the slider label shown under this position.
    pub fn label(&self) -> &'static str {
        match self.0 {
            1 | 2 => "Not me at all",
            3 => "Sometimes",
            _ => "Definitely me",
        }
    }
}

impl Default for AnswerValue {
    fn default() -> Self {
        Self::NEUTRAL
    }
}

impl TryFrom<i64> for AnswerValue {
    type Error = ValidationError;

    fn try_from(value: i64) -> Result<Self, Self::Error> {
        Self::try_new(value)
    }
}

impl From<AnswerValue> for u8 {
    fn from(value: AnswerValue) -> Self {
        value.0
    }
}

impl fmt::Display for AnswerValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn answer_accepts_full_scale() {
        for v in 1..=5 {
            assert_eq!(AnswerValue::try_new(v).unwrap().value() as i64, v);
        }
    }

    #[test]
    fn answer_rejects_out_of_range() {
        assert!(AnswerValue::try_new(0).is_err());
        assert!(AnswerValue::try_new(6).is_err());
        assert!(AnswerValue::try_new(-3).is_err());
        assert!(AnswerValue::try_new(i64::MAX).is_err());
    }

    #[test]
    fn answer_default_is_neutral_midpoint() {
        assert_eq!(AnswerValue::default().value(), 3);
        assert_eq!(AnswerValue::default().label(), "Sometimes");
    }

    #[test]
    fn answer_serializes_as_plain_number() {
        let json = serde_json::to_string(&AnswerValue::try_new(4).unwrap()).unwrap();
        assert_eq!(json, "4");
    }

    #[test]
    fn answer_deserialization_enforces_range() {
        let ok: AnswerValue = serde_json::from_str("5").unwrap();
        assert_eq!(ok.value(), 5);
        assert!(serde_json::from_str::<AnswerValue>("9").is_err());
    }
}
