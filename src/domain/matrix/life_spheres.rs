//! The twelve life spheres shown on the matrix screen.

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

use crate::domain::analysis::RadarInput;
use crate::domain::foundation::ValidationError;

/// Identity and display label of a life sphere.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LifeSphereDefinition {
    pub id: String,
    pub label: String,
}

impl LifeSphereDefinition {
    pub fn new(id: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            label: label.into(),
        }
    }
}

/// The default sphere order, clockwise from the top of the chart.
pub static DEFAULT_LIFE_SPHERES: Lazy<Vec<LifeSphereDefinition>> = Lazy::new(|| {
    [
        ("identity", "Identity"),
        ("resource", "Resource"),
        ("communication", "Connections"),
        ("roots", "Roots"),
        ("creativity", "Creativity"),
        ("duty", "Duty"),
        ("partnership", "Partnership"),
        ("crisis", "Crisis"),
        ("meaning", "Meaning"),
        ("goals", "Goals"),
        ("freedom", "Freedom"),
        ("subconscious", "Subconscious"),
    ]
    .into_iter()
    .map(|(id, label)| LifeSphereDefinition::new(id, label))
    .collect()
});

/// A sphere together with its 0..=10 score.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LifeSphere {
    #[serde(flatten)]
    pub definition: LifeSphereDefinition,
    pub value: f64,
}

/// Ordered life spheres, spaced evenly around the chart.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LifeSphereMatrix {
    spheres: Vec<LifeSphere>,
}

impl LifeSphereMatrix {
    pub fn new(spheres: Vec<LifeSphere>) -> Self {
        Self { spheres }
    }

    /// Pairs the default twelve spheres with `values`, in order.
    pub fn from_default_values(values: &[f64]) -> Result<Self, ValidationError> {
        let expected = DEFAULT_LIFE_SPHERES.len();
        if values.len() != expected {
            return Err(ValidationError::out_of_range(
                "life_sphere_values",
                expected as i64,
                expected as i64,
                values.len() as i64,
            ));
        }

        Ok(Self::new(
            DEFAULT_LIFE_SPHERES
                .iter()
                .zip(values)
                .map(|(definition, value)| LifeSphere {
                    definition: definition.clone(),
                    value: *value,
                })
                .collect(),
        ))
    }

    pub fn spheres(&self) -> &[LifeSphere] {
        &self.spheres
    }

    pub fn len(&self) -> usize {
        self.spheres.len()
    }

    pub fn is_empty(&self) -> bool {
        self.spheres.is_empty()
    }

    /// Angle of the sphere at `index`: `360 / n * index`.
    pub fn angle_for(&self, index: usize) -> f64 {
        if self.spheres.is_empty() {
            return 0.0;
        }
        360.0 / self.spheres.len() as f64 * index as f64
    }

    /// Radar inputs labelled with the sphere labels.
    pub fn radar_inputs(&self) -> Vec<RadarInput> {
        self.spheres
            .iter()
            .enumerate()
            .map(|(i, s)| RadarInput::new(s.definition.label.clone(), s.value, self.angle_for(i)))
            .collect()
    }
}
