//! Radar Projector - polar to Cartesian projection for radar/spider charts.
//!
//! Angles are clock-style: 0° points straight up and angles grow
//! clockwise in screen coordinates (y grows downward).

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::domain::foundation::{DomainError, ErrorCode};

/// Upper bound of a radar value; a value of 10 reaches the full radius.
pub const RADAR_MAX_VALUE: f64 = 10.0;

/// A 2D point in chart coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// One labelled value to project.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RadarInput {
    pub label: String,
    pub value: f64,
    pub angle_degrees: f64,
}

impl RadarInput {
    pub fn new(label: impl Into<String>, value: f64, angle_degrees: f64) -> Self {
        Self {
            label: label.into(),
            value,
            angle_degrees,
        }
    }
}

/// A projected radar vertex. `value` is the value actually plotted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RadarPoint {
    pub label: String,
    pub value: f64,
    pub angle_degrees: f64,
    pub x: f64,
    pub y: f64,
}

impl RadarPoint {
    pub fn position(&self) -> Point {
        Point::new(self.x, self.y)
    }
}

/// What to do with values outside 0..=10.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ValuePolicy {
    /// Fail the whole projection.
    #[default]
    Reject,
    /// Pin to the nearest bound.
    Clamp,
}

/// Errors raised while projecting radar points.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ProjectionError {
    #[error("Value for '{label}' must be between 0 and 10, got {value}")]
    ValueOutOfRange { label: String, value: f64 },

    #[error("Value for '{label}' is not a finite number")]
    NonFiniteValue { label: String },

    #[error("Angle for '{label}' is not a finite number")]
    NonFiniteAngle { label: String },

    #[error("Radius must be a finite, non-negative number, got {0}")]
    InvalidRadius(f64),

    #[error("Chart center must have finite coordinates")]
    InvalidCenter,
}

impl ProjectionError {
    pub fn code(&self) -> ErrorCode {
        match self {
            ProjectionError::ValueOutOfRange { .. } => ErrorCode::OutOfRange,
            _ => ErrorCode::ValidationFailed,
        }
    }
}

impl From<ProjectionError> for DomainError {
    fn from(err: ProjectionError) -> Self {
        DomainError::new(err.code(), err.to_string())
    }
}

/// Radar chart projection.
#[derive(Debug, Clone, Copy, Default)]
pub struct RadarProjector {
    policy: ValuePolicy,
}

impl RadarProjector {
    pub fn new(policy: ValuePolicy) -> Self {
        Self { policy }
    }

    pub fn policy(&self) -> ValuePolicy {
        self.policy
    }

    /// Projects labelled values onto a circle, preserving input order.
    ///
    /// `radius = value / 10 * max_radius`, then the point sits at
    /// `angle_degrees - 90` from the positive x axis. A `max_radius` of 0
    /// collapses every point onto the center.
    ///
    /// # Errors
    /// - `ValueOutOfRange` for values outside 0..=10 under `ValuePolicy::Reject`
    /// - `NonFiniteValue` / `NonFiniteAngle` for NaN or infinite inputs
    /// - `InvalidRadius` for a negative or non-finite `max_radius`
    /// - `InvalidCenter` for a non-finite center
    ///
    /// Validation happens for every input before any point is produced.
    pub fn project(
        &self,
        points: &[RadarInput],
        center: Point,
        max_radius: f64,
    ) -> Result<Vec<RadarPoint>, ProjectionError> {
        if !max_radius.is_finite() || max_radius < 0.0 {
            return Err(ProjectionError::InvalidRadius(max_radius));
        }
        if !center.x.is_finite() || !center.y.is_finite() {
            return Err(ProjectionError::InvalidCenter);
        }

        let values = points
            .iter()
            .map(|p| self.effective_value(p))
            .collect::<Result<Vec<f64>, ProjectionError>>()?;

        Ok(points
            .iter()
            .zip(values)
            .map(|(input, value)| {
                let radius = (value / RADAR_MAX_VALUE) * max_radius;
                let at = polar_to_cartesian(center, radius, input.angle_degrees);
                RadarPoint {
                    label: input.label.clone(),
                    value,
                    angle_degrees: input.angle_degrees,
                    x: at.x,
                    y: at.y,
                }
            })
            .collect())
    }

    fn effective_value(&self, input: &RadarInput) -> Result<f64, ProjectionError> {
        if !input.value.is_finite() {
            return Err(ProjectionError::NonFiniteValue {
                label: input.label.clone(),
            });
        }
        if !input.angle_degrees.is_finite() {
            return Err(ProjectionError::NonFiniteAngle {
                label: input.label.clone(),
            });
        }

        let in_range = (0.0..=RADAR_MAX_VALUE).contains(&input.value);
        match self.policy {
            _ if in_range => Ok(input.value),
            ValuePolicy::Clamp => Ok(input.value.clamp(0.0, RADAR_MAX_VALUE)),
            ValuePolicy::Reject => Err(ProjectionError::ValueOutOfRange {
                label: input.label.clone(),
                value: input.value,
            }),
        }
    }
}

/// Clock-style polar to Cartesian conversion (0° at the top).
pub fn polar_to_cartesian(center: Point, radius: f64, angle_degrees: f64) -> Point {
    let radians = (angle_degrees - 90.0).to_radians();
    Point::new(
        center.x + radius * radians.cos(),
        center.y + radius * radians.sin(),
    )
}
