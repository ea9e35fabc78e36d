//! Radar chart configuration

use serde::Deserialize;

use super::error::ValidationError;
use crate::domain::analysis::{Point, RadarProjector, ValuePolicy};
use crate::domain::matrix::ChartLayout;

/// Radar chart geometry and out-of-range handling
#[derive(Debug, Clone, Deserialize)]
pub struct RadarConfig {
    #[serde(default = "default_center")]
    pub center_x: f64,

    #[serde(default = "default_center")]
    pub center_y: f64,

    /// Radius of the outer ring, where a value of 10 lands
    #[serde(default = "default_max_radius")]
    pub max_radius: f64,

    /// Number of concentric grid rings
    #[serde(default = "default_grid_rings")]
    pub grid_rings: usize,

    /// `reject` or `clamp` for values outside 0..=10
    #[serde(default)]
    pub value_policy: ValuePolicy,
}

impl RadarConfig {
    pub fn layout(&self) -> ChartLayout {
        ChartLayout {
            center: Point::new(self.center_x, self.center_y),
            max_radius: self.max_radius,
            grid_rings: self.grid_rings,
        }
    }

    pub fn projector(&self) -> RadarProjector {
        RadarProjector::new(self.value_policy)
    }

    /// Validate radar configuration
    pub fn validate(&self) -> Result<(), ValidationError> {
        if !self.max_radius.is_finite() || self.max_radius < 0.0 {
            return Err(ValidationError::InvalidRadius);
        }
        if !self.center_x.is_finite() || !self.center_y.is_finite() {
            return Err(ValidationError::InvalidCenter);
        }
        if self.grid_rings == 0 {
            return Err(ValidationError::InvalidGridRings);
        }
        Ok(())
    }
}

impl Default for RadarConfig {
    fn default() -> Self {
        Self {
            center_x: default_center(),
            center_y: default_center(),
            max_radius: default_max_radius(),
            grid_rings: default_grid_rings(),
            value_policy: ValuePolicy::default(),
        }
    }
}

fn default_center() -> f64 {
    150.0
}

fn default_max_radius() -> f64 {
    120.0
}

fn default_grid_rings() -> usize {
    4
}
