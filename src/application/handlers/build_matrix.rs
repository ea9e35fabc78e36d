//! BuildMatrixHandler - Query handler producing life-sphere chart geometry.

use thiserror::Error;

use crate::domain::analysis::{ProjectionError, RadarProjector};
use crate::domain::foundation::{DomainError, ErrorCode, ValidationError};
use crate::domain::matrix::{ChartLayout, LifeSphereMatrix, RadarChart};

#[derive(Debug, Clone, PartialEq, Error)]
pub enum BuildMatrixError {
    #[error("Invalid life sphere values: {0}")]
    InvalidValues(#[from] ValidationError),

    #[error(transparent)]
    Projection(#[from] ProjectionError),
}

impl BuildMatrixError {
    pub fn code(&self) -> ErrorCode {
        match self {
            BuildMatrixError::InvalidValues(_) => ErrorCode::ValidationFailed,
            BuildMatrixError::Projection(e) => e.code(),
        }
    }
}

impl From<BuildMatrixError> for DomainError {
    fn from(err: BuildMatrixError) -> Self {
        match err {
            BuildMatrixError::InvalidValues(e) => e.into(),
            BuildMatrixError::Projection(e) => e.into(),
        }
    }
}

/// Handler for building the matrix chart with a fixed layout and policy.
#[derive(Debug, Clone, Copy)]
pub struct BuildMatrixHandler {
    layout: ChartLayout,
    projector: RadarProjector,
}

impl BuildMatrixHandler {
    pub fn new(layout: ChartLayout, projector: RadarProjector) -> Self {
        Self { layout, projector }
    }

    pub fn layout(&self) -> &ChartLayout {
        &self.layout
    }

    /// Builds the chart for the twelve default spheres, values in sphere order.
    pub fn handle(&self, values: &[f64]) -> Result<RadarChart, BuildMatrixError> {
        let matrix = LifeSphereMatrix::from_default_values(values)?;
        self.handle_matrix(&matrix)
    }

    /// Builds the chart for an arbitrary matrix.
    pub fn handle_matrix(&self, matrix: &LifeSphereMatrix) -> Result<RadarChart, BuildMatrixError> {
        let chart = RadarChart::build(matrix, &self.projector, self.layout).map_err(|e| {
            tracing::warn!(code = %e.code(), "Failed to project life spheres: {}", e);
            e
        })?;
        tracing::debug!(spheres = matrix.len(), "Built life-sphere chart");
        Ok(chart)
    }
}
