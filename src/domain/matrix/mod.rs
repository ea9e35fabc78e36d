//! Matrix module - life-sphere radar chart.
//!
//! Builds on the `RadarProjector` in `analysis` to lay out the twelve life
//! spheres and produce the chart geometry a renderer draws.

mod chart;
mod life_spheres;

pub use chart::{grid_radii, ChartAxis, ChartLayout, RadarChart};
pub use life_spheres::{LifeSphere, LifeSphereDefinition, LifeSphereMatrix, DEFAULT_LIFE_SPHERES};
