//! Analysis Module - Pure domain services for scoring and chart geometry.
//!
//! # Components
//!
//! - `ArchetypeAggregator` - Groups answers by archetype, ranks, picks primary/secondary
//! - `RadarProjector` - Projects 0..=10 values onto radar chart coordinates
//!
//! All functions are pure (no side effects, no clock, no randomness). They
//! take domain objects as input and return computed results, so calling
//! them twice with the same input yields identical output.

mod archetype_aggregator;
mod radar_projector;

pub use archetype_aggregator::{AggregationResult, ArchetypeAggregator, ArchetypeScore};
pub use radar_projector::{
    polar_to_cartesian, Point, ProjectionError, RadarInput, RadarPoint, RadarProjector,
    ValuePolicy, RADAR_MAX_VALUE,
};
