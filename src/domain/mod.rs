//! Domain layer containing business logic and domain types.
//!
//! # Module Organization
//!
//! - `foundation` - Shared domain primitives (value objects, IDs, errors)
//! - `questionnaire` - Questions, answers and questionnaire navigation
//! - `analysis` - Pure domain services (archetype scoring, radar projection)
//! - `matrix` - Life-sphere radar chart layout
//! - `navigation` - Tab bar active-route resolution

pub mod analysis;
pub mod foundation;
pub mod matrix;
pub mod navigation;
pub mod questionnaire;
