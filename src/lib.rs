//! Archetype Matrix - Personality questionnaire scoring and life-sphere charts
//!
//! This crate loads a Likert-scale questionnaire, collects 1-5 answers,
//! ranks archetypes by summed score, and projects life-sphere values onto
//! radar chart coordinates.

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;
