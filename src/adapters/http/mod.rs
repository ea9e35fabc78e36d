//! HTTP adapters for the questionnaire backend API.

mod api_client;
pub mod dto;

pub use api_client::{ApiClientConfig, HttpApiClient};
