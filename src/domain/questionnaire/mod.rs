//! Questionnaire - questions, answers and navigation.
//!
//! # Components
//!
//! - `Question` / `QuestionSet` - validated, provider-ordered questions
//! - `ResponseSet` - one 1..=5 answer per question, neutral by default
//! - `ResponseCollector` - per-session cursor with forward/back navigation

mod collector;
mod errors;
mod question;
mod question_set;
mod response_set;

pub use collector::{NavigationStatus, ResponseCollector};
pub use errors::QuestionnaireError;
pub use question::Question;
pub use question_set::QuestionSet;
pub use response_set::ResponseSet;
