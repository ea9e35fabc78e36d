//! Question source adapters and the shared question record format.

mod record;
mod yaml_question_source;

pub use record::{into_questions, QuestionEnvelope, QuestionRecord};
pub use yaml_question_source::YamlQuestionSource;
