pub mod generation;
pub mod question;
pub mod schema;
pub use generation::{GenerationResult, QuestionSet};
pub use question::{MultipleChoiceQuestion, QuestionKind, ShortAnswerQuestion, TrueFalseQuestion};
pub use schema::SchemaDescriptor;
