use std::borrow::Cow;

use async_graphql::{Enum, InputObject};
use serde::{Deserialize, Serialize};
use validator::{Validate, ValidationError, ValidationErrors};

use crate::errors::{AppError, AppResult};
use crate::models::domain::QuestionKind;

pub const TOPIC_REQUIRED_MESSAGE: &str = "Please provide a topic.";
pub const QUESTION_COUNT_MESSAGE: &str = "Please enter a valid number of questions.";
pub const QUESTION_KINDS_MESSAGE: &str = "Please select at least one question type.";

/// Fields in the order their errors are reported to the user.
const FIELD_PRIORITY: [&str; 3] = ["topic", "question_count", "question_kinds"];

#[derive(Debug, Clone, Deserialize, Serialize, Validate, InputObject)]
pub struct GenerateStoryRequest {
    #[validate(custom(function = "validate_topic"))]
    pub topic: String,

    #[validate(range(min = 1, message = "Please enter a valid number of questions."))]
    pub question_count: u32,

    #[validate(length(min = 1, message = "Please select at least one question type."))]
    pub question_kinds: Vec<QuestionKind>,
}

impl GenerateStoryRequest {
    pub fn new(
        topic: impl Into<String>,
        question_count: u32,
        question_kinds: Vec<QuestionKind>,
    ) -> Self {
        Self {
            topic: topic.into(),
            question_count,
            question_kinds,
        }
    }

    /// Selected kinds without repeats, in the order they were first selected.
    pub fn selected_kinds(&self) -> Vec<QuestionKind> {
        let mut kinds = Vec::with_capacity(self.question_kinds.len());
        for kind in &self.question_kinds {
            if !kinds.contains(kind) {
                kinds.push(*kind);
            }
        }
        kinds
    }

    /// Validates the request, reporting only the highest priority problem.
    pub fn check(&self) -> AppResult<()> {
        self.validate().map_err(AppError::from)
    }
}

fn validate_topic(topic: &str) -> Result<(), ValidationError> {
    if topic.trim().is_empty() {
        return Err(ValidationError::new("blank").with_message(Cow::Borrowed(TOPIC_REQUIRED_MESSAGE)));
    }
    Ok(())
}

pub fn first_error_message(errors: &ValidationErrors) -> String {
    let field_errors = errors.field_errors();
    FIELD_PRIORITY
        .iter()
        .filter_map(|field| field_errors.get(*field))
        .filter_map(|errs| errs.first())
        .find_map(|err| err.message.as_ref().map(|m| m.to_string()))
        .unwrap_or_else(|| errors.to_string())
}

/// Which composition contract a request is served with.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Deserialize, Serialize, Enum)]
#[serde(rename_all = "lowercase")]
pub enum PromptVersion {
    /// One call whose schema follows the last selected kind.
    #[default]
    V1,
    /// One call per selected kind, merged in selection order.
    V2,
}

/// Raw values of the submission form, kept as typed by the user so the form
/// can be re-rendered after a failed submission.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StoryForm {
    pub topic: String,
    pub question_count: String,
    pub question_kinds: Vec<String>,
}

impl StoryForm {
    /// Builds the form from url-encoded pairs; `question_kinds` may repeat.
    pub fn from_pairs(pairs: Vec<(String, String)>) -> Self {
        let mut form = StoryForm::default();
        for (key, value) in pairs {
            match key.as_str() {
                "topic" => form.topic = value,
                "question_count" => form.question_count = value,
                "question_kinds" => form.question_kinds.push(value),
                other => log::debug!("Ignoring unknown form field '{}'", other),
            }
        }
        form
    }

    pub fn is_selected(&self, kind: QuestionKind) -> bool {
        self.question_kinds
            .iter()
            .any(|value| value.parse::<QuestionKind>().is_ok_and(|parsed| parsed == kind))
    }

    /// An unparsable count becomes 0 and fails validation later.
    pub fn to_request(&self) -> AppResult<GenerateStoryRequest> {
        let question_count = self.question_count.trim().parse::<u32>().unwrap_or(0);
        let question_kinds = self
            .question_kinds
            .iter()
            .map(|value| value.parse::<QuestionKind>())
            .collect::<Result<Vec<_>, _>>()
            .map_err(AppError::ValidationError)?;

        Ok(GenerateStoryRequest::new(
            self.topic.clone(),
            question_count,
            question_kinds,
        ))
    }
}
