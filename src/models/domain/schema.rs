use once_cell::sync::Lazy;
use regex::Regex;
use schemars::{JsonSchema, Schema};
use serde::{de::DeserializeOwned, Deserialize, Serialize};

use crate::constants::prompts::JSON_FORMAT_INSTRUCTIONS;
use crate::errors::{AppError, AppResult};

use super::generation::{GenerationResult, QuestionSet};
use super::question::{
    MultipleChoiceQuestion, QuestionKind, ShortAnswerQuestion, TrueFalseQuestion,
};

static CODE_FENCE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?s)```(?:json)?\s*(.*?)\s*```").expect("CODE_FENCE is a valid regex pattern")
});

#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize, JsonSchema)]
pub struct McqArray {
    pub story: String,
    pub mcqs: Vec<MultipleChoiceQuestion>,
}

#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize, JsonSchema)]
pub struct TrueFalseArray {
    pub story: String,
    pub true_false_questions: Vec<TrueFalseQuestion>,
}

#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize, JsonSchema)]
pub struct ShortAnswerArray {
    pub story: String,
    pub short_answer_questions: Vec<ShortAnswerQuestion>,
}

impl From<McqArray> for GenerationResult {
    fn from(reply: McqArray) -> Self {
        GenerationResult::new(reply.story, vec![QuestionSet::MultipleChoice(reply.mcqs)])
    }
}

impl From<TrueFalseArray> for GenerationResult {
    fn from(reply: TrueFalseArray) -> Self {
        GenerationResult::new(
            reply.story,
            vec![QuestionSet::TrueFalse(reply.true_false_questions)],
        )
    }
}

impl From<ShortAnswerArray> for GenerationResult {
    fn from(reply: ShortAnswerArray) -> Self {
        GenerationResult::new(
            reply.story,
            vec![QuestionSet::ShortAnswer(reply.short_answer_questions)],
        )
    }
}

/// Output shape a model reply must satisfy.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SchemaDescriptor {
    McqArray,
    TrueFalseArray,
    ShortAnswerArray,
}

impl SchemaDescriptor {
    pub fn for_kind(kind: QuestionKind) -> Self {
        match kind {
            QuestionKind::MultipleChoice => SchemaDescriptor::McqArray,
            QuestionKind::TrueFalse => SchemaDescriptor::TrueFalseArray,
            QuestionKind::ShortAnswer => SchemaDescriptor::ShortAnswerArray,
        }
    }

    pub fn kind(&self) -> QuestionKind {
        match self {
            SchemaDescriptor::McqArray => QuestionKind::MultipleChoice,
            SchemaDescriptor::TrueFalseArray => QuestionKind::TrueFalse,
            SchemaDescriptor::ShortAnswerArray => QuestionKind::ShortAnswer,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            SchemaDescriptor::McqArray => "MCQArray",
            SchemaDescriptor::TrueFalseArray => "TrueFalseArray",
            SchemaDescriptor::ShortAnswerArray => "ShortAnswerArray",
        }
    }

    pub fn json_schema(&self) -> serde_json::Value {
        let schema = match self {
            SchemaDescriptor::McqArray => schemars::schema_for!(McqArray),
            SchemaDescriptor::TrueFalseArray => schemars::schema_for!(TrueFalseArray),
            SchemaDescriptor::ShortAnswerArray => schemars::schema_for!(ShortAnswerArray),
        };
        reduced_schema(schema)
    }

    pub fn format_instructions(&self) -> String {
        let schema = serde_json::to_string(&self.json_schema()).unwrap_or_else(|_| "{}".to_string());
        JSON_FORMAT_INSTRUCTIONS.replace("{schema}", &schema)
    }

    /// Parses a raw completion into a result of this descriptor's shape.
    pub fn parse(&self, completion: &str) -> AppResult<GenerationResult> {
        let json = strip_code_fence(completion);
        match self {
            SchemaDescriptor::McqArray => parse_reply::<McqArray>(json, self.name()),
            SchemaDescriptor::TrueFalseArray => parse_reply::<TrueFalseArray>(json, self.name()),
            SchemaDescriptor::ShortAnswerArray => {
                parse_reply::<ShortAnswerArray>(json, self.name())
            }
        }
    }
}

fn reduced_schema(schema: Schema) -> serde_json::Value {
    let mut value = schema.to_value();
    if let Some(object) = value.as_object_mut() {
        object.remove("$schema");
        object.remove("title");
        object.remove("type");
    }
    value
}

fn parse_reply<T>(json: &str, schema_name: &str) -> AppResult<GenerationResult>
where
    T: DeserializeOwned + Into<GenerationResult>,
{
    serde_json::from_str::<T>(json)
        .map(Into::into)
        .map_err(|e| {
            AppError::SchemaError(format!("Reply does not match {}: {}", schema_name, e))
        })
}

fn strip_code_fence(completion: &str) -> &str {
    let trimmed = completion.trim();
    CODE_FENCE
        .captures(trimmed)
        .and_then(|captures| captures.get(1))
        .map_or(trimmed, |body| body.as_str())
}
