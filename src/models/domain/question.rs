use std::{fmt, str::FromStr};

use async_graphql::Enum;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Eq, Hash, Deserialize, Serialize, Enum, Copy, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum QuestionKind {
    #[serde(alias = "MCQ", alias = "mcq")]
    MultipleChoice,
    #[serde(alias = "True/False")]
    TrueFalse,
    #[serde(alias = "Short Answer")]
    ShortAnswer,
}

impl QuestionKind {
    pub const ALL: [QuestionKind; 3] = [
        QuestionKind::MultipleChoice,
        QuestionKind::TrueFalse,
        QuestionKind::ShortAnswer,
    ];

    /// Form value used by the submission form.
    pub fn as_str(&self) -> &'static str {
        match self {
            QuestionKind::MultipleChoice => "multiple_choice",
            QuestionKind::TrueFalse => "true_false",
            QuestionKind::ShortAnswer => "short_answer",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            QuestionKind::MultipleChoice => "MCQ",
            QuestionKind::TrueFalse => "True/False",
            QuestionKind::ShortAnswer => "Short Answer",
        }
    }

    pub fn heading(&self) -> &'static str {
        match self {
            QuestionKind::MultipleChoice => "Multiple Choice Questions:",
            QuestionKind::TrueFalse => "True/False Questions:",
            QuestionKind::ShortAnswer => "Short Answer Questions:",
        }
    }
}

impl fmt::Display for QuestionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

impl FromStr for QuestionKind {
    type Err = String;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_lowercase().as_str() {
            "multiple_choice" | "mcq" => Ok(QuestionKind::MultipleChoice),
            "true_false" | "true/false" => Ok(QuestionKind::TrueFalse),
            "short_answer" | "short answer" => Ok(QuestionKind::ShortAnswer),
            other => Err(format!("Unknown question type '{}'", other)),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize, JsonSchema)]
pub struct MultipleChoiceQuestion {
    /// Multiple Choice Question
    pub question: String,
    /// List of options for the MCQ
    pub options: Vec<String>,
    /// Index of the correct option
    pub correct_option: i64,
}

#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize, JsonSchema)]
pub struct TrueFalseQuestion {
    /// True/False Question
    pub question: String,
    /// List of options for the True False
    pub options: Vec<String>,
    /// Correct answer (True/False)
    pub correct_answer: bool,
    /// Explanation of the correct answer
    pub explanation: String,
}

#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize, JsonSchema)]
pub struct ShortAnswerQuestion {
    /// Short Answer Question
    pub question: String,
    /// Correct answer to the question
    pub correct_answer: String,
}
