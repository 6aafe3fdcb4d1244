use async_graphql::SimpleObject;
use serde::Serialize;

use crate::models::domain::{GenerationResult, QuestionKind};
use crate::models::dto::request::PromptVersion;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, SimpleObject)]
pub struct RenderedQuestion {
    pub number: usize,
    pub lines: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, SimpleObject)]
pub struct QuestionSection {
    pub kind: QuestionKind,
    pub heading: String,
    pub questions: Vec<RenderedQuestion>,
}

/// Display-ready story and questions.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, SimpleObject)]
pub struct RenderedStory {
    pub paragraphs: Vec<String>,
    pub sections: Vec<QuestionSection>,
}

impl RenderedStory {
    pub fn to_text(&self) -> String {
        let mut out = String::from("Generated Story:\n");
        for paragraph in &self.paragraphs {
            out.push_str(paragraph);
            out.push_str("\n\n");
        }

        for section in &self.sections {
            out.push_str(&section.heading);
            out.push('\n');
            for question in &section.questions {
                for line in &question.lines {
                    out.push_str(line);
                    out.push('\n');
                }
                out.push('\n');
            }
        }
        out
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct GenerateStoryResponse {
    pub version: PromptVersion,
    pub result: GenerationResult,
    pub rendered: RenderedStory,
}

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub model: String,
}
