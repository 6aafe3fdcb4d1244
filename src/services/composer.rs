use crate::{
    constants::prompts::{
        MCQ_PROMPT, SHORT_ANSWER_PROMPT, STORY_PROMPT, TRUE_FALSE_PROMPT,
    },
    models::{
        domain::{QuestionKind, SchemaDescriptor},
        dto::request::GenerateStoryRequest,
    },
};

/// A prompt ready for the model together with the schema its reply must match.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ComposedPrompt {
    pub prompt: String,
    pub schema: SchemaDescriptor,
}

pub fn story_instruction(topic: &str, question_count: u32) -> String {
    let line_count = u64::from(question_count) * 3;
    // topic goes in last so user text is never re-scanned for placeholders
    STORY_PROMPT
        .replace("{line_count}", &line_count.to_string())
        .replace("{topic}", topic)
}

pub fn question_instruction(kind: QuestionKind, question_count: u32) -> String {
    let template = match kind {
        QuestionKind::MultipleChoice => MCQ_PROMPT,
        QuestionKind::TrueFalse => TRUE_FALSE_PROMPT,
        QuestionKind::ShortAnswer => SHORT_ANSWER_PROMPT,
    };
    template.replace("{count}", &question_count.to_string())
}

/// Builds a single prompt covering every selected kind. The schema follows
/// the last selected kind, so replies only carry that kind's questions.
///
/// Returns `None` when no kind is selected.
pub fn compose(request: &GenerateStoryRequest) -> Option<ComposedPrompt> {
    let kinds = request.selected_kinds();
    let last = *kinds.last()?;

    let question_query = kinds
        .iter()
        .map(|kind| question_instruction(*kind, request.question_count))
        .collect::<Vec<_>>()
        .join("\n");

    Some(assemble(request, question_query, SchemaDescriptor::for_kind(last)))
}

/// Builds a prompt asking only for questions of `kind`.
pub fn compose_for_kind(request: &GenerateStoryRequest, kind: QuestionKind) -> ComposedPrompt {
    let question_query = question_instruction(kind, request.question_count);
    assemble(request, question_query, SchemaDescriptor::for_kind(kind))
}

fn assemble(
    request: &GenerateStoryRequest,
    question_query: String,
    schema: SchemaDescriptor,
) -> ComposedPrompt {
    let prompt = format!(
        "{}\n\n{}\n\n{}",
        story_instruction(&request.topic, request.question_count),
        question_query,
        schema.format_instructions()
    );

    ComposedPrompt { prompt, schema }
}
