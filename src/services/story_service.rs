use std::sync::Arc;

use crate::{
    errors::{AppError, AppResult},
    models::{
        domain::GenerationResult,
        dto::{
            request::{GenerateStoryRequest, PromptVersion, QUESTION_KINDS_MESSAGE},
            response::GenerateStoryResponse,
        },
    },
    services::{
        composer::{compose, compose_for_kind},
        model_service::StoryModel,
        renderer::render,
    },
};

pub struct StoryService {
    model: Arc<dyn StoryModel>,
}

impl StoryService {
    pub fn new(model: Arc<dyn StoryModel>) -> Self {
        Self { model }
    }

    /// Validates the request, asks the model for a story and questions, then
    /// truncates and renders the reply.
    pub async fn generate(
        &self,
        request: &GenerateStoryRequest,
        version: PromptVersion,
    ) -> AppResult<GenerateStoryResponse> {
        request.check()?;

        log::info!(
            "Generating {:?} story about '{}' with {} question(s) of {:?}",
            version,
            request.topic,
            request.question_count,
            request.selected_kinds()
        );

        let mut result = match version {
            PromptVersion::V1 => self.generate_single_call(request).await?,
            PromptVersion::V2 => self.generate_per_kind(request).await?,
        };

        result.truncate(request.question_count as usize);
        let rendered = render(&result);

        Ok(GenerateStoryResponse {
            version,
            result,
            rendered,
        })
    }

    async fn generate_single_call(
        &self,
        request: &GenerateStoryRequest,
    ) -> AppResult<GenerationResult> {
        let composed = compose(request)
            .ok_or_else(|| AppError::ValidationError(QUESTION_KINDS_MESSAGE.to_string()))?;

        log::debug!("Bound output schema {}", composed.schema.name());
        let reply = self.model.complete(&composed.prompt).await?;
        composed.schema.parse(&reply)
    }

    async fn generate_per_kind(&self, request: &GenerateStoryRequest) -> AppResult<GenerationResult> {
        let mut merged: Option<GenerationResult> = None;

        for kind in request.selected_kinds() {
            let composed = compose_for_kind(request, kind);
            log::debug!("Requesting {} with schema {}", kind, composed.schema.name());

            let reply = self.model.complete(&composed.prompt).await?;
            let result = composed.schema.parse(&reply)?;

            match merged.as_mut() {
                Some(existing) => existing.question_sets.extend(result.question_sets),
                None => merged = Some(result),
            }
        }

        merged.ok_or_else(|| AppError::ValidationError(QUESTION_KINDS_MESSAGE.to_string()))
    }
}
