use async_graphql::{Context, ErrorExtensions, Object};

use crate::{
    app_state::AppState,
    models::dto::{
        request::{GenerateStoryRequest, PromptVersion},
        response::RenderedStory,
    },
};

pub struct MutationRoot;

#[Object]
impl MutationRoot {
    async fn generate_story(
        &self,
        ctx: &Context<'_>,
        input: GenerateStoryRequest,
        version: Option<PromptVersion>,
    ) -> async_graphql::Result<RenderedStory> {
        let state = ctx.data::<AppState>()?;

        let response = state
            .story_service
            .generate(&input, version.unwrap_or_default())
            .await
            .map_err(|e| e.extend())?;

        Ok(response.rendered)
    }
}
