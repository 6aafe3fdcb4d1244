use async_graphql::{Context, Object};

use crate::{app_state::AppState, models::domain::QuestionKind};

pub struct QueryRoot;

#[Object]
impl QueryRoot {
    /// Question kinds a story can be quizzed with.
    async fn question_kinds(&self) -> Vec<QuestionKind> {
        QuestionKind::ALL.to_vec()
    }

    async fn model(&self, ctx: &Context<'_>) -> async_graphql::Result<String> {
        let state = ctx.data::<AppState>()?;
        Ok(state.config.openai_model.clone())
    }
}
