use std::sync::Arc;

use crate::{
    config::Config,
    services::{
        model_service::{OpenAiStoryModel, StoryModel},
        story_service::StoryService,
    },
};

#[derive(Clone)]
pub struct AppState {
    pub story_service: Arc<StoryService>,
    pub config: Arc<Config>,
}

impl AppState {
    pub fn new(config: Config) -> Self {
        let model = Arc::new(OpenAiStoryModel::new(&config));
        Self::with_model(config, model)
    }

    /// Builds the state around an already constructed model backend.
    pub fn with_model(config: Config, model: Arc<dyn StoryModel>) -> Self {
        let story_service = Arc::new(StoryService::new(model));

        Self {
            story_service,
            config: Arc::new(config),
        }
    }
}
