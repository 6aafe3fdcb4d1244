pub mod composer;
pub mod model_service;
pub mod renderer;
pub mod story_service;
