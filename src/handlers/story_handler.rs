use actix_web::{get, post, web, HttpResponse};

use crate::{
    app_state::AppState,
    errors::AppError,
    models::dto::{
        request::{GenerateStoryRequest, PromptVersion},
        response::HealthResponse,
    },
};

#[get("/health")]
pub async fn health_check(state: web::Data<AppState>) -> HttpResponse {
    HttpResponse::Ok().json(HealthResponse {
        status: "ok",
        model: state.config.openai_model.clone(),
    })
}

/// Single model call; the schema follows the last selected question kind.
#[post("/api/v1/stories")]
pub async fn generate_story_v1(
    state: web::Data<AppState>,
    request: web::Json<GenerateStoryRequest>,
) -> Result<HttpResponse, AppError> {
    let response = state
        .story_service
        .generate(&request.into_inner(), PromptVersion::V1)
        .await?;
    Ok(HttpResponse::Ok().json(response))
}

/// One model call per selected question kind.
#[post("/api/v2/stories")]
pub async fn generate_story_v2(
    state: web::Data<AppState>,
    request: web::Json<GenerateStoryRequest>,
) -> Result<HttpResponse, AppError> {
    let response = state
        .story_service
        .generate(&request.into_inner(), PromptVersion::V2)
        .await?;
    Ok(HttpResponse::Ok().json(response))
}
