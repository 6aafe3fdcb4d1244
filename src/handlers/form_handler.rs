use actix_web::{get, http::StatusCode, post, web, HttpResponse};
use maud::Markup;

use crate::{
    app_state::AppState,
    errors::AppError,
    models::dto::request::{PromptVersion, StoryForm},
    views,
};

fn html(status: StatusCode, markup: Markup) -> HttpResponse {
    HttpResponse::build(status)
        .content_type("text/html; charset=utf-8")
        .body(markup.into_string())
}

#[get("/")]
pub async fn story_form() -> HttpResponse {
    html(StatusCode::OK, views::index(&StoryForm::default(), None, None))
}

/// Form submission. Input problems and generation failures are shown inline
/// above the submit button.
#[post("/")]
pub async fn submit_story(
    state: web::Data<AppState>,
    pairs: web::Form<Vec<(String, String)>>,
) -> HttpResponse {
    let form = StoryForm::from_pairs(pairs.into_inner());

    let generated = match form.to_request() {
        Ok(request) => state.story_service.generate(&request, PromptVersion::V1).await,
        Err(err) => Err(err),
    };

    match generated {
        Ok(response) => html(
            StatusCode::OK,
            views::index(&form, None, Some(&response.rendered)),
        ),
        Err(AppError::ValidationError(message)) => html(
            StatusCode::UNPROCESSABLE_ENTITY,
            views::index(&form, Some(&message), None),
        ),
        Err(err) => {
            log::error!("Story generation failed: {}", err);
            let message = format!("Could not generate the story: {}", err.message());
            html(StatusCode::BAD_GATEWAY, views::index(&form, Some(&message), None))
        }
    }
}
