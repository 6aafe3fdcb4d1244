use actix_web::{web, HttpResponse};
use async_graphql::http::GraphiQLSource;
use async_graphql_actix_web::{GraphQLRequest, GraphQLResponse};

use crate::graphql::Schema;

pub async fn graphql(schema: web::Data<Schema>, request: GraphQLRequest) -> GraphQLResponse {
    schema.execute(request.into_inner()).await.into()
}

pub async fn graphiql() -> HttpResponse {
    HttpResponse::Ok()
        .content_type("text/html; charset=utf-8")
        .body(GraphiQLSource::build().endpoint("/graphql").finish())
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::*;
    use crate::{
        app_state::AppState, config::Config, graphql::create_schema,
        services::model_service::MockStoryModel, test_utils::fixtures::short_answer_reply,
    };
    use actix_web::{test, App};
    use serde_json::{json, Value};

    fn schema_with(model: MockStoryModel) -> web::Data<Schema> {
        let state = AppState::with_model(Config::test_config(), Arc::new(model));
        web::Data::new(create_schema(state))
    }

    #[actix_web::test]
    async fn test_question_kinds_query() {
        let app = test::init_service(
            App::new()
                .app_data(schema_with(MockStoryModel::new()))
                .route("/graphql", web::post().to(graphql)),
        )
        .await;

        let req = test::TestRequest::post()
            .uri("/graphql")
            .set_json(json!({ "query": "{ questionKinds }" }))
            .to_request();
        let body: Value = test::call_and_read_body_json(&app, req).await;

        assert_eq!(
            body["data"]["questionKinds"],
            json!(["MULTIPLE_CHOICE", "TRUE_FALSE", "SHORT_ANSWER"])
        );
    }

    #[actix_web::test]
    async fn test_generate_story_mutation() {
        let mut model = MockStoryModel::new();
        model
            .expect_complete()
            .times(1)
            .returning(|_| Ok(short_answer_reply(3)));

        let app = test::init_service(
            App::new()
                .app_data(schema_with(model))
                .route("/graphql", web::post().to(graphql)),
        )
        .await;

        let query = r#"mutation {
            generateStory(input: { topic: "a brave turtle", questionCount: 2, questionKinds: [SHORT_ANSWER] }) {
                paragraphs
                sections { kind heading questions { number lines } }
            }
        }"#;
        let req = test::TestRequest::post()
            .uri("/graphql")
            .set_json(json!({ "query": query }))
            .to_request();
        let body: Value = test::call_and_read_body_json(&app, req).await;

        let section = &body["data"]["generateStory"]["sections"][0];
        assert_eq!(section["kind"], "SHORT_ANSWER");
        assert_eq!(section["questions"].as_array().map(Vec::len), Some(2));
    }

    #[actix_web::test]
    async fn test_generate_story_validation_error_has_code() {
        let mut model = MockStoryModel::new();
        model.expect_complete().times(0);

        let app = test::init_service(
            App::new()
                .app_data(schema_with(model))
                .route("/graphql", web::post().to(graphql)),
        )
        .await;

        let query = r#"mutation {
            generateStory(input: { topic: "", questionCount: 2, questionKinds: [MULTIPLE_CHOICE] }) {
                paragraphs
            }
        }"#;
        let req = test::TestRequest::post()
            .uri("/graphql")
            .set_json(json!({ "query": query }))
            .to_request();
        let body: Value = test::call_and_read_body_json(&app, req).await;

        assert_eq!(body["errors"][0]["extensions"]["code"], "VALIDATION_ERROR");
    }

    #[actix_web::test]
    async fn test_graphiql_page() {
        let app = test::init_service(App::new().route("/graphiql", web::get().to(graphiql))).await;

        let req = test::TestRequest::get().uri("/graphiql").to_request();
        let resp = test::call_service(&app, req).await;

        assert!(resp.status().is_success());
    }
}
