use actix_cors::Cors;
use actix_web::{middleware::Logger, web, App, HttpServer};

use kids_planet::{
    app_state::AppState, config::Config, graphql::create_schema, handlers,
    middleware::RequestIdMiddleware,
};

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    dotenvy::dotenv().ok();
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let config = Config::from_env();
    if std::env::var("APP_ENV").is_ok_and(|env| env == "production") {
        config
            .validate_for_production()
            .map_err(|e| std::io::Error::new(std::io::ErrorKind::InvalidInput, e.to_string()))?;
    } else if !config.has_api_key() {
        log::warn!("OPENAI_API_KEY is not set; story generation requests will fail");
    }

    let host = config.web_server_host.clone();
    let port = config.web_server_port;
    let state = AppState::new(config);
    let schema = create_schema(state.clone());

    log::info!("starting HTTP server on http://{}:{}", host, port);
    log::info!("GraphiQL playground: http://{}:{}/graphiql", host, port);

    HttpServer::new(move || {
        let cors = Cors::default()
            .allow_any_origin()
            .allowed_methods(vec!["GET", "POST"])
            .allow_any_header()
            .max_age(3600);

        App::new()
            .app_data(web::Data::new(state.clone()))
            .app_data(web::Data::new(schema.clone()))
            .wrap(cors)
            .wrap(RequestIdMiddleware)
            .wrap(Logger::default())
            .service(handlers::health_check)
            .service(handlers::story_form)
            .service(handlers::submit_story)
            .service(handlers::generate_story_v1)
            .service(handlers::generate_story_v2)
            .route("/graphql", web::post().to(handlers::graphql))
            .route("/graphiql", web::get().to(handlers::graphiql))
    })
    .bind((host.as_str(), port))?
    .run()
    .await
}
