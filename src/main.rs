mod api;
mod database;
mod models;
mod services;
mod utils;

use actix_cors::Cors;
use actix_web::{middleware::Logger, web, App, HttpServer};
use dotenv::dotenv;
use std::env;
use std::path::PathBuf;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    // Load environment variables
    dotenv().ok();

    // Initialize logger
    env_logger::init_from_env(env_logger::Env::new().default_filter_or("info"));

    // Get configuration from environment
    let host = env::var("HOST").unwrap_or_else(|_| "0.0.0.0".to_string());
    let port = env::var("PORT").unwrap_or_else(|_| "3000".to_string());
    let data_dir = env::var("DATA_DIR").unwrap_or_else(|_| "data".to_string());
    let public_dir = env::var("PUBLIC_DIR").unwrap_or_else(|_| "public".to_string());

    log::info!("🚀 Starting Bug Report Service...");
    log::info!("📂 Data directory: {}", data_dir);

    // Initialize the JSON-file datastore (creates empty documents if absent)
    let store = database::JsonStore::new(&data_dir);
    store
        .ensure_files()
        .expect("Failed to initialize datastore");

    let store_data = web::Data::new(store);
    let public_data = web::Data::new(api::frontend::PublicDir(PathBuf::from(public_dir)));

    log::info!("✅ Datastore ready");

    log::info!("🌐 Server starting on {}:{}", host, port);
    log::info!("📚 Swagger UI available at: http://{}:{}/swagger-ui/", host, port);
    log::info!("📄 OpenAPI spec at: http://{}:{}/api-docs/openapi.json", host, port);

    // Start HTTP server
    HttpServer::new(move || {
        // The API carries no cookies or tokens, so a permissive policy works
        let cors = Cors::permissive();

        // Generate OpenAPI specification
        let openapi = api::swagger::ApiDoc::openapi();

        App::new()
            .app_data(store_data.clone())
            .app_data(public_data.clone())
            .wrap(cors)
            .wrap(Logger::default())
            // Swagger UI
            .service(
                SwaggerUi::new("/swagger-ui/{_:.*}")
                    .url("/api-docs/openapi.json", openapi.clone())
            )
            // Health check
            .route("/health", web::get().to(api::health::health_check))
            // Core endpoints
            .service(
                web::scope("/api")
                    .route("/signup", web::post().to(api::auth::signup))
                    .route("/login", web::post().to(api::auth::login))
                    .route("/bug-report", web::post().to(api::bugs::report_bug))
            )
            // Frontend fallback (must stay last)
            .default_service(web::get().to(api::frontend::spa_fallback))
    })
    .bind(format!("{}:{}", host, port))?
    .run()
    .await
}
