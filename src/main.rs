mod api;
mod config;
mod middleware;
mod models;
mod services;
mod store;
mod utils;

use actix_web::{middleware::Logger, web, App, HttpServer};
use dotenv::dotenv;
use std::sync::Arc;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::config::{AppConfig, MEMORY_DB_PATH};
use crate::store::{Datastore, JsonFileStore, MemoryStore, Store};

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    // Load environment variables
    dotenv().ok();

    // Initialize logger
    env_logger::init_from_env(env_logger::Env::new().default_filter_or("info"));

    let config = AppConfig::from_env();

    log::info!("🚀 Starting BuddyUp backend...");
    log::info!("📂 Store: {}", config.db_path);
    log::info!("🌍 Allowed origin: {}", config.allowed_origin);

    let backend: Arc<dyn Store> = if config.db_path == MEMORY_DB_PATH {
        log::warn!("⚠️  Using an in-memory store, nothing will be persisted");
        Arc::new(MemoryStore::new())
    } else {
        Arc::new(JsonFileStore::new(&config.db_path))
    };
    let db = Datastore::new(backend);

    // Surface a corrupted store at startup instead of on the first request
    if let Err(e) = db.read().await {
        log::error!("💥 Store at {} is unusable: {}", config.db_path, e);
    }

    let db_data = web::Data::new(db);
    let config_data = web::Data::new(config.clone());
    let openapi = api::swagger::ApiDoc::openapi();

    log::info!("🌐 BuddyUp backend running on http://{}:{}", config.host, config.port);
    log::info!("📚 Swagger UI available at: http://{}:{}/swagger-ui/", config.host, config.port);

    let allowed_origin = config.allowed_origin.clone();

    HttpServer::new(move || {
        App::new()
            .app_data(db_data.clone())
            .app_data(config_data.clone())
            .wrap(middleware::CorsHeaders::new(&allowed_origin))
            .wrap(Logger::default())
            .service(
                SwaggerUi::new("/swagger-ui/{_:.*}")
                    .url("/api-docs/openapi.json", openapi.clone())
            )
            .configure(api::configure)
    })
    .bind((config.host.as_str(), config.port))?
    .run()
    .await
}
