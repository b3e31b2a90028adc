pub mod auth;
pub mod health;
pub mod profile;
pub mod swagger;

use actix_web::{error::InternalError, web, HttpResponse};

use crate::models::ErrorResponse;

/// JSON body limits and the 400 shape for bodies that fail to deserialize
pub fn json_config() -> web::JsonConfig {
    web::JsonConfig::default()
        .limit(64 * 1024)
        .error_handler(|err, _req| {
            log::warn!("❌ Rejected request body: {}", err);
            let response = HttpResponse::BadRequest().json(ErrorResponse {
                error: "Invalid JSON body".to_string(),
            });
            InternalError::from_response(err, response).into()
        })
}

/// Registers the BuddyUp endpoints
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.app_data(json_config())
        .route("/health", web::get().to(health::health_check))
        .service(
            web::scope("/api")
                .route("/signup", web::post().to(auth::signup))
                .route("/login", web::post().to(auth::login))
                .route("/profile", web::post().to(profile::save_profile)),
        );
}
