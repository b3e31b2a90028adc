use actix_web::{web, HttpResponse, ResponseError};

use crate::config::AppConfig;
use crate::models::{AccountResponse, ErrorResponse, LoginRequest, SignupRequest};
use crate::services::auth_service;
use crate::store::Datastore;

#[utoipa::path(
    post,
    path = "/api/signup",
    tag = "Auth",
    request_body = SignupRequest,
    responses(
        (status = 201, description = "User created", body = AccountResponse),
        (status = 400, description = "Missing fields or email already registered", body = ErrorResponse),
        (status = 500, description = "Server error", body = ErrorResponse)
    )
)]
pub async fn signup(
    db: web::Data<Datastore>,
    config: web::Data<AppConfig>,
    request: web::Json<SignupRequest>,
) -> HttpResponse {
    let email_str = request.email.as_deref().unwrap_or("N/A");
    log::info!("📝 POST /api/signup - email: {}", email_str);

    match auth_service::signup(&db, &request, config.bcrypt_cost).await {
        Ok(response) => HttpResponse::Created().json(response),
        Err(e) if e.is_client_error() => {
            log::warn!("❌ Signup rejected: {} - {}", email_str, e);
            e.error_response()
        }
        Err(e) => {
            log::error!("💥 Signup failed: {} - {}", email_str, e);
            e.error_response()
        }
    }
}

#[utoipa::path(
    post,
    path = "/api/login",
    tag = "Auth",
    request_body = LoginRequest,
    responses(
        (status = 200, description = "Login successful", body = AccountResponse),
        (status = 400, description = "Invalid email or password", body = ErrorResponse),
        (status = 500, description = "Server error", body = ErrorResponse)
    )
)]
pub async fn login(
    db: web::Data<Datastore>,
    config: web::Data<AppConfig>,
    request: web::Json<LoginRequest>,
) -> HttpResponse {
    let email_str = request.email.as_deref().unwrap_or("N/A");
    log::info!("🔐 POST /api/login - email: {}", email_str);

    match auth_service::login(&db, &request, config.bcrypt_cost).await {
        Ok(response) => {
            log::info!("✅ Login successful: {}", email_str);
            HttpResponse::Ok().json(response)
        }
        Err(e) if e.is_client_error() => {
            log::warn!("❌ Login failed: {}", email_str);
            e.error_response()
        }
        Err(e) => {
            log::error!("💥 Login error: {} - {}", email_str, e);
            e.error_response()
        }
    }
}
