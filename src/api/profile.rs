use actix_web::{web, HttpResponse, ResponseError};

use crate::models::{ErrorResponse, MessageResponse, ProfileRequest};
use crate::services::profile_service;
use crate::store::Datastore;

#[utoipa::path(
    post,
    path = "/api/profile",
    tag = "Profile",
    request_body = ProfileRequest,
    responses(
        (status = 200, description = "Profile saved", body = MessageResponse),
        (status = 400, description = "Missing fields or unknown user", body = ErrorResponse),
        (status = 500, description = "Server error", body = ErrorResponse)
    )
)]
pub async fn save_profile(
    db: web::Data<Datastore>,
    request: web::Json<ProfileRequest>,
) -> HttpResponse {
    let user_str = request
        .user_id
        .as_ref()
        .and_then(|id| id.as_str())
        .unwrap_or("N/A");
    log::info!("🧩 POST /api/profile - user: {}", user_str);

    match profile_service::save_profile(&db, &request).await {
        Ok(response) => HttpResponse::Ok().json(response),
        Err(e) if e.is_client_error() => {
            log::warn!("❌ Profile rejected: {} - {}", user_str, e);
            e.error_response()
        }
        Err(e) => {
            log::error!("💥 Profile save failed: {} - {}", user_str, e);
            e.error_response()
        }
    }
}
