use actix_web::{web, HttpResponse};
use serde::{Deserialize, Serialize};

use crate::store::Datastore;

/// Liveness plus a store check: a store that no longer loads is reported as 503
#[derive(Debug, Serialize, Deserialize, utoipa::ToSchema)]
pub struct HealthResponse {
    pub status: String,
    pub store: String,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub users: Option<usize>,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub profiles: Option<usize>,
    pub timestamp: i64,
}

#[utoipa::path(
    get,
    path = "/health",
    tag = "Health",
    responses(
        (status = 200, description = "Store loads", body = HealthResponse),
        (status = 503, description = "Store is unreadable or corrupt", body = HealthResponse)
    )
)]
pub async fn health_check(db: web::Data<Datastore>) -> HttpResponse {
    let timestamp = chrono::Utc::now().timestamp();

    match db.read().await {
        Ok(state) => HttpResponse::Ok().json(HealthResponse {
            status: "healthy".to_string(),
            store: "ok".to_string(),
            users: Some(state.users.len()),
            profiles: Some(state.profiles.len()),
            timestamp,
        }),
        Err(e) => {
            log::error!("💥 Health check: {}", e);
            HttpResponse::ServiceUnavailable().json(HealthResponse {
                status: "unhealthy".to_string(),
                store: "unavailable".to_string(),
                users: None,
                profiles: None,
                timestamp,
            })
        }
    }
}
