use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    info(
        title = "BuddyUp API",
        version = "1.0.0",
        description = "Account signup/login and role + skills profiles for BuddyUp.\n\nNo tokens are issued: clients keep the `userId` returned by signup or login and send it with profile updates."
    ),
    paths(
        crate::api::auth::signup,
        crate::api::auth::login,
        crate::api::profile::save_profile,
        crate::api::health::health_check,
    ),
    components(
        schemas(
            crate::models::SignupRequest,
            crate::models::LoginRequest,
            crate::models::AccountResponse,
            crate::models::ProfileRequest,
            crate::models::MessageResponse,
            crate::models::ErrorResponse,
            crate::api::health::HealthResponse,
        )
    ),
    tags(
        (name = "Auth", description = "Account creation and credential checks."),
        (name = "Profile", description = "Role and skills profile, one per user, replaced on every save."),
        (name = "Health", description = "Liveness check."),
    )
)]
pub struct ApiDoc;
