use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Bug Report Service API",
        version = "1.0.0",
        description = "API documentation for the bug report backend.\n\n**Features:**\n- User signup and login (email/pseudo uniqueness, plaintext comparison)\n- Bug report submission\n- Health monitoring",
    ),
    paths(
        // Auth endpoints
        crate::api::auth::signup,
        crate::api::auth::login,

        // Bug reports
        crate::api::bugs::report_bug,

        // Health
        crate::api::health::health_check,
    ),
    components(
        schemas(
            // Auth
            crate::services::auth_service::SignupRequest,
            crate::services::auth_service::LoginRequest,
            crate::services::auth_service::LoginResponse,
            crate::services::auth_service::MessageResponse,
            crate::services::auth_service::UserInfo,

            // Bug reports
            crate::services::bug_service::BugReportRequest,
            crate::models::bug::BugReport,
            crate::models::bug::ReportedBy,

            // Health
            crate::api::health::HealthResponse,
        )
    ),
    tags(
        (name = "Auth", description = "Signup and login endpoints. Email and pseudo are unique across accounts."),
        (name = "Bugs", description = "Bug report submission. Reports carry the submitting user's email and pseudo."),
        (name = "Health", description = "Health check endpoint for monitoring service status."),
    )
)]
pub struct ApiDoc;
