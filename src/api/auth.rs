use actix_web::{web, HttpResponse, ResponseError};
use crate::database::JsonStore;
use crate::services::auth_service;
use crate::services::auth_service::{LoginRequest, LoginResponse, MessageResponse, SignupRequest};

#[utoipa::path(
    post,
    path = "/api/signup",
    tag = "Auth",
    request_body = SignupRequest,
    responses(
        (status = 201, description = "Account created", body = MessageResponse),
        (status = 400, description = "Email or pseudo already in use")
    )
)]
pub async fn signup(
    store: web::Data<JsonStore>,
    request: web::Json<SignupRequest>,
) -> HttpResponse {
    log::info!("📝 POST /api/signup - email: {}, pseudo: {}", request.email, request.pseudo);

    match auth_service::signup(&store, &request) {
        Ok(response) => {
            log::info!("✅ Signup successful: {}", request.email);
            HttpResponse::Created().json(response)
        }
        Err(e) => {
            log::warn!("❌ Signup failed: {} - {}", request.email, e);
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
        (status = 200, description = "Login successful", body = LoginResponse),
        (status = 401, description = "Invalid credentials")
    )
)]
pub async fn login(
    store: web::Data<JsonStore>,
    request: web::Json<LoginRequest>,
) -> HttpResponse {
    log::info!("🔐 POST /api/login - email: {}", request.email);

    match auth_service::login(&store, &request) {
        Ok(response) => {
            log::info!("✅ Login successful: {}", request.email);
            HttpResponse::Ok().json(response)
        }
        Err(e) => {
            log::warn!("❌ Login failed: {} - {}", request.email, e);
            e.error_response()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::{http::StatusCode, test, App};

    fn temp_store() -> (tempfile::TempDir, JsonStore) {
        let dir = tempfile::tempdir().unwrap();
        let store = JsonStore::new(dir.path());
        store.ensure_files().unwrap();
        (dir, store)
    }

    macro_rules! auth_app {
        ($store:expr) => {
            test::init_service(
                App::new()
                    .app_data(web::Data::new($store))
                    .route("/api/signup", web::post().to(signup))
                    .route("/api/login", web::post().to(login)),
            )
            .await
        };
    }

    #[actix_web::test]
    async fn signup_then_duplicate_then_login() {
        let (_dir, store) = temp_store();
        let app = auth_app!(store);

        // Fresh signup
        let req = test::TestRequest::post()
            .uri("/api/signup")
            .set_json(serde_json::json!({
                "email": "a@x.com", "pseudo": "alice", "password": "p1"
            }))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::CREATED);

        // Same email, different pseudo: duplicate email wins
        let req = test::TestRequest::post()
            .uri("/api/signup")
            .set_json(serde_json::json!({
                "email": "a@x.com", "pseudo": "bob", "password": "p2"
            }))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
        let body: serde_json::Value = test::read_body_json(resp).await;
        assert_eq!(body["success"], false);
        assert_eq!(body["error"], "This email is already in use");

        // Login with the original credentials
        let req = test::TestRequest::post()
            .uri("/api/login")
            .set_json(serde_json::json!({ "email": "a@x.com", "password": "p1" }))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::OK);
        let body: serde_json::Value = test::read_body_json(resp).await;
        assert_eq!(body["user"]["email"], "a@x.com");
        assert_eq!(body["user"]["pseudo"], "alice");
        assert!(body["user"].get("password").is_none());
    }

    #[actix_web::test]
    async fn duplicate_pseudo_returns_bad_request() {
        let (_dir, store) = temp_store();
        let app = auth_app!(store);

        let req = test::TestRequest::post()
            .uri("/api/signup")
            .set_json(serde_json::json!({
                "email": "a@x.com", "pseudo": "alice", "password": "p1"
            }))
            .to_request();
        test::call_service(&app, req).await;

        let req = test::TestRequest::post()
            .uri("/api/signup")
            .set_json(serde_json::json!({
                "email": "b@x.com", "pseudo": "alice", "password": "p2"
            }))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
        let body: serde_json::Value = test::read_body_json(resp).await;
        assert_eq!(body["error"], "This pseudo is already in use");
    }

    #[actix_web::test]
    async fn login_with_bad_credentials_returns_unauthorized() {
        let (_dir, store) = temp_store();
        let app = auth_app!(store);

        let req = test::TestRequest::post()
            .uri("/api/login")
            .set_json(serde_json::json!({ "email": "ghost@x.com", "password": "p1" }))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
        let body: serde_json::Value = test::read_body_json(resp).await;
        assert_eq!(body["success"], false);
    }
}
