use actix_web::{web, HttpResponse, ResponseError};
use crate::database::JsonStore;
use crate::services::auth_service::MessageResponse;
use crate::services::bug_service;
use crate::services::bug_service::BugReportRequest;

#[utoipa::path(
    post,
    path = "/api/bug-report",
    tag = "Bugs",
    request_body = BugReportRequest,
    responses(
        (status = 201, description = "Bug report recorded", body = MessageResponse),
        (status = 400, description = "Missing user information")
    )
)]
pub async fn report_bug(
    store: web::Data<JsonStore>,
    request: web::Json<BugReportRequest>,
) -> HttpResponse {
    log::info!("🐛 POST /api/bug-report - category: {}, pseudo: {}", request.category, request.pseudo);

    match bug_service::report_bug(&store, &request) {
        Ok(response) => {
            log::info!("✅ Bug report recorded from {}", request.pseudo);
            HttpResponse::Created().json(response)
        }
        Err(e) => {
            log::warn!("❌ Bug report rejected: {}", e);
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

    macro_rules! bugs_app {
        ($store:expr) => {
            test::init_service(
                App::new()
                    .app_data(web::Data::new($store))
                    .route("/api/bug-report", web::post().to(report_bug)),
            )
            .await
        };
    }

    #[actix_web::test]
    async fn valid_report_is_created() {
        let (_dir, store) = temp_store();
        let verify = store.clone();
        let app = bugs_app!(store);

        let req = test::TestRequest::post()
            .uri("/api/bug-report")
            .set_json(serde_json::json!({
                "category": "ui",
                "description": "button misaligned",
                "email": "a@x.com",
                "pseudo": "alice"
            }))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::CREATED);

        let doc = verify.load_bugs().unwrap();
        assert_eq!(doc.bugs.len(), 1);
        assert_eq!(doc.bugs[0].status, "new");
    }

    #[actix_web::test]
    async fn report_without_reporter_fields_is_rejected() {
        let (_dir, store) = temp_store();
        let app = bugs_app!(store);

        // email and pseudo omitted entirely
        let req = test::TestRequest::post()
            .uri("/api/bug-report")
            .set_json(serde_json::json!({
                "category": "crash",
                "description": "boom"
            }))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
        let body: serde_json::Value = test::read_body_json(resp).await;
        assert_eq!(body["error"], "Missing user information");
    }

    #[actix_web::test]
    async fn report_with_empty_pseudo_is_rejected() {
        let (_dir, store) = temp_store();
        let app = bugs_app!(store);

        let req = test::TestRequest::post()
            .uri("/api/bug-report")
            .set_json(serde_json::json!({
                "category": "crash",
                "description": "boom",
                "email": "a@x.com",
                "pseudo": ""
            }))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    }
}
