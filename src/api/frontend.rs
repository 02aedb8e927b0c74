use actix_web::{web, HttpRequest, HttpResponse};
use std::fs;
use std::path::PathBuf;

/// Directory holding the built frontend, resolved once at startup.
#[derive(Clone)]
pub struct PublicDir(pub PathBuf);

/// Catch-all GET handler: every unmatched route serves the frontend entry
/// point, leaving routing to the client-side app. Must be registered last.
pub async fn spa_fallback(public: web::Data<PublicDir>, req: HttpRequest) -> HttpResponse {
    log::info!("📄 GET {} - serving frontend entry point", req.path());

    let index = public.0.join("index.html");
    match fs::read(&index) {
        Ok(content) => HttpResponse::Ok()
            .content_type("text/html; charset=utf-8")
            .body(content),
        Err(e) => {
            log::warn!("❌ Frontend entry point unavailable ({}): {}", index.display(), e);
            HttpResponse::NotFound().json(serde_json::json!({
                "success": false,
                "error": "Not found"
            }))
        }
    }
}
