use actix_web::{web, HttpResponse, Result};

use crate::state::AppState;

pub async fn health_check() -> Result<HttpResponse> {
    Ok(HttpResponse::Ok().json(serde_json::json!({
        "status": "healthy",
        "service": "estate-backend"
    })))
}

pub async fn readiness_check(state: web::Data<AppState>) -> Result<HttpResponse> {
    match sqlx::query("SELECT 1").execute(state.db.pool()).await {
        Ok(_) => Ok(HttpResponse::Ok().json(serde_json::json!({
            "status": "ready",
            "service": "estate-backend"
        }))),
        Err(e) => {
            log::error!("Readiness check failed: {}", e);
            Ok(HttpResponse::ServiceUnavailable().json(serde_json::json!({
                "status": "not ready",
                "service": "estate-backend"
            })))
        }
    }
}
