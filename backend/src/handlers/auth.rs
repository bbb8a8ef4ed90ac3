use actix_web::{web, HttpMessage, HttpRequest, HttpResponse, Result};
use bcrypt::verify;
use serde_json::json;
use validator::Validate;

use crate::errors::ServiceError;
use crate::models::auth::{AuthResponse, Claims, LoginRequest};
use crate::state::AppState;

pub async fn login(
    request: web::Json<LoginRequest>,
    state: web::Data<AppState>,
) -> Result<HttpResponse> {
    if let Err(validation_errors) = request.validate() {
        return Ok(HttpResponse::BadRequest().json(json!({
            "error": "Validation failed",
            "details": validation_errors
        })));
    }

    let user = match state.repos.admin_users().find_by_email(&request.email).await {
        Ok(user) => user,
        Err(e) => {
            log::error!("Admin lookup failed: {:#}", e);
            return Ok(HttpResponse::InternalServerError().json(json!({
                "error": "Login failed"
            })));
        }
    };

    let Some(user) = user else {
        return Ok(HttpResponse::Unauthorized().json(json!({
            "error": "Invalid credentials"
        })));
    };

    if !verify(&request.password, &user.password_hash).unwrap_or(false) {
        return Ok(HttpResponse::Unauthorized().json(json!({
            "error": "Invalid credentials"
        })));
    }

    let (token, expires_at) = match state.auth_service.issue_token(&user) {
        Ok(issued) => issued,
        Err(e) => {
            log::error!("Token issuance failed: {}", e);
            return Ok(HttpResponse::InternalServerError().json(json!({
                "error": "Failed to generate token"
            })));
        }
    };

    if let Err(e) = state.repos.admin_users().touch_last_login(&user.id).await {
        log::warn!("Failed to record last login: {:#}", e);
    }

    Ok(HttpResponse::Ok().json(AuthResponse {
        user: user.into(),
        token,
        expires_at,
    }))
}

/// Echo the claims the auth middleware attached to the request.
pub async fn me(req: HttpRequest) -> Result<HttpResponse, ServiceError> {
    let claims = req
        .extensions()
        .get::<Claims>()
        .cloned()
        .ok_or(ServiceError::Unauthorized)?;

    Ok(HttpResponse::Ok().json(json!({
        "id": claims.sub,
        "email": claims.email,
        "name": claims.name
    })))
}
