use actix_web::{
    body::EitherBody,
    dev::{forward_ready, Service, ServiceRequest, ServiceResponse, Transform},
    Error as ActixError, HttpMessage, HttpResponse,
};
use futures::future::LocalBoxFuture;
use jsonwebtoken::{decode, DecodingKey, Validation};
use serde_json::json;
use std::future::{ready, Ready};
use std::rc::Rc;

use crate::models::auth::Claims;

/// Bearer-token guard for the back-office endpoints. Public paths pass
/// through untouched; everything else needs a valid HS256 token, whose
/// claims are inserted into the request extensions for the handlers.
#[derive(Clone)]
pub struct AuthMiddlewareFactory {
    jwt_secret: Rc<String>,
}

impl AuthMiddlewareFactory {
    pub fn new(jwt_secret: String) -> Self {
        Self {
            jwt_secret: Rc::new(jwt_secret),
        }
    }
}

impl<S, B> Transform<S, ServiceRequest> for AuthMiddlewareFactory
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = ActixError> + 'static,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<EitherBody<B>>;
    type Error = ActixError;
    type Transform = AuthMiddleware<S>;
    type InitError = ();
    type Future = Ready<Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        ready(Ok(AuthMiddleware {
            service: Rc::new(service),
            jwt_secret: Rc::clone(&self.jwt_secret),
        }))
    }
}

pub struct AuthMiddleware<S> {
    service: Rc<S>,
    jwt_secret: Rc<String>,
}

impl<S, B> Service<ServiceRequest> for AuthMiddleware<S>
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = ActixError> + 'static,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<EitherBody<B>>;
    type Error = ActixError;
    type Future = LocalBoxFuture<'static, Result<Self::Response, Self::Error>>;

    forward_ready!(service);

    fn call(&self, req: ServiceRequest) -> Self::Future {
        let service = Rc::clone(&self.service);
        let jwt_secret = Rc::clone(&self.jwt_secret);

        Box::pin(async move {
            if is_public_endpoint(req.path()) {
                let res = service.call(req).await?;
                return Ok(res.map_into_left_body());
            }

            let token = req
                .headers()
                .get("Authorization")
                .and_then(|h| h.to_str().ok())
                .and_then(|h| h.strip_prefix("Bearer "));

            match token {
                Some(token) => {
                    match decode::<Claims>(
                        token,
                        &DecodingKey::from_secret(jwt_secret.as_ref().as_bytes()),
                        &Validation::default(),
                    ) {
                        Ok(data) => {
                            req.extensions_mut().insert(data.claims);
                            let res = service.call(req).await?;
                            Ok(res.map_into_left_body())
                        }
                        Err(e) => {
                            log::warn!("JWT verification failed: {}", e);
                            Ok(req
                                .into_response(HttpResponse::Unauthorized().json(json!({
                                    "error": "Invalid or expired token"
                                })))
                                .map_into_right_body())
                        }
                    }
                }
                None => Ok(req
                    .into_response(HttpResponse::Unauthorized().json(json!({
                        "error": "Authentication required",
                        "message": "Please provide a valid Bearer token in the Authorization header"
                    })))
                    .map_into_right_body()),
            }
        })
    }
}

/// Paths the public site uses without credentials.
fn is_public_endpoint(path: &str) -> bool {
    path == "/health"
        || path == "/ready"
        || path == "/api/auth/login"
        || path == "/api/inquiries"
        || path.starts_with("/api/properties")
}

#[cfg(test)]
mod tests {
    use super::is_public_endpoint;

    #[test]
    fn listing_and_detail_paths_are_public() {
        assert!(is_public_endpoint("/api/properties"));
        assert!(is_public_endpoint(
            "/api/properties/550e8400-e29b-41d4-a716-446655440000"
        ));
        assert!(is_public_endpoint("/api/inquiries"));
        assert!(is_public_endpoint("/api/auth/login"));
        assert!(is_public_endpoint("/health"));
        assert!(is_public_endpoint("/ready"));
    }

    #[test]
    fn admin_paths_require_auth() {
        assert!(!is_public_endpoint("/api/admin/properties"));
        assert!(!is_public_endpoint("/api/admin/inquiries"));
        assert!(!is_public_endpoint("/api/auth/me"));
    }
}
