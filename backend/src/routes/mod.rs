pub mod admin;
pub mod auth;
pub mod inquiries;
pub mod properties;

use crate::handlers::health;
use actix_web::web;

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api")
            .configure(properties::configure_property_routes)
            .configure(inquiries::configure_inquiry_routes)
            .configure(auth::configure_auth_routes)
            .configure(admin::configure_admin_routes),
    )
    .route("/health", web::get().to(health::health_check))
    .route("/ready", web::get().to(health::readiness_check));
}
