use actix_web::web;

use crate::handlers::properties;

pub fn configure_property_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/properties")
            .route("", web::get().to(properties::list_properties))
            .route("/{id}", web::get().to(properties::get_property)),
    );
}
