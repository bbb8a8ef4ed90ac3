use actix_web::web;

use crate::handlers::{admin_properties, facilities, inquiries, media};

pub fn configure_admin_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/admin")
            .route("/properties", web::get().to(admin_properties::list_properties))
            .route("/properties", web::post().to(admin_properties::create_property))
            .route("/properties/{id}", web::put().to(admin_properties::update_property))
            .route("/properties/{id}", web::delete().to(admin_properties::delete_property))
            .route(
                "/properties/{id}/active",
                web::patch().to(admin_properties::set_property_active),
            )
            .route("/properties/{id}/media", web::post().to(media::add_media))
            .route("/media/reorder", web::put().to(media::reorder_media))
            .route("/media/{id}/feature", web::put().to(media::feature_media))
            .route("/media/{id}", web::delete().to(media::delete_media))
            .route(
                "/properties/{id}/facilities",
                web::post().to(facilities::add_facility),
            )
            .route("/facilities/{id}", web::delete().to(facilities::delete_facility))
            .route("/inquiries", web::get().to(inquiries::list_inquiries))
            .route(
                "/inquiries/{id}/status",
                web::patch().to(inquiries::update_inquiry_status),
            ),
    );
}
