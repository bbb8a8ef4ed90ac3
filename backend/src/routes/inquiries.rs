use actix_web::web;

use crate::handlers::inquiries;

pub fn configure_inquiry_routes(cfg: &mut web::ServiceConfig) {
    cfg.route("/inquiries", web::post().to(inquiries::create_inquiry));
}
