pub mod admin_properties;
pub mod auth;
pub mod facilities;
pub mod health;
pub mod inquiries;
pub mod media;
pub mod properties;
