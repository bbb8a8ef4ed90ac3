mod config;
mod errors;
mod handlers;
mod middleware;
mod models;
mod routes;
mod services;
mod state;

use actix_cors::Cors;
use actix_web::{web, App, HttpServer};
use std::io;

use config::AppConfig;
use estate_database::models::CreateAdminUserInput;
use estate_database::{Database, DatabaseConfig};
use middleware::auth::AuthMiddlewareFactory;
use state::AppState;

/// Create the first back-office user when ADMIN_EMAIL/ADMIN_PASSWORD are
/// set and no account with that email exists yet.
async fn bootstrap_admin(state: &AppState) {
    let (Some(email), Some(password)) = (
        state.config.admin_email.clone(),
        state.config.admin_password.clone(),
    ) else {
        return;
    };

    match state.repos.admin_users().find_by_email(&email).await {
        Ok(Some(_)) => {}
        Ok(None) => {
            let hash = match bcrypt::hash(&password, bcrypt::DEFAULT_COST) {
                Ok(hash) => hash,
                Err(e) => {
                    log::error!("Failed to hash bootstrap admin password: {}", e);
                    return;
                }
            };
            let input = CreateAdminUserInput {
                email: email.clone(),
                password_hash: hash,
                name: "Administrator".to_string(),
            };
            match state.repos.admin_users().create(&input).await {
                Ok(_) => log::info!("Bootstrap admin user created: {}", email),
                Err(e) => log::error!("Failed to create bootstrap admin: {:#}", e),
            }
        }
        Err(e) => log::error!("Bootstrap admin lookup failed: {:#}", e),
    }
}

#[actix_web::main]
async fn main() -> io::Result<()> {
    env_logger::init_from_env(env_logger::Env::default().default_filter_or("info"));

    log::info!("Starting Estate Backend Service...");

    // Load configuration from environment
    let config = AppConfig::from_env();
    let port = config.backend_port;

    log::info!("Environment mode: {}", config.env_mode);
    log::info!("Binding to port: {}", port);

    // Database setup
    log::info!("Connecting to PostgreSQL database...");
    let db_config = DatabaseConfig::new(config.database_url.clone());
    let db = Database::new(&db_config)
        .await
        .map_err(|e| io::Error::new(io::ErrorKind::Other, e.to_string()))?;
    log::info!("✅ Database connection established");

    db.migrate()
        .await
        .map_err(|e| io::Error::new(io::ErrorKind::Other, e.to_string()))?;
    log::info!("✅ Database migrations applied");

    // Initialize application state
    let app_state = AppState::new(db, config.clone());
    bootstrap_admin(&app_state).await;
    let state_data = web::Data::new(app_state);

    let auth_secret = config.jwt_secret.clone();
    let frontend_origin = config.frontend_origin.clone();

    // Start HTTP server
    log::info!("Starting HTTP server on 0.0.0.0:{}", port);

    HttpServer::new(move || {
        App::new()
            .app_data(state_data.clone())
            // CORS middleware
            .wrap(
                Cors::default()
                    .allowed_origin(&frontend_origin)
                    .allowed_methods(vec!["GET", "POST", "PUT", "PATCH", "DELETE", "OPTIONS"])
                    .allowed_headers(vec!["Content-Type", "Authorization"])
                    .supports_credentials()
                    .max_age(3600),
            )
            // Authentication middleware (public paths pass through)
            .wrap(AuthMiddlewareFactory::new(auth_secret.clone()))
            // Configure all routes
            .configure(routes::configure_routes)
    })
    .bind(("0.0.0.0", port))?
    .run()
    .await
}
