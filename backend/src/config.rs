use std::env;

#[derive(Clone, Debug)]
pub struct AppConfig {
    // Server
    pub backend_port: u16,
    pub env_mode: String,

    // Database
    pub database_url: String,

    // Authentication
    pub jwt_secret: String,
    pub jwt_expiry_hours: i64,

    // CORS
    pub frontend_origin: String,

    // Admin bootstrap (optional; creates the first back-office user on startup)
    pub admin_email: Option<String>,
    pub admin_password: Option<String>,
}

impl AppConfig {
    pub fn from_env() -> Self {
        dotenv::dotenv().ok();

        Self {
            // Server
            backend_port: env::var("BACKEND_PORT")
                .unwrap_or_else(|_| "8000".to_string())
                .parse()
                .expect("BACKEND_PORT must be a valid port number"),
            env_mode: env::var("ENV_MODE").unwrap_or_else(|_| "development".to_string()),

            // Database
            database_url: env::var("DATABASE_URL").expect("DATABASE_URL must be set"),

            // Authentication
            jwt_secret: env::var("JWT_SECRET").expect("JWT_SECRET must be set"),
            jwt_expiry_hours: env::var("JWT_EXPIRY_HOURS")
                .unwrap_or_else(|_| "24".to_string())
                .parse()
                .unwrap_or(24),

            // CORS
            frontend_origin: env::var("FRONTEND_ORIGIN")
                .unwrap_or_else(|_| "http://localhost:3000".to_string()),

            // Admin bootstrap
            admin_email: env::var("ADMIN_EMAIL").ok(),
            admin_password: env::var("ADMIN_PASSWORD").ok(),
        }
    }
}
