use crate::config::AppConfig;
use crate::services::auth_service::AuthService;
use estate_database::repositories::RepositoryManager;
use estate_database::Database;
use std::sync::Arc;

pub struct AppState {
    pub db: Database,
    pub repos: RepositoryManager,
    pub config: AppConfig,
    pub auth_service: Arc<AuthService>,
}

impl AppState {
    pub fn new(db: Database, config: AppConfig) -> Self {
        let repos = RepositoryManager::new(db.pool().clone());
        let auth_service = Arc::new(AuthService::new(
            config.jwt_secret.clone(),
            config.jwt_expiry_hours,
        ));

        Self {
            db,
            repos,
            config,
            auth_service,
        }
    }
}
