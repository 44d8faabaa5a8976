use std::sync::Arc;

use crate::auth::TokenService;
use crate::config::AppConfig;
use crate::database::Database;

/// Everything a handler needs, built once at startup
#[derive(Clone)]
pub struct AppState {
    pub db: Database,
    pub tokens: Arc<TokenService>,
    pub config: Arc<AppConfig>,
}

impl AppState {
    pub fn new(db: Database, config: AppConfig) -> Self {
        let tokens = TokenService::from_config(&config.security);
        Self {
            db,
            tokens: Arc::new(tokens),
            config: Arc::new(config),
        }
    }
}
