use std::sync::Arc;

use crate::api::ApiClient;
use crate::config::Config;
use crate::services::Services;
use crate::session::SessionStore;

#[derive(Clone)]
pub struct AppState {
    pub config: Arc<Config>,
    pub services: Services,
    pub sessions: SessionStore,
}

impl AppState {
    pub fn new(config: Config, api_client: ApiClient) -> Self {
        Self {
            config: Arc::new(config),
            services: Services::new(api_client),
            sessions: SessionStore::new(),
        }
    }
}
