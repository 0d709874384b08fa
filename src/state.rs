use std::sync::Arc;

use crate::{config::Config, gateway::FlutterwaveGateway};

#[derive(Debug, Clone, axum::extract::FromRef)]
pub struct AppState {
    pub flw: FlutterwaveGateway,
    pub config: Arc<Config>,
}

impl AppState {
    pub fn new(config: Config) -> Self {
        let flw = FlutterwaveGateway::new(&config);
        Self {
            flw,
            config: Arc::new(config),
        }
    }
}
