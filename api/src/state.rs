use common::config::ServerConfig;
use feedback::FeedbackEngine;
use std::sync::Arc;

/// Shared, read-only state handed to every handler.
#[derive(Debug, Clone)]
pub struct AppState {
    engine: FeedbackEngine,
    config: Arc<ServerConfig>,
}

impl AppState {
    pub fn new(engine: FeedbackEngine, config: ServerConfig) -> Self {
        Self {
            engine,
            config: Arc::new(config),
        }
    }

    pub fn engine(&self) -> &FeedbackEngine {
        &self.engine
    }

    pub fn config(&self) -> &ServerConfig {
        &self.config
    }
}
