use std::sync::Arc;

use crate::{config::Config, error::AppResult, services::Recommender};

/// Shared application state
///
/// Read-only after startup; handlers never need a lock.
#[derive(Clone)]
pub struct AppState {
    pub recommender: Arc<Recommender>,
}

impl AppState {
    pub fn new(recommender: Recommender) -> Self {
        Self {
            recommender: Arc::new(recommender),
        }
    }

    pub fn from_config(config: &Config) -> AppResult<Self> {
        Ok(Self::new(Recommender::from_config(config)?))
    }
}
