use std::sync::Arc;

use crate::{config::AppConfig, services::trips::TripStore};

#[derive(Clone)]
pub struct AppState {
    pub config: AppConfig,
    pub trips: Arc<dyn TripStore>,
}

impl AppState {
    pub fn new(config: AppConfig, trips: Arc<dyn TripStore>) -> Self {
        Self { config, trips }
    }
}
