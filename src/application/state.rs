// src/application/state.rs

use std::sync::Arc;

use crate::services::LivestockService;

/// Application state shared by every command.
/// Services are initialized in main.rs and passed here.
#[derive(Clone)]
pub struct AppState {
    pub livestock_service: Arc<LivestockService>,
}

impl AppState {
    pub fn new(livestock_service: Arc<LivestockService>) -> Self {
        Self { livestock_service }
    }
}
