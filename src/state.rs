//! Shared application state injected into all handlers.

use std::sync::Arc;

use crate::application::services::ShortenerService;

#[derive(Clone)]
pub struct AppState {
    pub shortener: Arc<ShortenerService>,
}

impl AppState {
    pub fn new(shortener: Arc<ShortenerService>) -> Self {
        Self { shortener }
    }
}
