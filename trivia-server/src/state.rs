//! Application state shared across handlers

use std::sync::Arc;

use crate::db::TriviaStore;

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    store: Arc<dyn TriviaStore>,
}

impl AppState {
    pub fn new(store: Arc<dyn TriviaStore>) -> Self {
        Self { store }
    }

    pub fn store(&self) -> &dyn TriviaStore {
        self.store.as_ref()
    }
}
