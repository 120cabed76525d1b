// src/web/state.rs
// Web server state management

use std::sync::Arc;

use crate::generation::{CannedChat, ChatResponder, ImageGenerator, PlaceholderImages};
use crate::persona::PersonaStore;

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    /// The single persona slot, created empty at startup
    pub personas: Arc<PersonaStore>,

    /// Chat reply capability
    pub chat: Arc<dyn ChatResponder>,

    /// Avatar and image capability
    pub images: Arc<dyn ImageGenerator>,
}

impl AppState {
    /// Create state with an empty store and the canned capabilities
    pub fn new() -> Self {
        Self::with_capabilities(Arc::new(CannedChat), Arc::new(PlaceholderImages))
    }

    /// Create state with specific chat and image backends
    pub fn with_capabilities(
        chat: Arc<dyn ChatResponder>,
        images: Arc<dyn ImageGenerator>,
    ) -> Self {
        Self {
            personas: Arc::new(PersonaStore::new()),
            chat,
            images,
        }
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}
