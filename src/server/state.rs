//! State shared by every request.

use std::sync::Arc;

use crate::data::QuestionStore;
use crate::ui::PageConfig;

/// Read-only after startup, so requests share it without locking.
pub type SharedState = Arc<ServerState>;

#[derive(Debug)]
pub struct ServerState {
    pub store: QuestionStore,
    pub page: PageConfig,
}

impl ServerState {
    pub fn new(store: QuestionStore, page: PageConfig) -> Self {
        Self { store, page }
    }

    pub fn shared(self) -> SharedState {
        Arc::new(self)
    }
}
