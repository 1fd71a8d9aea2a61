use crate::storage::{MemStorage, Storage};
use std::sync::Arc;

#[derive(Clone)]
pub struct AppState {
    pub storage: Arc<dyn Storage>,
}

impl AppState {
    /// Fresh in-memory store, one per process.
    pub fn init() -> Self {
        Self::with_storage(Arc::new(MemStorage::new()))
    }

    pub fn with_storage(storage: Arc<dyn Storage>) -> Self {
        Self { storage }
    }

    #[cfg(test)]
    pub fn fake() -> Self {
        Self::init()
    }
}
