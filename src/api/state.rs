use std::sync::Arc;

use crate::catalog::Catalog;
use crate::services::MetadataFetcher;

/// Shared application state
///
/// Everything here is read-only after startup, so handlers clone cheap
/// `Arc` handles instead of coordinating through locks.
#[derive(Clone)]
pub struct AppState {
    pub catalog: Arc<Catalog>,
    pub metadata: Arc<dyn MetadataFetcher>,
}

impl AppState {
    pub fn new(catalog: Arc<Catalog>, metadata: Arc<dyn MetadataFetcher>) -> Self {
        Self { catalog, metadata }
    }
}
