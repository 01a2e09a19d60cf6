use std::sync::Arc;

use crate::firestore::DocumentStore;
use crate::llm_client::TextGenerator;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    /// Generation-service seam. Production: `GeminiClient`.
    pub generator: Arc<dyn TextGenerator>,
    /// Document-store seam. Production: `FirestoreClient`.
    pub store: Arc<dyn DocumentStore>,
}
