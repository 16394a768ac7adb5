use std::sync::Arc;

use crate::auth::session::SessionStore;
use crate::auth::AuthProvider;
use crate::config::Config;
use crate::extract::DocumentExtractor;
use crate::llm_client::TextGenerator;
use crate::store::RecordStore;

/// Shared application state injected into all route handlers via Axum
/// extractors. Every external collaborator sits behind a trait so the
/// whole surface can run against in-memory fakes in tests.
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<dyn RecordStore>,
    pub auth: Arc<dyn AuthProvider>,
    pub llm: Arc<dyn TextGenerator>,
    pub extractor: Arc<dyn DocumentExtractor>,
    /// Per-process sessions; the only cross-request mutable state.
    pub sessions: Arc<SessionStore>,
    pub config: Config,
}
