//! Shared application state.
//!
//! DESIGN
//! ======
//! `AppState` is injected into axum handlers via the `State` extractor.
//! The retriever is fitted once at startup and read-only afterwards; the
//! LLM is optional so the server runs (with canned answers) when no API
//! key is configured.

use std::sync::Arc;

use crate::llm::LlmChat;
use crate::retrieval::FaqRetriever;

/// Shared application state. Clone is required by axum; both fields are
/// Arc-wrapped.
#[derive(Clone)]
pub struct AppState {
    pub retriever: Arc<FaqRetriever>,
    pub llm: Option<Arc<dyn LlmChat>>,
}

impl AppState {
    #[must_use]
    pub fn new(retriever: FaqRetriever, llm: Option<Arc<dyn LlmChat>>) -> Self {
        Self { retriever: Arc::new(retriever), llm }
    }
}
