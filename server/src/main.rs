mod faq;
mod followup;
mod llm;
mod retrieval;
mod routes;
mod services;
mod state;
mod tfidf;

use std::path::Path;
use std::sync::Arc;

use crate::llm::LlmChat;

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt::init();

    let port: u16 = std::env::var("PORT")
        .unwrap_or_else(|_| "8000".into())
        .parse()
        .expect("invalid PORT");
    let faq_file = std::env::var("FAQ_FILE").unwrap_or_else(|_| "server/seed/faq.json".into());
    let static_dir = std::env::var("STATIC_DIR").unwrap_or_else(|_| "client/dist".into());

    let entries = faq::load_faq(Path::new(&faq_file)).expect("FAQ corpus load failed");
    tracing::info!(count = entries.len(), file = %faq_file, "FAQ corpus loaded");
    let retriever = retrieval::FaqRetriever::fit(entries);

    // Initialize LLM client (non-fatal: canned answers if config missing).
    let llm: Option<Arc<dyn LlmChat>> = match llm::LlmClient::from_env() {
        Ok(client) => {
            tracing::info!(model = client.model(), "LLM client initialized");
            Some(Arc::new(client))
        }
        Err(e) => {
            tracing::warn!(error = %e, "LLM client not configured — canned answers only");
            None
        }
    };

    let state = state::AppState::new(retriever, llm);
    let app = routes::app(state, &static_dir);

    let listener = tokio::net::TcpListener::bind(format!("0.0.0.0:{port}"))
        .await
        .expect("failed to bind");

    tracing::info!(%port, "faqdesk listening");
    axum::serve(listener, app).await.expect("server failed");
}
