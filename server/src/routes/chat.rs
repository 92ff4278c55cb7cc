//! `POST /chat` — one conversation turn.

use axum::Json;
use axum::extract::State;
use protocol::{ChatRequest, ChatResponse};
use tracing::info;

use crate::services;
use crate::state::AppState;

#[cfg(test)]
#[path = "chat_test.rs"]
mod chat_test;

/// Handle one chat turn. Pipeline failures degrade to canned answers, so a
/// well-formed request always gets a 200.
pub async fn chat(State(state): State<AppState>, Json(request): Json<ChatRequest>) -> Json<ChatResponse> {
    info!(
        message_chars = request.message.chars().count(),
        history_turns = request.history.len(),
        "chat turn"
    );
    let llm = state.llm.as_deref();
    Json(services::chat::run_chat_turn(&state.retriever, llm, request).await)
}
