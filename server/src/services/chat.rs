//! Chat service — one request/response turn of the grounded FAQ assistant.
//!
//! DESIGN
//! ======
//! A turn runs: follow-up detection → optional query rewrite → FAQ
//! retrieval → answer generation → history bookkeeping. Every LLM failure
//! degrades to a deterministic answer built from the retrieved entry, so
//! the endpoint itself never fails a well-formed request.
//!
//! The history records four roles per turn: the raw `user` message, the
//! `Edited user` search query (or a marker when no rewrite happened), the
//! `Matched FAQ` outcome, and the final `assistant` answer. A fresh topic
//! resets the history to the current turn so stale context cannot bleed
//! into later retrievals.

use protocol::{ChatRequest, ChatResponse, HistoryTurn};
use tracing::warn;

use crate::faq::FaqEntry;
use crate::followup::is_follow_up;
use crate::llm::{LlmChat, LlmError, Message};
use crate::retrieval::FaqRetriever;

#[cfg(test)]
#[path = "chat_test.rs"]
mod chat_test;

/// Hard cap on stored history turns, to bound request size growth.
pub const MAX_HISTORY_LENGTH: usize = 20;

/// History entries kept when a fresh topic resets the conversation:
/// `user`, `Edited user`, `Matched FAQ` of the current turn.
const FRESH_TOPIC_KEEP: usize = 3;

/// Prior turns included as context when rewriting a follow-up.
const REWRITE_CONTEXT_TURNS: usize = 3;

const SYSTEM_PROMPT: &str = "You are a support assistant. \
    Answer using the provided FAQ content or the conversation history. \
    If the FAQ does not contain enough information, ask a clarifying question. \
    Always cite the source URL when answering.";

const NO_MATCH_ANSWER: &str = "I'm sorry, I'm not sure how to help with that. \
    Could you please rephrase your question or ask about a new topic?";

const NO_REWRITE_MARKER: &str = "No rewrite needed";

/// Run one chat turn and produce the response the client will render.
pub async fn run_chat_turn(
    retriever: &FaqRetriever,
    llm: Option<&dyn LlmChat>,
    request: ChatRequest,
) -> ChatResponse {
    let ChatRequest { message, mut history } = request;

    let follow_up = is_follow_up(&message, &history);
    // Memory only counts when prior context actually influenced this turn.
    let memory_used = !history.is_empty() && follow_up;

    history.push(HistoryTurn::new("user", &message));

    let search_query = if follow_up {
        let prior = &history[..history.len() - 1];
        let query = match llm {
            Some(client) => match rewrite_query(client, &message, prior).await {
                Ok(rewritten) => rewritten,
                Err(e) => {
                    warn!(error = %e, "query rewrite failed, searching with raw message");
                    message.clone()
                }
            },
            None => message.clone(),
        };
        history.push(HistoryTurn::new("Edited user", &query));
        query
    } else {
        history.push(HistoryTurn::new("Edited user", NO_REWRITE_MARKER));
        message.clone()
    };

    let (answer, sources, url) = match retriever.find_best_match(&search_query) {
        Some(entry) => {
            history.push(HistoryTurn::new(
                "Matched FAQ",
                format!("Found: {}", entry.question),
            ));

            let answer = match llm {
                Some(client) => {
                    let context = follow_up.then_some(history.as_slice());
                    let messages = build_answer_messages(&message, entry, context);
                    match client.chat(Some(SYSTEM_PROMPT), &messages).await {
                        Ok(text) => text,
                        Err(e) => {
                            warn!(error = %e, "answer generation failed, using fallback");
                            fallback_answer(entry)
                        }
                    }
                }
                None => mock_answer(entry),
            };

            if !follow_up {
                let keep_from = history.len().saturating_sub(FRESH_TOPIC_KEEP);
                history.drain(..keep_from);
            }

            let url = (!entry.url.is_empty()).then(|| entry.url.clone());
            (answer, vec![entry.question.clone()], url)
        }
        None => {
            history.push(HistoryTurn::new("Matched FAQ", "No relevant FAQ found."));
            (NO_MATCH_ANSWER.to_owned(), Vec::new(), None)
        }
    };

    history.push(HistoryTurn::new("assistant", &answer));

    if history.len() > MAX_HISTORY_LENGTH {
        let cut = history.len() - MAX_HISTORY_LENGTH;
        history.drain(..cut);
    }

    ChatResponse { answer, sources, url, memory_used, history }
}

// =============================================================================
// PROMPTS
// =============================================================================

/// Rewrite a follow-up question into a standalone search query using the
/// last few turns of history as context.
async fn rewrite_query(
    llm: &dyn LlmChat,
    user_input: &str,
    prior: &[HistoryTurn],
) -> Result<String, LlmError> {
    let context_start = prior.len().saturating_sub(REWRITE_CONTEXT_TURNS);
    let history_block = format_turns(&prior[context_start..]);

    let prompt = format!(
        "Rewrite the following follow-up question to be a standalone search query.\n\
         Include necessary context from the conversation history (e.g. replace \"it\" \
         with the specific topic).\n\
         Do NOT answer the question, just rewrite it for a search engine.\n\n\
         History:\n{history_block}\n\n\
         Follow-up Question: {user_input}\n\n\
         Standalone Query:"
    );

    let rewritten = llm.chat(None, &[Message::user(prompt)]).await?;
    Ok(rewritten.trim().to_owned())
}

/// Build the generation messages: optional conversation context, then the
/// FAQ content and the user question in a single user message.
fn build_answer_messages(
    user_message: &str,
    entry: &FaqEntry,
    context: Option<&[HistoryTurn]>,
) -> Vec<Message> {
    let mut messages = Vec::new();

    if let Some(turns) = context {
        messages.push(Message::user(format!(
            "Previous conversation context:\n{}",
            format_turns(turns)
        )));
        messages.push(Message::model(
            "I have reviewed the history. How can I help with the FAQ?",
        ));
    }

    let source_url = if entry.url.is_empty() { "N/A" } else { &entry.url };
    let context_block = format!(
        "FAQ TITLE: {}\nSECTION: {}\nCONTENT: {}\nSOURCE URL: {}",
        entry.question, entry.section, entry.answer, source_url
    );
    messages.push(Message::user(format!(
        "CONTEXT:\n{context_block}\n\nUSER QUESTION: {user_message}"
    )));

    messages
}

fn format_turns(turns: &[HistoryTurn]) -> String {
    turns
        .iter()
        .map(|t| format!("{}: {}", t.role, t.content))
        .collect::<Vec<_>>()
        .join("\n")
}

// =============================================================================
// CANNED ANSWERS
// =============================================================================

/// Conversational wrapper around the retrieved entry, used when no LLM is
/// configured.
fn mock_answer(entry: &FaqEntry) -> String {
    format!(
        "I found some information regarding \"{}\".\n{}\nIs there anything else you'd like to know about this topic?",
        entry.question, entry.answer
    )
}

/// Answer used when the LLM call fails after a successful retrieval.
fn fallback_answer(entry: &FaqEntry) -> String {
    format!(
        "I found a relevant FAQ, but I'm having trouble generating a conversational response right now.\n\n**Question:** {}\n**Answer:** {}",
        entry.question, entry.answer
    )
}
