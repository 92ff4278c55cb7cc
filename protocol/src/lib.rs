//! Shared wire model for the `/chat` HTTP contract.
//!
//! This crate owns the request/response shapes used by both `server` and
//! `client`. The conversation history is carried as role-tagged turns; only
//! the server assigns meaning to roles, the client echoes the list back
//! verbatim on the next request.

use serde::{Deserialize, Serialize};

#[cfg(test)]
#[path = "lib_test.rs"]
mod lib_test;

/// One entry in the server-defined conversation history.
///
/// Besides `user` and `assistant`, the server records bookkeeping turns
/// (`Edited user`, `Matched FAQ`) that clients pass through untouched.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HistoryTurn {
    pub role: String,
    #[serde(default)]
    pub content: String,
}

impl HistoryTurn {
    #[must_use]
    pub fn new(role: impl Into<String>, content: impl Into<String>) -> Self {
        Self { role: role.into(), content: content.into() }
    }
}

/// Body of `POST /chat`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatRequest {
    pub message: String,
    /// History exactly as returned by the previous response; empty on the
    /// first turn of a session.
    #[serde(default)]
    pub history: Vec<HistoryTurn>,
}

/// Successful `/chat` response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatResponse {
    pub answer: String,
    /// Citation strings grounding the answer; empty when nothing matched.
    #[serde(default)]
    pub sources: Vec<String>,
    /// Link target for the sources, when the matched FAQ carries one.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    pub memory_used: bool,
    /// Updated history the client must echo on its next request.
    pub history: Vec<HistoryTurn>,
}
