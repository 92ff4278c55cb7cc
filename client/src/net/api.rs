//! REST helper for the `/chat` endpoint.
//!
//! Browser (csr): real HTTP call via `gloo-net`. Native builds get a stub
//! error so the crate compiles (and its state tests run) off-wasm.
//!
//! ERROR HANDLING
//! ==============
//! HTTP-level failure, transport failure, and parse failure all collapse
//! into `Err(String)`; callers render one fixed apology either way.
//! Diagnostic detail goes to the browser console only.

#![allow(clippy::unused_async)]

use protocol::{ChatRequest, ChatResponse, HistoryTurn};

/// POST `{ message, history }` to `/chat` and parse the response.
///
/// # Errors
///
/// Returns a diagnostic string on any transport, status, or parse failure;
/// the detail is already logged to the console when this returns.
pub async fn send_chat(message: &str, history: &[HistoryTurn]) -> Result<ChatResponse, String> {
    #[cfg(feature = "csr")]
    {
        let body = ChatRequest { message: message.to_owned(), history: history.to_vec() };
        let response = gloo_net::http::Request::post("/chat")
            .json(&body)
            .map_err(|e| e.to_string())?
            .send()
            .await
            .map_err(|e| {
                log::error!("chat request failed: {e}");
                e.to_string()
            })?;

        if !response.ok() {
            let status = response.status();
            // Body is diagnostic only; it is never shown to the user.
            let text = response.text().await.unwrap_or_default();
            log::error!("chat request returned status {status}: {text}");
            return Err(format!("status {status}"));
        }

        response.json::<ChatResponse>().await.map_err(|e| {
            log::error!("chat response parse failed: {e}");
            e.to_string()
        })
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = (message, history);
        Err("not available outside the browser".to_owned())
    }
}
