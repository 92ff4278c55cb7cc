//! Chat session state.
//!
//! DESIGN
//! ======
//! `ChatState` owns two independent lists: the server-defined conversation
//! `history` (echoed back verbatim on every request, replaced wholesale on
//! success) and the locally rendered display `messages` (which carry
//! UI-only metadata the server never sees). Display entries are immutable
//! once created; the only removal is popping the transient placeholder when
//! an exchange settles.

use protocol::{ChatResponse, HistoryTurn};

#[cfg(test)]
#[path = "chat_test.rs"]
mod chat_test;

/// Maximum number of message bubbles rendered in the transcript.
pub const MAX_VISIBLE: usize = 8;

/// Content of the transient assistant entry shown while a request is in
/// flight.
pub const PLACEHOLDER_TEXT: &str = "Thinking...";

/// Fixed apology shown when an exchange fails for any reason.
pub const ERROR_TEXT: &str = "Sorry, something went wrong. Please try again.";

/// Display role of a message bubble.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Role {
    User,
    Assistant,
}

/// One entry of the display list. Never mutated after creation.
#[derive(Clone, Debug, PartialEq)]
pub struct DisplayMessage {
    pub role: Role,
    pub content: String,
    pub memory_used: bool,
    pub sources: Vec<String>,
    pub url: Option<String>,
    pub is_error: bool,
}

impl DisplayMessage {
    fn user(content: &str) -> Self {
        Self {
            role: Role::User,
            content: content.to_owned(),
            memory_used: false,
            sources: Vec::new(),
            url: None,
            is_error: false,
        }
    }

    fn placeholder() -> Self {
        Self {
            role: Role::Assistant,
            content: PLACEHOLDER_TEXT.to_owned(),
            memory_used: false,
            sources: Vec::new(),
            url: None,
            is_error: false,
        }
    }

    fn error() -> Self {
        Self {
            role: Role::Assistant,
            content: ERROR_TEXT.to_owned(),
            memory_used: false,
            sources: Vec::new(),
            url: None,
            is_error: true,
        }
    }

    /// The transient "Thinking..." entry.
    #[must_use]
    pub fn is_placeholder(&self) -> bool {
        self.role == Role::Assistant && !self.is_error && self.content == PLACEHOLDER_TEXT
    }

    /// Whether the "No grounded source" notice applies: a settled,
    /// non-error assistant answer with no sources.
    #[must_use]
    pub fn shows_no_source_notice(&self) -> bool {
        self.role == Role::Assistant
            && self.sources.is_empty()
            && !self.is_error
            && !self.is_placeholder()
    }
}

/// The chat session: conversation history, display list, in-flight flag.
#[derive(Clone, Debug, Default)]
pub struct ChatState {
    /// History exactly as last returned by the server; opaque here.
    pub history: Vec<HistoryTurn>,
    /// Locally rendered messages, including transient and error entries.
    pub messages: Vec<DisplayMessage>,
    /// True while a request is in flight; disables the input controls.
    pub sending: bool,
}

impl ChatState {
    /// Start an exchange: append the user entry and the placeholder, mark
    /// the session as sending. The history is untouched until the server
    /// replies.
    ///
    /// Empty or whitespace-only input is a no-op, as is a call while a
    /// request is already in flight: nothing is appended and the caller
    /// must not issue a request. Returns whether the exchange started.
    pub fn begin_exchange(&mut self, text: &str) -> bool {
        let text = text.trim();
        if text.is_empty() || self.sending {
            return false;
        }
        self.messages.push(DisplayMessage::user(text));
        self.messages.push(DisplayMessage::placeholder());
        self.sending = true;
        true
    }

    /// Settle an exchange successfully: replace the placeholder with the
    /// answer and adopt the server's updated history verbatim.
    pub fn complete(&mut self, response: ChatResponse) {
        self.pop_placeholder();
        self.messages.push(DisplayMessage {
            role: Role::Assistant,
            content: response.answer,
            memory_used: response.memory_used,
            sources: response.sources,
            url: response.url,
            is_error: false,
        });
        self.history = response.history;
        self.sending = false;
    }

    /// Settle an exchange after any failure: replace the placeholder with
    /// the fixed apology. The history is left unchanged so the user can
    /// simply resubmit.
    pub fn fail(&mut self) {
        self.pop_placeholder();
        self.messages.push(DisplayMessage::error());
        self.sending = false;
    }

    /// The sliding window of messages to render.
    #[must_use]
    pub fn visible(&self) -> &[DisplayMessage] {
        let start = self.messages.len().saturating_sub(MAX_VISIBLE);
        &self.messages[start..]
    }

    fn pop_placeholder(&mut self) {
        if self.messages.last().is_some_and(DisplayMessage::is_placeholder) {
            self.messages.pop();
        }
    }
}
