use super::*;

fn response(answer: &str) -> ChatResponse {
    ChatResponse {
        answer: answer.to_owned(),
        sources: vec!["doc1".to_owned()],
        url: Some("http://x/doc1".to_owned()),
        memory_used: true,
        history: vec![
            HistoryTurn::new("user", "Hello"),
            HistoryTurn::new("assistant", answer),
        ],
    }
}

// =============================================================
// ChatState defaults
// =============================================================

#[test]
fn chat_state_default_is_idle_and_empty() {
    let state = ChatState::default();
    assert!(state.messages.is_empty());
    assert!(state.history.is_empty());
    assert!(!state.sending);
}

// =============================================================
// Exchange lifecycle
// =============================================================

#[test]
fn begin_exchange_appends_user_and_placeholder() {
    let mut state = ChatState::default();
    assert!(state.begin_exchange("Hello"));

    assert_eq!(state.messages.len(), 2);
    assert_eq!(state.messages[0].role, Role::User);
    assert_eq!(state.messages[0].content, "Hello");
    assert!(state.messages[1].is_placeholder());
    assert!(state.sending);
    assert!(state.history.is_empty());
}

#[test]
fn begin_exchange_rejects_blank_input() {
    let mut state = ChatState::default();
    assert!(!state.begin_exchange(""));
    assert!(!state.begin_exchange("   "));
    assert!(!state.begin_exchange(" \t\n"));

    // Nothing was appended and the session stayed idle.
    assert!(state.messages.is_empty());
    assert!(state.history.is_empty());
    assert!(!state.sending);
}

#[test]
fn begin_exchange_trims_the_user_entry() {
    let mut state = ChatState::default();
    assert!(state.begin_exchange("  Hello  "));
    assert_eq!(state.messages[0].content, "Hello");
}

#[test]
fn begin_exchange_rejects_a_second_send_while_in_flight() {
    let mut state = ChatState::default();
    assert!(state.begin_exchange("first"));
    assert!(!state.begin_exchange("second"));
    assert_eq!(state.messages.len(), 2);
    assert_eq!(state.messages[0].content, "first");
}

#[test]
fn placeholder_carries_no_metadata() {
    let mut state = ChatState::default();
    state.begin_exchange("Hello");

    let placeholder = &state.messages[1];
    assert!(!placeholder.memory_used);
    assert!(placeholder.sources.is_empty());
    assert!(!placeholder.shows_no_source_notice());
}

#[test]
fn complete_replaces_placeholder_and_adopts_history() {
    let mut state = ChatState::default();
    state.begin_exchange("Hello");
    state.complete(response("Hi there"));

    assert_eq!(state.messages.len(), 2);
    let answer = state.messages.last().unwrap();
    assert_eq!(answer.role, Role::Assistant);
    assert_eq!(answer.content, "Hi there");
    assert!(answer.memory_used);
    assert_eq!(answer.sources, vec!["doc1".to_owned()]);
    assert_eq!(answer.url.as_deref(), Some("http://x/doc1"));
    assert_eq!(state.history.len(), 2);
    assert!(!state.sending);
}

#[test]
fn each_successful_exchange_grows_display_by_two() {
    let mut state = ChatState::default();
    for i in 0..5 {
        state.begin_exchange(&format!("question {i}"));
        state.complete(response(&format!("answer {i}")));
    }
    assert_eq!(state.messages.len(), 10);
    // History tracks the latest server value, not the display list.
    assert_eq!(state.history.len(), 2);
}

#[test]
fn fail_substitutes_apology_and_keeps_history() {
    let mut state = ChatState::default();
    state.history = vec![HistoryTurn::new("user", "earlier")];
    state.begin_exchange("Hello");
    state.fail();

    assert_eq!(state.messages.len(), 2);
    let error = state.messages.last().unwrap();
    assert_eq!(error.content, ERROR_TEXT);
    assert!(error.is_error);
    assert!(!error.memory_used);
    assert!(error.sources.is_empty());
    assert!(!state.sending);
    // A failed exchange never touches the conversation history.
    assert_eq!(state.history, vec![HistoryTurn::new("user", "earlier")]);
}

#[test]
fn fail_without_placeholder_still_appends_error() {
    let mut state = ChatState::default();
    state.fail();
    assert_eq!(state.messages.len(), 1);
    assert!(state.messages[0].is_error);
}

// =============================================================
// Visible window
// =============================================================

#[test]
fn visible_window_never_exceeds_max() {
    let mut state = ChatState::default();
    for i in 0..12 {
        state.begin_exchange(&format!("q{i}"));
        state.complete(response(&format!("a{i}")));
    }
    assert_eq!(state.messages.len(), 24);
    let visible = state.visible();
    assert_eq!(visible.len(), MAX_VISIBLE);
    // The window ends with the latest message.
    assert_eq!(visible.last().unwrap().content, "a11");
}

#[test]
fn visible_window_shows_everything_when_short() {
    let mut state = ChatState::default();
    state.begin_exchange("only one");
    assert_eq!(state.visible().len(), 2);
}

// =============================================================
// Metadata rules
// =============================================================

#[test]
fn no_source_notice_applies_only_to_settled_sourceless_answers() {
    let mut state = ChatState::default();
    state.begin_exchange("Hello");
    state.complete(ChatResponse {
        answer: "An unsourced answer".to_owned(),
        sources: Vec::new(),
        url: None,
        memory_used: false,
        history: Vec::new(),
    });

    let user = &state.messages[0];
    let answer = &state.messages[1];
    assert!(!user.shows_no_source_notice());
    assert!(answer.shows_no_source_notice());
    assert!(!answer.memory_used);
}

#[test]
fn error_entry_never_shows_no_source_notice() {
    let mut state = ChatState::default();
    state.begin_exchange("Hello");
    state.fail();
    assert!(!state.messages.last().unwrap().shows_no_source_notice());
}

#[test]
fn sourced_answer_does_not_show_notice() {
    let mut state = ChatState::default();
    state.begin_exchange("Hello");
    state.complete(response("Hi there"));
    assert!(!state.messages.last().unwrap().shows_no_source_notice());
}
