use super::*;

// =============================================================
// ChatRequest
// =============================================================

#[test]
fn request_history_defaults_to_empty() {
    let req: ChatRequest = serde_json::from_str(r#"{"message":"hello"}"#).unwrap();
    assert_eq!(req.message, "hello");
    assert!(req.history.is_empty());
}

#[test]
fn request_carries_history_turns() {
    let req: ChatRequest = serde_json::from_str(
        r#"{"message":"more","history":[{"role":"user","content":"hi"},{"role":"assistant","content":"hello"}]}"#,
    )
    .unwrap();
    assert_eq!(req.history.len(), 2);
    assert_eq!(req.history[0], HistoryTurn::new("user", "hi"));
    assert_eq!(req.history[1].role, "assistant");
}

#[test]
fn history_turn_content_defaults_to_empty() {
    let turn: HistoryTurn = serde_json::from_str(r#"{"role":"Matched FAQ"}"#).unwrap();
    assert_eq!(turn.role, "Matched FAQ");
    assert!(turn.content.is_empty());
}

// =============================================================
// ChatResponse
// =============================================================

#[test]
fn response_sources_and_url_are_optional() {
    let resp: ChatResponse = serde_json::from_str(
        r#"{"answer":"sorry","memory_used":false,"history":[]}"#,
    )
    .unwrap();
    assert!(resp.sources.is_empty());
    assert!(resp.url.is_none());
}

#[test]
fn response_omits_absent_url_on_serialize() {
    let resp = ChatResponse {
        answer: "hi".into(),
        sources: vec![],
        url: None,
        memory_used: false,
        history: vec![],
    };
    let json = serde_json::to_value(&resp).unwrap();
    assert!(json.get("url").is_none());
}

#[test]
fn response_round_trips_full_shape() {
    let resp: ChatResponse = serde_json::from_str(
        r#"{"answer":"Hi there","memory_used":true,"sources":["doc1"],"url":"http://x/doc1","history":[{"role":"user","content":"Hello"}]}"#,
    )
    .unwrap();
    assert_eq!(resp.answer, "Hi there");
    assert!(resp.memory_used);
    assert_eq!(resp.sources, vec!["doc1".to_owned()]);
    assert_eq!(resp.url.as_deref(), Some("http://x/doc1"));
    assert_eq!(resp.history.len(), 1);
}
