use super::*;

// =============================================================
// Request serialization
// =============================================================

#[test]
fn request_includes_system_instruction_and_config() {
    let body = build_generate_request(
        Some("You are a support assistant."),
        &[Message::user("hello")],
    );
    let json = serde_json::to_value(&body).unwrap();
    assert_eq!(
        json["systemInstruction"]["parts"][0]["text"],
        "You are a support assistant."
    );
    assert_eq!(json["contents"][0]["role"], "user");
    assert_eq!(json["contents"][0]["parts"][0]["text"], "hello");
    assert!((json["generationConfig"]["temperature"].as_f64().unwrap() - 0.2).abs() < 1e-9);
}

#[test]
fn request_omits_absent_system_instruction() {
    let body = build_generate_request(None, &[Message::user("hi")]);
    let json = serde_json::to_value(&body).unwrap();
    assert!(json.get("systemInstruction").is_none());
}

#[test]
fn request_preserves_message_order_and_roles() {
    let body = build_generate_request(
        None,
        &[
            Message::user("first"),
            Message::model("second"),
            Message::user("third"),
        ],
    );
    let json = serde_json::to_value(&body).unwrap();
    let contents = json["contents"].as_array().unwrap();
    assert_eq!(contents.len(), 3);
    assert_eq!(contents[1]["role"], "model");
    assert_eq!(contents[2]["parts"][0]["text"], "third");
}

// =============================================================
// Response parsing
// =============================================================

#[test]
fn parse_joins_candidate_text_parts() {
    let raw = r#"{"candidates":[{"content":{"role":"model","parts":[{"text":"Hello"},{"text":" there"}]}}]}"#;
    assert_eq!(parse_generate_response(raw).unwrap(), "Hello there");
}

#[test]
fn parse_empty_candidates_is_an_error() {
    let err = parse_generate_response(r#"{"candidates":[]}"#).unwrap_err();
    assert!(matches!(err, LlmError::ApiParse(_)));
}

#[test]
fn parse_invalid_json_is_an_error() {
    let err = parse_generate_response("not json").unwrap_err();
    assert!(matches!(err, LlmError::ApiParse(_)));
}

#[test]
fn parse_candidate_without_text_is_an_error() {
    let err =
        parse_generate_response(r#"{"candidates":[{"content":{"role":"model","parts":[]}}]}"#)
            .unwrap_err();
    assert!(matches!(err, LlmError::ApiParse(_)));
}
