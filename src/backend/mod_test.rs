use super::*;

#[test]
fn chat_request_serializes_message_field() {
    let body = serde_json::to_value(ChatRequest { message: "What is Flexhack?" }).unwrap();
    assert_eq!(body, serde_json::json!({ "message": "What is Flexhack?" }));
}

#[test]
fn parse_chat_reply_extracts_response() {
    let body = serde_json::json!({ "response": "A hackathon." }).to_string();
    assert_eq!(parse_chat_reply(&body).unwrap(), "A hackathon.");
}

#[test]
fn parse_chat_reply_ignores_extra_fields() {
    let body = serde_json::json!({ "response": "ok", "confidence": 0.9 }).to_string();
    assert_eq!(parse_chat_reply(&body).unwrap(), "ok");
}

#[test]
fn parse_chat_reply_missing_field_errors() {
    let body = serde_json::json!({ "reply": "wrong key" }).to_string();
    assert!(matches!(parse_chat_reply(&body), Err(BackendError::Parse(_))));
}

#[test]
fn parse_chat_reply_non_string_errors() {
    let body = serde_json::json!({ "response": 42 }).to_string();
    assert!(matches!(parse_chat_reply(&body), Err(BackendError::Parse(_))));
}

#[test]
fn parse_chat_reply_not_json_errors() {
    assert!(matches!(parse_chat_reply("<html>oops</html>"), Err(BackendError::Parse(_))));
}

#[test]
fn teach_request_uses_response_key() {
    let body = serde_json::to_value(TeachRequest { question: "q", response: "a" }).unwrap();
    assert_eq!(body, serde_json::json!({ "question": "q", "response": "a" }));
}

#[test]
fn parse_teach_ack_success() {
    let body = serde_json::json!({ "status": "success", "message": "Question added and model retrained." }).to_string();
    let ack = parse_teach_ack(&body).unwrap();
    assert_eq!(ack.message, "Question added and model retrained.");
}

#[test]
fn parse_teach_ack_error_status_is_rejected() {
    let body = serde_json::json!({ "status": "error", "message": "Question and response are required." }).to_string();
    let err = parse_teach_ack(&body).unwrap_err();
    assert!(matches!(err, BackendError::Rejected(ref m) if m.contains("required")));
}

#[test]
fn status_error_display_names_code() {
    let err = BackendError::Status { status: 503, body: String::new() };
    assert_eq!(err.to_string(), "backend returned status 503");
}

#[test]
fn status_error_display_includes_body() {
    let err = BackendError::Status { status: 500, body: "Traceback: KeyError 'message'\n".into() };
    assert_eq!(err.to_string(), "backend returned status 500: Traceback: KeyError 'message'");
}

#[test]
fn status_error_display_truncates_long_body() {
    let err = BackendError::Status { status: 502, body: "x".repeat(BODY_EXCERPT_CHARS + 50) };
    let shown = err.to_string();
    assert!(shown.ends_with("..."));
    assert_eq!(shown.len(), "backend returned status 502: ".len() + BODY_EXCERPT_CHARS + 3);
}

#[test]
fn status_error_display_flattens_control_characters() {
    let err = BackendError::Status { status: 400, body: "bad\x1b[2Jrequest".into() };
    assert!(!err.to_string().contains('\x1b'));
}
