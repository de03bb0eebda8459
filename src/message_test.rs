use super::*;

#[test]
fn role_serializes_lowercase() {
    let json = serde_json::to_value(Message::user("hi")).unwrap();
    assert_eq!(json, serde_json::json!({ "text": "hi", "role": "user" }));

    let json = serde_json::to_value(Message::bot("yo")).unwrap();
    assert_eq!(json["role"], "bot");
}

#[test]
fn fallback_is_bot_apology() {
    let msg = Message::fallback();
    assert_eq!(msg.role, Role::Bot);
    assert_eq!(msg.text, FALLBACK_REPLY);
}
