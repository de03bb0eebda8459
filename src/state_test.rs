use super::*;
use crate::message::Role;

// =============================================================
// ConversationStore
// =============================================================

#[test]
fn new_store_is_empty() {
    let store = ConversationStore::new();
    assert!(store.is_empty());
    assert_eq!(store.len(), 0);
    assert!(store.last().is_none());
}

#[test]
fn with_greeting_seeds_bot_line() {
    let store = ConversationStore::with_greeting();
    assert_eq!(store.snapshot(), vec![Message::bot(GREETING)]);
}

#[test]
fn append_preserves_order() {
    let store = ConversationStore::new();
    store.append(Message::user("one"));
    store.append(Message::bot("two"));
    store.append(Message::user("three"));

    let texts: Vec<_> = store.snapshot().into_iter().map(|m| m.text).collect();
    assert_eq!(texts, ["one", "two", "three"]);
    assert_eq!(store.last().map(|m| m.role), Some(Role::User));
}

#[test]
fn append_never_deduplicates() {
    let store = ConversationStore::new();
    store.append(Message::user("same"));
    store.append(Message::user("same"));
    assert_eq!(store.len(), 2);
}

#[test]
fn clones_share_the_same_log() {
    let store = ConversationStore::new();
    let other = store.clone();
    other.append(Message::bot("shared"));
    assert_eq!(store.len(), 1);
}

#[test]
fn snapshot_is_detached_from_later_appends() {
    let store = ConversationStore::new();
    store.append(Message::user("a"));
    let snap = store.snapshot();
    store.append(Message::user("b"));
    assert_eq!(snap.len(), 1);
}

#[tokio::test]
async fn subscribe_sees_length_after_append() {
    let store = ConversationStore::new();
    let mut rx = store.subscribe();
    assert_eq!(*rx.borrow(), 0);

    store.append(Message::user("hello"));
    rx.changed().await.unwrap();
    assert_eq!(*rx.borrow_and_update(), 1);
}

// =============================================================
// Tab
// =============================================================

#[test]
fn tab_defaults_to_flexhack() {
    assert_eq!(Tab::default(), Tab::Flexhack);
}

#[test]
fn tab_parse_is_case_insensitive() {
    assert_eq!(Tab::parse("gemini"), Some(Tab::Gemini));
    assert_eq!(Tab::parse(" FLEXERA "), Some(Tab::Flexera));
    assert_eq!(Tab::parse("nope"), None);
}

#[test]
fn tab_next_cycles() {
    assert_eq!(Tab::Flexhack.next(), Tab::Flexera);
    assert_eq!(Tab::Flexera.next(), Tab::Gemini);
    assert_eq!(Tab::Gemini.next(), Tab::Flexhack);
}
