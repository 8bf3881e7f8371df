use super::*;

// =============================================================
// ChatMessage
// =============================================================

#[test]
fn user_message_has_no_actions() {
    let msg = ChatMessage::user("hello", 10.0);
    assert_eq!(msg.sender, Sender::User);
    assert!(msg.is_user());
    assert_eq!(msg.content, "hello");
    assert!(msg.suggested_actions.is_empty());
}

#[test]
fn message_ids_are_unique() {
    let a = ChatMessage::user("same", 0.0);
    let b = ChatMessage::user("same", 0.0);
    assert_ne!(a.id, b.id);
}

#[test]
fn assistant_message_keeps_action_order() {
    let msg = ChatMessage::assistant(
        "pick one",
        vec![SuggestedAction::new("A", "a"), SuggestedAction::new("B", "b")],
        0.0,
    );
    let ids = msg.suggested_actions.iter().map(|a| a.action_id.as_str()).collect::<Vec<_>>();
    assert_eq!(ids, ["a", "b"]);
    assert!(!msg.is_user());
}

#[test]
fn message_serializes_with_lowercase_sender_and_omits_empty_actions() {
    let msg = ChatMessage::user("hi", 1.0);
    let value = serde_json::to_value(&msg).unwrap();
    assert_eq!(value["sender"], "user");
    assert!(value.get("suggested_actions").is_none());

    let parsed: ChatMessage = serde_json::from_value(value).unwrap();
    assert_eq!(parsed, msg);
}

// =============================================================
// Transcript
// =============================================================

#[test]
fn transcript_default_is_empty() {
    let transcript = Transcript::new();
    assert!(transcript.is_empty());
    assert_eq!(transcript.len(), 0);
    assert!(transcript.last().is_none());
}

#[test]
fn transcript_preserves_insertion_order() {
    let mut transcript = Transcript::new();
    transcript.push(ChatMessage::user("first", 3.0));
    transcript.push(ChatMessage::assistant("second", Vec::new(), 1.0));
    transcript.push(ChatMessage::user("third", 2.0));

    let contents = transcript.iter().map(|m| m.content.as_str()).collect::<Vec<_>>();
    assert_eq!(contents, ["first", "second", "third"]);
    assert_eq!(transcript.last().map(|m| m.content.as_str()), Some("third"));
}

#[test]
fn transcript_keeps_multiline_content_verbatim() {
    let mut transcript = Transcript::new();
    transcript.push(ChatMessage::assistant("line one\n• line two\n\nend", Vec::new(), 0.0));
    assert_eq!(transcript.messages()[0].content, "line one\n• line two\n\nend");
}
