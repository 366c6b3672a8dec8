use super::signature;
use super::*;
use remora_core::event::InboundEvent;

fn test_channel() -> LineChannel {
    LineChannel::new(LineConfig {
        enabled: true,
        channel_access_token: "token".to_string(),
        channel_secret: "test-secret".to_string(),
    })
}

#[test]
fn test_signature_roundtrip() {
    let channel = test_channel();
    let body = br#"{"events":[]}"#;
    let sig = signature::sign(b"test-secret", body);
    assert!(channel.verify_signature(body, &sig));
}

#[test]
fn test_signature_rejects_wrong_secret() {
    let channel = test_channel();
    let body = br#"{"events":[]}"#;
    let sig = signature::sign(b"other-secret", body);
    assert!(!channel.verify_signature(body, &sig));
}

#[test]
fn test_signature_rejects_tampered_body() {
    let channel = test_channel();
    let sig = signature::sign(b"test-secret", br#"{"events":[]}"#);
    assert!(!channel.verify_signature(br#"{"events":[{}]}"#, &sig));
}

#[test]
fn test_signature_rejects_garbage_header() {
    let channel = test_channel();
    assert!(!channel.verify_signature(b"body", "not base64!!!"));
    assert!(!channel.verify_signature(b"body", ""));
}

#[test]
fn test_parse_group_text_message() {
    let channel = test_channel();
    let body = br#"{
        "destination": "xxx",
        "events": [{
            "type": "message",
            "replyToken": "rtok",
            "timestamp": 1700000000000,
            "source": {"type": "group", "groupId": "G1", "userId": "U1"},
            "message": {"id": "1", "type": "text", "text": "REMIND 2030-01-01 09:00 standup"}
        }]
    }"#;
    let events = channel.parse_events(body).unwrap();
    assert_eq!(events.len(), 1);
    match &events[0] {
        InboundEvent::Text(msg) => {
            assert_eq!(msg.conversation.as_deref(), Some("G1"));
            assert_eq!(msg.sender_id, "U1");
            assert_eq!(msg.reply_token, "rtok");
            assert_eq!(msg.text, "REMIND 2030-01-01 09:00 standup");
        }
        other => panic!("expected text event, got {other:?}"),
    }
}

#[test]
fn test_parse_direct_message_has_no_conversation() {
    let channel = test_channel();
    let body = br#"{
        "events": [{
            "type": "message",
            "replyToken": "rtok",
            "source": {"type": "user", "userId": "U1"},
            "message": {"id": "1", "type": "text", "text": "hello"}
        }]
    }"#;
    let events = channel.parse_events(body).unwrap();
    match &events[0] {
        InboundEvent::Text(msg) => assert!(msg.conversation.is_none()),
        other => panic!("expected text event, got {other:?}"),
    }
}

#[test]
fn test_parse_join_event() {
    let channel = test_channel();
    let body = br#"{
        "events": [{
            "type": "join",
            "replyToken": "rtok",
            "source": {"type": "group", "groupId": "G9"}
        }]
    }"#;
    let events = channel.parse_events(body).unwrap();
    match &events[0] {
        InboundEvent::Join(join) => assert_eq!(join.conversation, "G9"),
        other => panic!("expected join event, got {other:?}"),
    }
}

#[test]
fn test_parse_unsupported_events_become_other() {
    let channel = test_channel();
    let body = br#"{
        "events": [
            {"type": "leave", "source": {"type": "group", "groupId": "G1"}},
            {"type": "message", "replyToken": "r",
             "source": {"type": "group", "groupId": "G1", "userId": "U1"},
             "message": {"id": "1", "type": "sticker"}}
        ]
    }"#;
    let events = channel.parse_events(body).unwrap();
    assert_eq!(events.len(), 2);
    assert!(matches!(events[0], InboundEvent::Other));
    assert!(matches!(events[1], InboundEvent::Other));
}

#[test]
fn test_parse_rejects_invalid_json() {
    let channel = test_channel();
    assert!(channel.parse_events(b"not json").is_err());
}

#[test]
fn test_parse_empty_events() {
    let channel = test_channel();
    let events = channel.parse_events(br#"{"events": []}"#).unwrap();
    assert!(events.is_empty());
}
