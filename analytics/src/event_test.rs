use serde_json::json;

use super::*;

#[test]
fn new_event_has_no_fields() {
    let event = Event::new(names::PAGE_VIEW, 0);
    assert_eq!(event.name, "page_view");
    assert_eq!(event.timestamp, 0);
    assert!(event.fields.is_empty());
}

#[test]
fn with_attaches_payload_fields() {
    let event = Event::new(names::SCROLL_DEPTH, 1200).with("depth", 50);
    assert_eq!(event.field("depth"), Some(&json!(50)));
}

#[test]
fn with_ignores_reserved_keys() {
    let event = Event::new(names::TIME_MILESTONE, 30_000)
        .with("name", "spoofed")
        .with("timestamp", 1)
        .with("seconds", 30);
    assert_eq!(event.name, "time_milestone");
    assert_eq!(event.timestamp, 30_000);
    assert_eq!(event.fields.len(), 1);
}

#[test]
fn with_fields_merges_map_and_skips_reserved() {
    let mut fields = Map::new();
    fields.insert("title".to_owned(), json!("Engineer"));
    fields.insert("name".to_owned(), json!("other"));
    let event = Event::new(names::EXPERIENCE_EXPANDED, 10).with_fields(fields);
    assert_eq!(event.field("title"), Some(&json!("Engineer")));
    assert_eq!(event.field("name"), None);
}

#[test]
fn serializes_fields_flat_beside_envelope() {
    let event = Event::new(names::SECTION_VIEWED, 42).with("section", "projects");
    let value = serde_json::to_value(&event).expect("event should serialize");
    assert_eq!(value, json!({ "name": "section_viewed", "timestamp": 42, "section": "projects" }));
}

#[test]
fn to_json_is_the_beacon_payload() {
    let event = Event::new(names::SESSION_END, 95_000)
        .with("duration", 95)
        .with("sectionsViewed", json!(["about", "work"]));
    let raw = event.to_json().expect("event should encode");
    let payload: serde_json::Value = serde_json::from_str(&raw).expect("payload should be JSON");
    assert_eq!(
        payload,
        json!({ "name": "session_end", "timestamp": 95_000, "duration": 95, "sectionsViewed": ["about", "work"] })
    );
}
