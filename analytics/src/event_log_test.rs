use super::*;
use crate::event::names;

#[test]
fn new_log_is_empty() {
    let log = EventLog::new();
    assert!(log.is_empty());
    assert_eq!(log.len(), 0);
}

#[test]
fn push_returns_stored_event() {
    let mut log = EventLog::new();
    let stored = log.push(Event::new(names::PAGE_VIEW, 3));
    assert_eq!(stored.name, "page_view");
    assert_eq!(stored.timestamp, 3);
    assert_eq!(log.len(), 1);
}

#[test]
fn preserves_append_order() {
    let mut log = EventLog::new();
    log.push(Event::new(names::PAGE_VIEW, 0));
    log.push(Event::new(names::SCROLL_DEPTH, 5));
    log.push(Event::new(names::SECTION_VIEWED, 5));
    let order: Vec<&str> = log.iter().map(|event| event.name.as_str()).collect();
    assert_eq!(order, vec!["page_view", "scroll_depth", "section_viewed"]);
}

#[test]
fn iter_supports_filtering_by_name() {
    let mut log = EventLog::new();
    log.push(Event::new(names::TIME_MILESTONE, 30_000).with("seconds", 30));
    log.push(Event::new(names::SCROLL_DEPTH, 31_000).with("depth", 25));
    log.push(Event::new(names::TIME_MILESTONE, 60_000).with("seconds", 60));
    assert_eq!(log.iter().filter(|event| event.name == names::TIME_MILESTONE).count(), 2);
    assert_eq!(log.iter().filter(|event| event.name == names::SESSION_END).count(), 0);
}
