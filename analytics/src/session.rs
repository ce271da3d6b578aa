//! The session analytics record.
//!
//! A [`Session`] lives for one page load. It owns the event log, the scroll
//! high-water mark, the viewed-section set, and the sinks that mirror events
//! out of the page. [`Session::track`] is the single write path into the log;
//! the `record_*` methods apply each tracker's deduplication rules and call
//! it only when an event is due.
//!
//! Clock readings are passed in as epoch milliseconds so the host decides
//! what "now" means and tests can drive time explicitly.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use serde::Serialize;
use serde_json::{Map, Value, json};

use crate::event::{Event, names};
use crate::event_log::EventLog;
use crate::milestones::{elapsed_ms, elapsed_secs};
use crate::scroll::{ScrollDepth, ScrollMetrics};
use crate::sections::{SectionsViewed, Visibility};
use crate::sink::EventSink;

/// Referrer reported for visits with no referring document.
pub const DIRECT_REFERRER: &str = "direct";

pub struct Session {
    started_at_ms: f64,
    max_scroll_depth: ScrollDepth,
    sections_viewed: SectionsViewed,
    log: EventLog,
    sinks: Vec<Box<dyn EventSink>>,
    ended: bool,
}

/// Read-only copy of the session, as exposed to external inspection.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionSnapshot {
    pub session_start: f64,
    pub max_scroll_depth: ScrollDepth,
    pub sections_viewed: Vec<String>,
    pub events: Vec<Event>,
}

impl Session {
    #[must_use]
    pub fn new(started_at_ms: f64) -> Self {
        Self {
            started_at_ms,
            max_scroll_depth: ScrollDepth::ZERO,
            sections_viewed: SectionsViewed::new(),
            log: EventLog::new(),
            sinks: Vec::new(),
            ended: false,
        }
    }

    /// Register a sink that receives every subsequently tracked event.
    pub fn add_sink(&mut self, sink: impl EventSink + 'static) {
        self.sinks.push(Box::new(sink));
    }

    // --- Write path ---

    /// Append an event stamped with the time since session start, then
    /// mirror it to every sink.
    pub fn track(&mut self, name: &str, fields: Map<String, Value>, now_ms: f64) -> &Event {
        let timestamp = elapsed_ms(self.started_at_ms, now_ms);
        let event = self.log.push(Event::new(name, timestamp).with_fields(fields));
        for sink in &mut self.sinks {
            sink.deliver(event);
        }
        event
    }

    /// Emit `page_view`. An empty referrer is reported as `"direct"`.
    pub fn record_page_view(&mut self, referrer: &str, path: &str, now_ms: f64) -> &Event {
        let referrer = if referrer.is_empty() { DIRECT_REFERRER } else { referrer };
        self.track(names::PAGE_VIEW, fields([("referrer", json!(referrer)), ("path", json!(path))]), now_ms)
    }

    /// Emit `experience_expanded` for a card that just opened.
    pub fn record_card_expanded(&mut self, title: &str, now_ms: f64) -> &Event {
        self.track(names::EXPERIENCE_EXPANDED, fields([("title", json!(title))]), now_ms)
    }

    /// Raise the scroll high-water mark. Emits `scroll_depth` only when the
    /// current bucket is strictly deeper than any recorded before.
    pub fn record_scroll(&mut self, metrics: ScrollMetrics, now_ms: f64) -> Option<&Event> {
        let depth = metrics.milestone()?;
        if depth <= self.max_scroll_depth {
            return None;
        }
        self.max_scroll_depth = depth;
        Some(self.track(names::SCROLL_DEPTH, fields([("depth", json!(depth))]), now_ms))
    }

    /// Mark a section viewed. Emits `section_viewed` once per section.
    pub fn record_visibility(&mut self, visibility: Visibility<'_>, now_ms: f64) -> Option<&Event> {
        if !visibility.counts_as_viewed() || !self.sections_viewed.insert(visibility.section_id) {
            return None;
        }
        Some(self.track(names::SECTION_VIEWED, fields([("section", json!(visibility.section_id))]), now_ms))
    }

    /// Emit `time_milestone` for a fired timer.
    pub fn record_time_milestone(&mut self, seconds: u32, now_ms: f64) -> &Event {
        self.track(names::TIME_MILESTONE, fields([("seconds", json!(seconds))]), now_ms)
    }

    /// Emit the terminal `session_end` event. Only the first call records;
    /// later calls return `None`.
    pub fn end(&mut self, now_ms: f64) -> Option<&Event> {
        if self.ended {
            return None;
        }
        self.ended = true;
        let payload = fields([
            ("duration", json!(elapsed_secs(self.started_at_ms, now_ms))),
            ("maxScrollDepth", json!(self.max_scroll_depth)),
            ("sectionsViewed", json!(self.sections_viewed.to_vec())),
        ]);
        Some(self.track(names::SESSION_END, payload, now_ms))
    }

    // --- Queries ---

    #[must_use]
    pub fn started_at_ms(&self) -> f64 {
        self.started_at_ms
    }

    #[must_use]
    pub fn max_scroll_depth(&self) -> ScrollDepth {
        self.max_scroll_depth
    }

    #[must_use]
    pub fn sections_viewed(&self) -> &SectionsViewed {
        &self.sections_viewed
    }

    #[must_use]
    pub fn events(&self) -> &EventLog {
        &self.log
    }

    #[must_use]
    pub fn is_ended(&self) -> bool {
        self.ended
    }

    #[must_use]
    pub fn snapshot(&self) -> SessionSnapshot {
        SessionSnapshot {
            session_start: self.started_at_ms,
            max_scroll_depth: self.max_scroll_depth,
            sections_viewed: self.sections_viewed.to_vec(),
            events: self.log.as_slice().to_vec(),
        }
    }
}

impl std::fmt::Debug for Session {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Session")
            .field("started_at_ms", &self.started_at_ms)
            .field("max_scroll_depth", &self.max_scroll_depth)
            .field("sections_viewed", &self.sections_viewed)
            .field("events", &self.log.len())
            .field("sinks", &self.sinks.len())
            .field("ended", &self.ended)
            .finish()
    }
}

fn fields<const N: usize>(entries: [(&str, Value); N]) -> Map<String, Value> {
    entries.into_iter().map(|(key, value)| (key.to_owned(), value)).collect()
}
