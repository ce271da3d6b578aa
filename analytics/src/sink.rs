//! Best-effort delivery of tracked events.
//!
//! A sink receives each event after it has been appended to the session log.
//! Delivery has no return value: there is no acknowledgement, retry, or
//! ordering guarantee between sinks, and a sink that cannot deliver simply
//! drops the event.

use crate::event::Event;

/// Receiver for mirrored analytics events.
pub trait EventSink {
    fn deliver(&mut self, event: &Event);
}

impl<F> EventSink for F
where
    F: FnMut(&Event),
{
    fn deliver(&mut self, event: &Event) {
        self(event);
    }
}
