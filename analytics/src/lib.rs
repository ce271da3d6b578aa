//! Session analytics model for the portfolio page.
//!
//! This crate is browser-agnostic: every input (clock readings, scroll
//! metrics, visibility entries) is passed in by the host, so the page's
//! instrumentation logic can be exercised in plain unit tests. The browser
//! crate owns the DOM wiring and feeds observations into a [`Session`].
//!
//! ## Module layout
//!
//! | Module | Role |
//! |--------|------|
//! | [`event`] | Event record and the catalogue of event names |
//! | [`event_log`] | Append-only, ordered event storage |
//! | [`sink`] | Best-effort delivery trait for mirrored events |
//! | [`scroll`] | Scroll metrics and 25% depth milestones |
//! | [`throttle`] | Leading-edge rate limiter for scroll signals |
//! | [`sections`] | Section visibility threshold and first-seen set |
//! | [`milestones`] | Time-on-page offsets and elapsed-time helpers |
//! | [`session`] | The session record tying everything together |

pub mod event;
pub mod event_log;
pub mod milestones;
pub mod scroll;
pub mod sections;
pub mod session;
pub mod sink;
pub mod throttle;

pub use event::Event;
pub use event_log::EventLog;
pub use scroll::{ScrollDepth, ScrollMetrics};
pub use sections::{SectionsViewed, Visibility};
pub use session::{Session, SessionSnapshot};
pub use sink::EventSink;
pub use throttle::Throttle;
