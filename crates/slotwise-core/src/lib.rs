//! # slotwise-core
//!
//! Single-day meeting slot computation over minute-of-day intervals.
//!
//! Given a set of calendar events (each with a time range and attendee list)
//! and a meeting request (duration, mandatory attendees, optional attendees),
//! [`query`] computes every interval within the day where the meeting could
//! be scheduled without conflicting with any existing event. When optional
//! attendees make the request unsatisfiable, they are dropped entirely and
//! the query falls back to mandatory attendees alone.
//!
//! The whole crate is pure and synchronous: no I/O, no clocks, no shared
//! state. Callers build the value types, call [`query`], and consume the
//! returned ranges; concurrent calls need no coordination.
//!
//! ## Quick start
//!
//! ```rust
//! use std::collections::HashSet;
//! use slotwise_core::{query, Event, MeetingRequest, TimeRange};
//!
//! let events = vec![Event {
//!     name: "Morning sync".into(),
//!     when: TimeRange::from_start_end(60, 120, false).unwrap(),
//!     attendees: HashSet::from(["ana".to_string()]),
//! }];
//! let request = MeetingRequest {
//!     name: "Review".into(),
//!     duration_minutes: 30,
//!     mandatory_attendees: HashSet::from(["ana".to_string()]),
//!     optional_attendees: HashSet::new(),
//! };
//!
//! let slots = query(&events, &request);
//! assert_eq!(slots[0], TimeRange::from_start_end(0, 60, false).unwrap());
//! assert_eq!(slots[1], TimeRange::from_start_end(120, TimeRange::END_OF_DAY, true).unwrap());
//! ```
//!
//! ## Modules
//!
//! - [`range`] — `TimeRange`, the minute-of-day interval value type
//! - [`event`] — `Event` and `MeetingRequest` value types
//! - [`scheduler`] — `query` and the busy-range merge
//! - [`error`] — construction-time validation errors

pub mod error;
pub mod event;
pub mod range;
pub mod scheduler;

pub use error::SlotError;
pub use event::{Event, MeetingRequest};
pub use range::TimeRange;
pub use scheduler::{merge_ranges, query};
