//! Calendar events and meeting requests.
//!
//! Plain value structs created by the caller for a single query and discarded
//! afterward. The scheduler never mutates them and holds no state across
//! calls.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::range::TimeRange;

/// An existing calendar event occupying a contiguous time range.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Event {
    /// Human-readable title; not interpreted by the scheduler.
    pub name: String,
    /// When the event takes place.
    pub when: TimeRange,
    /// Everyone attending this event.
    pub attendees: HashSet<String>,
}

/// A request to schedule a new meeting.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MeetingRequest {
    /// Human-readable title; not interpreted by the scheduler.
    pub name: String,
    /// Required meeting length in minutes.
    pub duration_minutes: u32,
    /// Attendees whose availability is strictly required.
    pub mandatory_attendees: HashSet<String>,
    /// Attendees accommodated only if doing so still leaves at least one
    /// valid slot; otherwise dropped entirely for the query.
    #[serde(default)]
    pub optional_attendees: HashSet<String>,
}
