//! Compute free meeting slots within a single day.
//!
//! Given a set of existing events and a meeting request, [`query`] returns
//! every maximal free interval long enough for the requested duration. The
//! computation is a pure three-step pipeline: filter events down to the ones
//! that conflict with the target attendee set, merge the resulting busy
//! ranges into a minimal sorted set, then walk the gaps between them.
//!
//! The pipeline runs at most twice per query — once over mandatory plus
//! optional attendees, and again over mandatory attendees alone when the
//! first pass leaves no slot. Optional attendees are a binary hint: either
//! everyone is accommodated or the optional set is dropped entirely.

use std::collections::HashSet;

use crate::event::{Event, MeetingRequest};
use crate::range::TimeRange;

/// Find all time ranges in which the requested meeting could be scheduled.
///
/// Returns maximal free intervals at least `duration_minutes` long, sorted
/// by start minute and pairwise disjoint. Degenerate inputs map to defined
/// outputs rather than errors:
///
/// - no attendees at all → the whole day is available;
/// - a duration longer than 23h59m can never fit → empty;
/// - a fully booked day → empty.
///
/// # Examples
///
/// ```
/// use std::collections::HashSet;
/// use slotwise_core::{query, Event, MeetingRequest, TimeRange};
///
/// let events = vec![Event {
///     name: "Standup".into(),
///     when: TimeRange::from_start_duration(540, 30).unwrap(),
///     attendees: HashSet::from(["alice".to_string()]),
/// }];
/// let request = MeetingRequest {
///     name: "Planning".into(),
///     duration_minutes: 60,
///     mandatory_attendees: HashSet::from(["alice".to_string()]),
///     optional_attendees: HashSet::new(),
/// };
///
/// let slots = query(&events, &request);
/// assert_eq!(slots.len(), 2);
/// assert_eq!(slots[0].end(), 540);
/// assert_eq!(slots[1].start(), 570);
/// ```
pub fn query(events: &[Event], request: &MeetingRequest) -> Vec<TimeRange> {
    // A meeting with no attendees can go anywhere.
    if request.mandatory_attendees.is_empty() && request.optional_attendees.is_empty() {
        return vec![TimeRange::WHOLE_DAY];
    }

    // Nothing longer than 23h59m fits in a day.
    if request.duration_minutes > u32::from(TimeRange::END_OF_DAY) {
        return Vec::new();
    }

    let everyone: HashSet<&str> = request
        .mandatory_attendees
        .iter()
        .chain(request.optional_attendees.iter())
        .map(String::as_str)
        .collect();
    let with_optional = availability(events, request.duration_minutes, &everyone);
    if !with_optional.is_empty() {
        return with_optional;
    }

    // Including optional attendees leaves no slot — drop them entirely and
    // retry with the mandatory set alone.
    let mandatory: HashSet<&str> = request
        .mandatory_attendees
        .iter()
        .map(String::as_str)
        .collect();
    availability(events, request.duration_minutes, &mandatory)
}

/// Free intervals for one attendee set: collect conflicting busy ranges,
/// merge them, then emit every gap at least `duration` minutes wide.
fn availability(events: &[Event], duration: u32, attendees: &HashSet<&str>) -> Vec<TimeRange> {
    let busy: Vec<TimeRange> = events
        .iter()
        .filter(|event| !is_disjoint(&event.attendees, attendees))
        .map(|event| event.when)
        .collect();

    if busy.is_empty() {
        return vec![TimeRange::WHOLE_DAY];
    }

    let merged = merge_ranges(&busy);

    // Walk the gaps between merged busy blocks. Signed arithmetic: the
    // cursor sits at 1440 after an all-day event, one past END_OF_DAY.
    let duration = i64::from(duration);
    let mut slots = Vec::new();
    let mut free_start = TimeRange::START_OF_DAY;
    for block in &merged {
        if i64::from(block.start()) - i64::from(free_start) >= duration {
            slots.push(TimeRange::from_checked_bounds(free_start, block.start()));
        }
        free_start = block.end();
    }
    if i64::from(TimeRange::END_OF_DAY) - i64::from(free_start) >= duration {
        // The last gap of the day closes at minute 1440, not 1439.
        slots.push(TimeRange::from_checked_bounds(
            free_start,
            TimeRange::MINUTES_PER_DAY,
        ));
    }
    slots
}

/// Merge overlapping or contained ranges into a minimal sorted disjoint set.
///
/// Sorts the input by the canonical range order, then sweeps left to right
/// with a stack of open intervals: a range disjoint from the top of the
/// stack opens a new interval, a contained range is discarded, and a partial
/// overlap extends the open interval. The sweep is only correct on sorted
/// input, which is why sorting happens here rather than at the call sites.
pub fn merge_ranges(ranges: &[TimeRange]) -> Vec<TimeRange> {
    let mut pending = ranges.to_vec();
    pending.sort();

    let mut merged: Vec<TimeRange> = Vec::new();
    for cur in pending {
        let Some(top) = merged.last_mut() else {
            merged.push(cur);
            continue;
        };
        if !top.overlaps(&cur) {
            merged.push(cur);
        } else if top.contains(&cur) {
            // Already covered by the open interval.
        } else {
            *top = top.merged_with(&cur);
        }
    }
    merged
}

/// Whether two attendee sets have no member in common.
fn is_disjoint(event_attendees: &HashSet<String>, attendees: &HashSet<&str>) -> bool {
    !event_attendees
        .iter()
        .any(|name| attendees.contains(name.as_str()))
}
