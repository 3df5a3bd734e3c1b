//! Tests for the `TimeRange` value type: construction, validation,
//! overlap/containment semantics, and ordering.

use slotwise_core::{SlotError, TimeRange};

fn range(start: u16, end: u16) -> TimeRange {
    TimeRange::from_start_end(start, end, false).unwrap()
}

// ── Construction ────────────────────────────────────────────────────────────

#[test]
fn from_start_end_exclusive() {
    let r = range(60, 120);
    assert_eq!(r.start(), 60);
    assert_eq!(r.end(), 120);
    assert_eq!(r.duration(), 60);
}

#[test]
fn from_start_end_inclusive_covers_the_end_minute() {
    let r = TimeRange::from_start_end(60, 120, true).unwrap();
    assert_eq!(r.end(), 121);

    // Inclusive at the last minute label closes exactly at 1440.
    let last = TimeRange::from_start_end(600, TimeRange::END_OF_DAY, true).unwrap();
    assert_eq!(last.end(), TimeRange::MINUTES_PER_DAY);
}

#[test]
fn from_start_duration() {
    let r = TimeRange::from_start_duration(540, 30).unwrap();
    assert_eq!(r.start(), 540);
    assert_eq!(r.end(), 570);
}

#[test]
fn zero_width_range_is_legal() {
    let r = range(300, 300);
    assert_eq!(r.duration(), 0);
}

#[test]
fn start_after_end_is_rejected() {
    assert_eq!(
        TimeRange::from_start_end(120, 60, false),
        Err(SlotError::StartAfterEnd {
            start: 120,
            end: 60
        })
    );
}

#[test]
fn end_past_midnight_is_rejected() {
    assert!(matches!(
        TimeRange::from_start_end(0, 1441, false),
        Err(SlotError::PastEndOfDay { .. })
    ));
    // Inclusive of minute 1440 would store 1441 — also rejected.
    assert!(matches!(
        TimeRange::from_start_end(0, TimeRange::MINUTES_PER_DAY, true),
        Err(SlotError::PastEndOfDay { .. })
    ));
    assert!(matches!(
        TimeRange::from_start_duration(1000, 500),
        Err(SlotError::PastEndOfDay { .. })
    ));
}

#[test]
fn whole_day_constant_spans_the_day() {
    assert_eq!(TimeRange::WHOLE_DAY.start(), TimeRange::START_OF_DAY);
    assert_eq!(TimeRange::WHOLE_DAY.end(), TimeRange::MINUTES_PER_DAY);
    assert_eq!(TimeRange::WHOLE_DAY, range(0, 1440));
}

// ── Overlap / containment ───────────────────────────────────────────────────

#[test]
fn overlapping_ranges_overlap_both_ways() {
    let a = range(60, 120);
    let b = range(90, 150);
    assert!(a.overlaps(&b));
    assert!(b.overlaps(&a));
}

#[test]
fn adjacent_ranges_do_not_overlap() {
    let a = range(60, 120);
    let b = range(120, 180);
    assert!(!a.overlaps(&b));
    assert!(!b.overlaps(&a));
}

#[test]
fn zero_width_range_overlaps_nothing() {
    let point = range(90, 90);
    let around = range(60, 120);
    assert!(!point.overlaps(&around));
    assert!(!around.overlaps(&point));
}

#[test]
fn contains_nested_range() {
    let outer = range(60, 180);
    let inner = range(90, 120);
    assert!(outer.contains(&inner));
    assert!(!inner.contains(&outer));
    // A range contains itself.
    assert!(outer.contains(&outer));
}

#[test]
fn contains_is_false_for_partial_overlap() {
    let a = range(60, 120);
    let b = range(90, 150);
    assert!(!a.contains(&b));
    assert!(!b.contains(&a));
}

#[test]
fn zero_width_containment() {
    let outer = range(60, 120);
    assert!(outer.contains(&range(60, 60)));
    assert!(outer.contains(&range(90, 90)));
    // The exclusive end minute is outside.
    assert!(!outer.contains(&range(120, 120)));
    // A zero-width range contains nothing, not even itself.
    assert!(!range(90, 90).contains(&range(90, 90)));
}

#[test]
fn contains_minute_is_half_open() {
    let r = range(60, 120);
    assert!(r.contains_minute(60));
    assert!(r.contains_minute(119));
    assert!(!r.contains_minute(120));
    assert!(!r.contains_minute(59));
}

// ── Ordering / equality ─────────────────────────────────────────────────────

#[test]
fn ordered_by_start_then_end() {
    let mut ranges = vec![range(120, 180), range(60, 150), range(60, 90)];
    ranges.sort();
    assert_eq!(ranges, vec![range(60, 90), range(60, 150), range(120, 180)]);
}

#[test]
fn equality_is_structural() {
    assert_eq!(range(60, 120), TimeRange::from_start_duration(60, 60).unwrap());
    assert_ne!(range(60, 120), range(60, 121));
}

// ── Serde ───────────────────────────────────────────────────────────────────

#[test]
fn serde_roundtrip() {
    let r = range(540, 600);
    let json = serde_json::to_string(&r).unwrap();
    assert_eq!(json, r#"{"start":540,"end":600}"#);
    let back: TimeRange = serde_json::from_str(&json).unwrap();
    assert_eq!(back, r);
}

#[test]
fn serde_rejects_invalid_bounds() {
    assert!(serde_json::from_str::<TimeRange>(r#"{"start":120,"end":60}"#).is_err());
    assert!(serde_json::from_str::<TimeRange>(r#"{"start":0,"end":2000}"#).is_err());
}
