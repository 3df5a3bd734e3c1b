//! Minute-of-day time ranges.
//!
//! A [`TimeRange`] is a half-open interval `[start, end)` measured in minutes
//! from midnight, always within a single day (`0 ≤ start ≤ end ≤ 1440`).
//! Ranges are immutable `Copy` values with structural equality and a total
//! order by start minute (ties broken by end minute) — the canonical sort
//! used before merging.

use serde::{Deserialize, Serialize};

use crate::error::{Result, SlotError};

/// A half-open `[start, end)` interval in minutes from midnight.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "RawRange", into = "RawRange")]
pub struct TimeRange {
    start: u16,
    end: u16,
}

/// Wire representation; re-validates the invariant on deserialization.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
struct RawRange {
    start: u16,
    end: u16,
}

impl From<TimeRange> for RawRange {
    fn from(range: TimeRange) -> Self {
        RawRange {
            start: range.start,
            end: range.end,
        }
    }
}

impl TryFrom<RawRange> for TimeRange {
    type Error = SlotError;

    fn try_from(raw: RawRange) -> Result<Self> {
        TimeRange::new(raw.start, raw.end)
    }
}

impl TimeRange {
    /// First minute of the day (00:00).
    pub const START_OF_DAY: u16 = 0;

    /// Minute label of 23:59 — the last schedulable minute. A range built
    /// with the inclusive flag set at this minute closes at 1440.
    pub const END_OF_DAY: u16 = 24 * 60 - 1;

    /// Exclusive upper bound for range ends.
    pub const MINUTES_PER_DAY: u16 = 24 * 60;

    /// The full day, `[0, 1440)`.
    pub const WHOLE_DAY: TimeRange = TimeRange {
        start: Self::START_OF_DAY,
        end: Self::MINUTES_PER_DAY,
    };

    fn new(start: u16, end: u16) -> Result<Self> {
        if start > end {
            return Err(SlotError::StartAfterEnd { start, end });
        }
        if end > Self::MINUTES_PER_DAY {
            return Err(SlotError::PastEndOfDay { end });
        }
        Ok(TimeRange { start, end })
    }

    /// Build a range from explicit bounds.
    ///
    /// When `inclusive` is set the range also covers minute `end` itself
    /// (the stored exclusive end becomes `end + 1`). The scheduler uses this
    /// for the final gap of the day, which must close at minute 1440 rather
    /// than 1439.
    ///
    /// # Errors
    ///
    /// Returns [`SlotError::StartAfterEnd`] when `start > end`, or
    /// [`SlotError::PastEndOfDay`] when the (possibly inclusive) end runs
    /// past minute 1440.
    pub fn from_start_end(start: u16, end: u16, inclusive: bool) -> Result<Self> {
        if start > end {
            return Err(SlotError::StartAfterEnd { start, end });
        }
        let end_exclusive = u32::from(end) + u32::from(inclusive);
        if end_exclusive > u32::from(Self::MINUTES_PER_DAY) {
            return Err(SlotError::PastEndOfDay { end });
        }
        Ok(TimeRange {
            start,
            end: end_exclusive as u16,
        })
    }

    /// Build a range from a start minute and a duration in minutes.
    pub fn from_start_duration(start: u16, duration: u16) -> Result<Self> {
        let end = u32::from(start) + u32::from(duration);
        if end > u32::from(Self::MINUTES_PER_DAY) {
            return Err(SlotError::PastEndOfDay {
                end: end.min(u32::from(u16::MAX)) as u16,
            });
        }
        Ok(TimeRange {
            start,
            end: end as u16,
        })
    }

    /// Start minute (inclusive).
    pub fn start(&self) -> u16 {
        self.start
    }

    /// End minute (exclusive).
    pub fn end(&self) -> u16 {
        self.end
    }

    /// Length of the range in minutes.
    pub fn duration(&self) -> u16 {
        self.end - self.start
    }

    /// Union of two overlapping ranges. Callers guarantee the ranges
    /// overlap, so the result is contiguous and the invariant holds.
    pub(crate) fn merged_with(&self, other: &TimeRange) -> TimeRange {
        TimeRange {
            start: self.start.min(other.start),
            end: self.end.max(other.end),
        }
    }

    /// Internal constructor for bounds already known to satisfy the
    /// invariant (gap emission between merged busy blocks).
    pub(crate) fn from_checked_bounds(start: u16, end: u16) -> TimeRange {
        debug_assert!(start <= end && end <= Self::MINUTES_PER_DAY);
        TimeRange { start, end }
    }

    /// Whether `minute` falls within `[start, end)`.
    pub fn contains_minute(&self, minute: u16) -> bool {
        self.start <= minute && minute < self.end
    }

    /// Whether the two ranges share at least one minute.
    ///
    /// Adjacent ranges (one ends exactly where the other starts) do not
    /// overlap, and zero-width ranges overlap nothing.
    pub fn overlaps(&self, other: &TimeRange) -> bool {
        self.start < other.end && other.start < self.end
    }

    /// Whether `other` lies entirely within `self`.
    ///
    /// A zero-width range contains nothing; a zero-width `other` is
    /// contained when its start minute falls within `self`.
    pub fn contains(&self, other: &TimeRange) -> bool {
        if self.duration() == 0 {
            return false;
        }
        if other.duration() == 0 {
            return self.contains_minute(other.start);
        }
        self.start <= other.start && other.end <= self.end
    }
}
