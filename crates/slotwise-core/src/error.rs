//! Error types for slotwise-core operations.

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SlotError {
    #[error("Invalid time range: start {start} is after end {end}")]
    StartAfterEnd { start: u16, end: u16 },

    #[error("Invalid time range: end {end} is past minute 1440")]
    PastEndOfDay { end: u16 },
}

pub type Result<T> = std::result::Result<T, SlotError>;
