//! Booking conflict detection over a provider's calendar.
//!
//! Overlap uses half-open `[start, end)` semantics: back-to-back bookings,
//! where one event ends exactly when the next starts, are NOT conflicts.

use chrono::{DateTime, Utc};

use crate::error::{Result, ScheduleError};
use crate::event::{CalendarEvent, EventStatus};

/// Two half-open intervals overlap iff `a.start < b.end && b.start < a.end`.
///
/// This single inequality pair covers all three enumerable cases: A starts
/// inside B, A ends inside B, or A fully contains B.
pub fn overlaps(
    a_start: DateTime<Utc>,
    a_end: DateTime<Utc>,
    b_start: DateTime<Utc>,
    b_end: DateTime<Utc>,
) -> bool {
    a_start < b_end && b_start < a_end
}

/// Options for a conflict scan.
#[derive(Debug, Clone)]
pub struct ConflictCheck {
    /// Event id to skip, so re-saving an event being edited does not
    /// conflict with itself.
    pub exclude_event_id: Option<String>,
    /// When false, cancelled events no longer block the calendar.
    /// Defaults to true: the platform has always counted cancelled bookings
    /// as occupying their old slot, and callers opt out explicitly.
    pub include_cancelled: bool,
}

impl Default for ConflictCheck {
    fn default() -> Self {
        Self {
            exclude_event_id: None,
            include_cancelled: true,
        }
    }
}

impl ConflictCheck {
    /// A check that skips the event with the given id.
    pub fn excluding(event_id: impl Into<String>) -> Self {
        Self {
            exclude_event_id: Some(event_id.into()),
            ..Self::default()
        }
    }

    /// Drop cancelled events from the scan.
    pub fn without_cancelled(mut self) -> Self {
        self.include_cancelled = false;
        self
    }
}

/// Scan `events` for overlaps with the candidate `[start, end)` interval.
///
/// Returns the overlapping events in the order they were given — callers
/// that fetched from the store see conflicts in fetch order. An empty
/// result means the candidate interval is clear.
///
/// # Errors
///
/// Returns [`ScheduleError::InvalidInterval`] when `end <= start`.
pub fn find_conflicts(
    events: &[CalendarEvent],
    start: DateTime<Utc>,
    end: DateTime<Utc>,
    check: &ConflictCheck,
) -> Result<Vec<CalendarEvent>> {
    if end <= start {
        return Err(ScheduleError::InvalidInterval { start, end });
    }

    Ok(events
        .iter()
        .filter(|e| check.exclude_event_id.as_deref() != Some(e.id.as_str()))
        .filter(|e| check.include_cancelled || e.status != EventStatus::Cancelled)
        .filter(|e| overlaps(start, end, e.start, e.end))
        .cloned()
        .collect())
}
