//! Next-available-slot search.

use chrono::{Days, NaiveDate, NaiveTime};
use serde::{Deserialize, Serialize};

use crate::availability::generate_availability;
use crate::error::{Result, ScheduleError};
use crate::event::CalendarEvent;
use crate::schedule::WeeklySchedule;
use crate::slot::hhmm;

/// How far ahead of the preferred date the search looks, in days.
pub const SEARCH_HORIZON_DAYS: u64 = 30;

/// The earliest qualifying slot found by [`next_available_slot`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct NextSlot {
    pub date: NaiveDate,
    #[serde(with = "hhmm")]
    pub start: NaiveTime,
    #[serde(with = "hhmm")]
    pub end: NaiveTime,
}

/// Find the earliest open, unbooked slot of at least `duration_minutes`
/// within `[from, from + 30 days]`.
///
/// Days are scanned chronologically, slots in their in-day order; the first
/// slot that is available, not booked, and long enough wins. `Ok(None)`
/// means nothing qualifies inside the horizon.
///
/// This search trusts the `is_booked` flags derived from the supplied
/// events and does not run conflict detection; a caller that needs
/// authoritative conflict-freedom must also call
/// [`find_conflicts`](crate::conflict::find_conflicts) before creating the
/// booking.
///
/// # Errors
///
/// Returns [`ScheduleError::InvalidDuration`] when `duration_minutes <= 0`.
pub fn next_available_slot(
    schedule: &WeeklySchedule,
    booked: &[CalendarEvent],
    from: NaiveDate,
    duration_minutes: i64,
) -> Result<Option<NextSlot>> {
    if duration_minutes <= 0 {
        return Err(ScheduleError::InvalidDuration(duration_minutes));
    }

    // Saturate at the calendar's end rather than overflow for a late `from`.
    let horizon = from
        .checked_add_days(Days::new(SEARCH_HORIZON_DAYS))
        .unwrap_or(NaiveDate::MAX);
    for day in generate_availability(schedule, from, horizon, booked) {
        for slot in &day.time_slots {
            if slot.is_bookable() && slot.duration_minutes() >= duration_minutes {
                return Ok(Some(NextSlot {
                    date: day.date,
                    start: slot.start,
                    end: slot.end,
                }));
            }
        }
    }

    Ok(None)
}
