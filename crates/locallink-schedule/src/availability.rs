//! Deterministic availability generation.
//!
//! Produces one [`AvailabilitySlot`] per open day across an inclusive date
//! range, slicing each of the day's open intervals into consecutive slots of
//! the schedule's configured length. `is_booked` is derived from overlap
//! with the supplied calendar events, so the output is a pure function of
//! its inputs.
//!
//! Wall-clock times are treated as UTC throughout; no timezone
//! normalization is applied.

use chrono::{Datelike, Duration, NaiveDate};

use crate::conflict::overlaps;
use crate::event::CalendarEvent;
use crate::schedule::WeeklySchedule;
use crate::slot::{AvailabilitySlot, TimeSlot};

/// Generate availability for every open day in `[start_date, end_date]`.
///
/// Days the schedule marks closed are skipped entirely (they produce no
/// `AvailabilitySlot`, rather than an empty one). An inverted range yields
/// an empty sequence, not an error.
pub fn generate_availability(
    schedule: &WeeklySchedule,
    start_date: NaiveDate,
    end_date: NaiveDate,
    booked: &[CalendarEvent],
) -> Vec<AvailabilitySlot> {
    let mut days = Vec::new();
    let mut day = start_date;
    while day <= end_date {
        if !schedule.is_closed(day.weekday()) {
            days.push(AvailabilitySlot::new(day, day_slots(schedule, day, booked)));
        }
        day = match day.succ_opt() {
            Some(next) => next,
            None => break,
        };
    }
    days
}

/// Slice one day's open intervals into slots, marking each booked when any
/// calendar event overlaps it. A trailing remainder shorter than the slot
/// length is dropped.
fn day_slots(schedule: &WeeklySchedule, day: NaiveDate, booked: &[CalendarEvent]) -> Vec<TimeSlot> {
    // A zero slot length can never advance the cursor: no slots.
    if schedule.slot_minutes == 0 {
        return Vec::new();
    }

    let step = Duration::minutes(i64::from(schedule.slot_minutes));
    let mut slots = Vec::new();

    for interval in schedule.open_intervals(day.weekday()) {
        let open_end = day.and_time(interval.end);
        let mut cursor = day.and_time(interval.start);

        while cursor + step <= open_end {
            let slot_end = cursor + step;
            let is_booked = booked
                .iter()
                .any(|e| overlaps(cursor.and_utc(), slot_end.and_utc(), e.start, e.end));
            slots.push(TimeSlot {
                start: cursor.time(),
                end: slot_end.time(),
                is_available: true,
                is_booked,
            });
            cursor = slot_end;
        }
    }

    slots
}
