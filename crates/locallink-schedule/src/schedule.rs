//! Per-provider weekly opening-hours configuration.
//!
//! A [`WeeklySchedule`] maps each weekday to the open intervals a provider
//! accepts bookings in. A weekday with no open intervals is closed. The
//! availability generator slices each open interval into consecutive slots
//! of `slot_minutes` length, so availability is a pure function of this
//! configuration plus existing bookings.

use chrono::{NaiveTime, Weekday};
use serde::{Deserialize, Serialize};

use crate::slot::hhmm;

/// A half-open `[start, end)` opening window on a weekday.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct OpenInterval {
    #[serde(with = "hhmm")]
    pub start: NaiveTime,
    #[serde(with = "hhmm")]
    pub end: NaiveTime,
}

impl OpenInterval {
    pub fn new(start: NaiveTime, end: NaiveTime) -> Self {
        Self { start, end }
    }
}

/// Weekly opening hours for one provider.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeeklySchedule {
    /// Open intervals per weekday, indexed Monday = 0 .. Sunday = 6.
    open: [Vec<OpenInterval>; 7],
    /// Length of each generated slot in minutes.
    pub slot_minutes: u32,
}

fn hm(hour: u32, minute: u32) -> NaiveTime {
    NaiveTime::from_hms_opt(hour, minute, 0).expect("valid wall-clock time")
}

fn index(weekday: Weekday) -> usize {
    weekday.num_days_from_monday() as usize
}

impl Default for WeeklySchedule {
    /// The stock LocalLink schedule: Sundays closed, hourly slots in a
    /// morning block 09:00–12:00 and an afternoon block 14:00–18:00.
    fn default() -> Self {
        let weekday_hours = vec![
            OpenInterval::new(hm(9, 0), hm(12, 0)),
            OpenInterval::new(hm(14, 0), hm(18, 0)),
        ];
        let mut schedule = Self::empty(60);
        for weekday in [
            Weekday::Mon,
            Weekday::Tue,
            Weekday::Wed,
            Weekday::Thu,
            Weekday::Fri,
            Weekday::Sat,
        ] {
            schedule.open[index(weekday)] = weekday_hours.clone();
        }
        schedule
    }
}

impl WeeklySchedule {
    /// A schedule with every weekday closed.
    pub fn empty(slot_minutes: u32) -> Self {
        Self {
            open: Default::default(),
            slot_minutes,
        }
    }

    /// Open intervals for the given weekday, empty when closed.
    pub fn open_intervals(&self, weekday: Weekday) -> &[OpenInterval] {
        &self.open[index(weekday)]
    }

    /// A weekday is closed when it has no open intervals.
    pub fn is_closed(&self, weekday: Weekday) -> bool {
        self.open[index(weekday)].is_empty()
    }

    /// Replace the open intervals for one weekday.
    pub fn with_weekday(mut self, weekday: Weekday, intervals: Vec<OpenInterval>) -> Self {
        self.open[index(weekday)] = intervals;
        self
    }

    /// Close one weekday entirely.
    pub fn closed_on(self, weekday: Weekday) -> Self {
        self.with_weekday(weekday, Vec::new())
    }
}
