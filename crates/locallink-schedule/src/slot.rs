//! Time-slot value types.
//!
//! A [`TimeSlot`] is a half-open wall-clock interval within a single day;
//! an [`AvailabilitySlot`] groups one day's slots in chronological order.
//! Wall-clock times serialize as `"HH:MM"` strings, the format the rest of
//! the platform exchanges with the dashboards.

use chrono::{NaiveDate, NaiveTime};
use serde::{Deserialize, Serialize};

/// Serde adapter for `"HH:MM"` wall-clock times.
pub mod hhmm {
    use chrono::NaiveTime;
    use serde::{self, Deserialize, Deserializer, Serializer};

    const FORMAT: &str = "%H:%M";

    pub fn serialize<S>(time: &NaiveTime, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&time.format(FORMAT).to_string())
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<NaiveTime, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        NaiveTime::parse_from_str(&s, FORMAT).map_err(serde::de::Error::custom)
    }
}

/// A single bookable window within a day, `[start, end)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimeSlot {
    #[serde(with = "hhmm")]
    pub start: NaiveTime,
    #[serde(with = "hhmm")]
    pub end: NaiveTime,
    /// The provider is willing to take bookings in this slot.
    pub is_available: bool,
    /// The slot is already consumed by a confirmed booking.
    pub is_booked: bool,
}

impl TimeSlot {
    /// Slot length in wall-clock minutes.
    pub fn duration_minutes(&self) -> i64 {
        (self.end - self.start).num_minutes()
    }

    /// A slot can accept a new booking when it is open and not yet taken.
    pub fn is_bookable(&self) -> bool {
        self.is_available && !self.is_booked
    }
}

/// One calendar day's worth of slots.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AvailabilitySlot {
    pub date: NaiveDate,
    /// Slots in chronological order.
    pub time_slots: Vec<TimeSlot>,
    /// Derived: true iff any contained slot is available.
    pub is_available: bool,
}

impl AvailabilitySlot {
    /// Build a per-day container, deriving `is_available` from the slots.
    pub fn new(date: NaiveDate, time_slots: Vec<TimeSlot>) -> Self {
        let is_available = time_slots.iter().any(|s| s.is_available);
        Self {
            date,
            time_slots,
            is_available,
        }
    }
}
