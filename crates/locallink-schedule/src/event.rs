//! Calendar events on a provider's calendar.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Display classification for an event. All kinds participate equally in
/// conflict detection; the tag only drives calendar coloring upstream.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EventKind {
    #[default]
    Booking,
    Blocked,
    Personal,
}

/// Lifecycle status of the booking behind an event.
///
/// Bookings move `pending → confirmed → completed`, with `cancelled`
/// reachable from `pending` or `confirmed`. Whether cancelled events still
/// block the calendar is controlled per conflict check, see
/// [`ConflictCheck`](crate::conflict::ConflictCheck).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EventStatus {
    #[default]
    Confirmed,
    Pending,
    Cancelled,
}

/// A single event occupying `[start, end)` on one provider's calendar.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CalendarEvent {
    pub id: String,
    pub provider_id: String,
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub start: DateTime<Utc>,
    pub end: DateTime<Utc>,
    #[serde(default)]
    pub kind: EventKind,
    #[serde(default)]
    pub status: EventStatus,
}
