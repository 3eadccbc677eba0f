//! Async ports to the external document store.
//!
//! The core never talks to the hosted database directly; it consumes these
//! two traits. Implementations live with the storage client. Fetch failures
//! surface as [`ScheduleError::Dependency`](crate::error::ScheduleError) and
//! are propagated unchanged — retry and timeout policy belong to the caller.

use async_trait::async_trait;
use chrono::{DateTime, Utc};

use crate::error::Result;
use crate::event::CalendarEvent;
use crate::schedule::WeeklySchedule;

/// Read access to a provider's calendar events.
#[async_trait]
pub trait CalendarStore: Send + Sync {
    /// Fetch every event for `provider_id` whose interval intersects
    /// `[start, end]`. Ordering is whatever the store returns; the core
    /// does not re-sort.
    async fn fetch_events(
        &self,
        provider_id: &str,
        start: DateTime<Utc>,
        end: DateTime<Utc>,
    ) -> Result<Vec<CalendarEvent>>;
}

/// Read access to a provider's configured weekly opening hours.
#[async_trait]
pub trait ScheduleStore: Send + Sync {
    async fn fetch_weekly_schedule(&self, provider_id: &str) -> Result<WeeklySchedule>;
}
