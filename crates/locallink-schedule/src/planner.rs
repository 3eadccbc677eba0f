//! High-level scheduling queries over the store ports.
//!
//! [`SchedulePlanner`] composes the pure availability/conflict functions
//! with the async document-store ports and owns the fetch-window padding.
//!
//! Conflict checking and booking creation remain two separate calls: two
//! concurrent booking attempts for the same provider can both observe
//! "no conflict" and both proceed (a check-then-act race). Closing that gap
//! requires an exclusion constraint in the storage layer, which is outside
//! this crate.

use chrono::{DateTime, Days, Duration, NaiveDate, NaiveTime, Utc};

use crate::availability::generate_availability;
use crate::conflict::{self, ConflictCheck};
use crate::error::{Result, ScheduleError};
use crate::event::CalendarEvent;
use crate::finder::{self, NextSlot, SEARCH_HORIZON_DAYS};
use crate::slot::AvailabilitySlot;
use crate::store::{CalendarStore, ScheduleStore};

/// Tuning knobs for planner queries.
#[derive(Debug, Clone)]
pub struct PlannerConfig {
    /// Upper bound on any single event's duration. Fetch windows are padded
    /// by this much on both sides so an event that starts before the query
    /// window and extends into it is still fetched. Events longer than this
    /// bound can be missed.
    pub max_event_duration: Duration,
}

impl Default for PlannerConfig {
    fn default() -> Self {
        Self {
            max_event_duration: Duration::hours(24),
        }
    }
}

/// Scheduling queries for one storage backend.
pub struct SchedulePlanner<S> {
    store: S,
    config: PlannerConfig,
}

impl<S> SchedulePlanner<S> {
    pub fn new(store: S) -> Self {
        Self::with_config(store, PlannerConfig::default())
    }

    pub fn with_config(store: S, config: PlannerConfig) -> Self {
        Self { store, config }
    }

    /// Borrow the underlying store.
    pub fn store(&self) -> &S {
        &self.store
    }
}

fn day_start(date: NaiveDate) -> DateTime<Utc> {
    date.and_time(NaiveTime::MIN).and_utc()
}

impl<S> SchedulePlanner<S>
where
    S: CalendarStore + ScheduleStore,
{
    /// Report every event on the provider's calendar that overlaps the
    /// candidate `[start, end)` interval, in fetch order.
    ///
    /// # Errors
    ///
    /// [`ScheduleError::InvalidInterval`] when `end <= start`;
    /// [`ScheduleError::Dependency`] when the fetch fails.
    pub async fn find_conflicts(
        &self,
        provider_id: &str,
        start: DateTime<Utc>,
        end: DateTime<Utc>,
        check: &ConflictCheck,
    ) -> Result<Vec<CalendarEvent>> {
        if end <= start {
            return Err(ScheduleError::InvalidInterval { start, end });
        }

        let events = self
            .store
            .fetch_events(
                provider_id,
                start
                    .checked_sub_signed(self.config.max_event_duration)
                    .unwrap_or(DateTime::<Utc>::MIN_UTC),
                end.checked_add_signed(self.config.max_event_duration)
                    .unwrap_or(DateTime::<Utc>::MAX_UTC),
            )
            .await?;

        conflict::find_conflicts(&events, start, end, check)
    }

    /// Generate the provider's availability for `[start_date, end_date]`,
    /// with `is_booked` flags derived from the calendar.
    ///
    /// An inverted range yields an empty sequence without touching the
    /// store.
    pub async fn availability(
        &self,
        provider_id: &str,
        start_date: NaiveDate,
        end_date: NaiveDate,
    ) -> Result<Vec<AvailabilitySlot>> {
        if start_date > end_date {
            return Ok(Vec::new());
        }

        let schedule = self.store.fetch_weekly_schedule(provider_id).await?;
        let events = self
            .fetch_window(provider_id, start_date, end_date)
            .await?;

        Ok(generate_availability(
            &schedule, start_date, end_date, &events,
        ))
    }

    /// Find the earliest bookable slot of at least `duration_minutes`
    /// within 30 days of `preferred_date` (today when omitted).
    pub async fn next_available_slot(
        &self,
        provider_id: &str,
        duration_minutes: i64,
        preferred_date: Option<NaiveDate>,
    ) -> Result<Option<NextSlot>> {
        if duration_minutes <= 0 {
            return Err(ScheduleError::InvalidDuration(duration_minutes));
        }

        let from = preferred_date.unwrap_or_else(|| Utc::now().date_naive());
        let horizon = from
            .checked_add_days(Days::new(SEARCH_HORIZON_DAYS))
            .unwrap_or(NaiveDate::MAX);

        let schedule = self.store.fetch_weekly_schedule(provider_id).await?;
        let events = self.fetch_window(provider_id, from, horizon).await?;

        finder::next_available_slot(&schedule, &events, from, duration_minutes)
    }

    /// Fetch events overlapping the inclusive date range, padded on both
    /// sides by the configured maximum event duration. The window saturates
    /// at the calendar bounds instead of overflowing.
    async fn fetch_window(
        &self,
        provider_id: &str,
        start_date: NaiveDate,
        end_date: NaiveDate,
    ) -> Result<Vec<CalendarEvent>> {
        let fetch_start = day_start(start_date)
            .checked_sub_signed(self.config.max_event_duration)
            .unwrap_or(DateTime::<Utc>::MIN_UTC);
        let day_after_end = end_date
            .checked_add_days(Days::new(1))
            .unwrap_or(NaiveDate::MAX);
        let fetch_end = day_start(day_after_end)
            .checked_add_signed(self.config.max_event_duration)
            .unwrap_or(DateTime::<Utc>::MAX_UTC);
        self.store
            .fetch_events(provider_id, fetch_start, fetch_end)
            .await
    }
}
