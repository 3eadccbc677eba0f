//! # locallink-schedule
//!
//! Provider availability generation and booking conflict detection for the
//! LocalLink marketplace.
//!
//! The crate is split into pure interval logic (availability, conflicts,
//! next-slot search) and a thin async layer ([`planner`]) that feeds those
//! functions from the platform's document store through trait ports.
//!
//! ## Quick start
//!
//! ```rust
//! use chrono::NaiveDate;
//! use locallink_schedule::{generate_availability, WeeklySchedule};
//!
//! // Monday 2024-06-03 through Sunday 2024-06-09. Sundays are closed in
//! // the stock schedule, so only six days come back.
//! let week = generate_availability(
//!     &WeeklySchedule::default(),
//!     NaiveDate::from_ymd_opt(2024, 6, 3).unwrap(),
//!     NaiveDate::from_ymd_opt(2024, 6, 9).unwrap(),
//!     &[],
//! );
//! assert_eq!(week.len(), 6);
//! assert_eq!(week[0].time_slots.len(), 7); // 3 morning + 4 afternoon
//! ```
//!
//! ## Modules
//!
//! - [`slot`] — time-slot value types, `"HH:MM"` wire format
//! - [`event`] — calendar events and their status/kind tags
//! - [`schedule`] — per-provider weekly opening hours
//! - [`availability`] — deterministic slot generation
//! - [`conflict`] — half-open interval overlap scanning
//! - [`finder`] — earliest-qualifying-slot search
//! - [`store`] — async ports to the document store
//! - [`planner`] — store-backed query composition
//! - [`error`] — error types

pub mod availability;
pub mod conflict;
pub mod error;
pub mod event;
pub mod finder;
pub mod planner;
pub mod schedule;
pub mod slot;
pub mod store;

pub use availability::generate_availability;
pub use conflict::{find_conflicts, overlaps, ConflictCheck};
pub use error::ScheduleError;
pub use event::{CalendarEvent, EventKind, EventStatus};
pub use finder::{next_available_slot, NextSlot, SEARCH_HORIZON_DAYS};
pub use planner::{PlannerConfig, SchedulePlanner};
pub use schedule::{OpenInterval, WeeklySchedule};
pub use slot::{AvailabilitySlot, TimeSlot};
pub use store::{CalendarStore, ScheduleStore};
