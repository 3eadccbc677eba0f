//! `llsched` CLI — inspect LocalLink provider calendars from the command line.
//!
//! ## Usage
//!
//! ```sh
//! # Generate a provider's availability for a date range
//! llsched availability --events events.json --from 2024-06-03 --to 2024-06-09
//!
//! # Use a custom weekly schedule instead of the stock one
//! llsched availability --schedule schedule.json --from 2024-06-03 --to 2024-06-09
//!
//! # Check a candidate booking interval for conflicts
//! llsched conflicts --events events.json \
//!     --start 2024-06-03T09:30:00Z --end 2024-06-03T09:45:00Z
//!
//! # Re-check while editing an existing event (skip self-conflict)
//! llsched conflicts --events events.json --exclude evt-42 \
//!     --start 2024-06-03T09:00:00Z --end 2024-06-03T10:00:00Z
//!
//! # Find the earliest slot of at least 90 minutes
//! llsched next-slot --events events.json --from 2024-06-03 --duration 90
//! ```
//!
//! Event and schedule files are JSON, the same shapes the platform's
//! document store holds. All output is pretty-printed JSON on stdout.

use anyhow::{Context, Result};
use chrono::{DateTime, NaiveDate, Utc};
use clap::{Parser, Subcommand};
use locallink_schedule::{
    find_conflicts, generate_availability, next_available_slot, CalendarEvent, ConflictCheck,
    WeeklySchedule,
};

#[derive(Parser)]
#[command(name = "llsched", version, about = "LocalLink provider calendar inspector")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate per-day availability slots for a date range
    Availability {
        /// JSON file with the provider's weekly schedule (stock schedule if omitted)
        #[arg(long)]
        schedule: Option<String>,
        /// JSON file with the provider's calendar events (none if omitted)
        #[arg(long)]
        events: Option<String>,
        /// First day of the range, inclusive (YYYY-MM-DD)
        #[arg(long)]
        from: NaiveDate,
        /// Last day of the range, inclusive (YYYY-MM-DD)
        #[arg(long)]
        to: NaiveDate,
    },
    /// List calendar events overlapping a candidate booking interval
    Conflicts {
        /// JSON file with the provider's calendar events
        #[arg(long)]
        events: String,
        /// Candidate start (RFC 3339, e.g. 2024-06-03T09:30:00Z)
        #[arg(long)]
        start: DateTime<Utc>,
        /// Candidate end (RFC 3339)
        #[arg(long)]
        end: DateTime<Utc>,
        /// Event id to skip, for re-saving an event being edited
        #[arg(long)]
        exclude: Option<String>,
        /// Drop cancelled events from the scan (they block by default)
        #[arg(long)]
        drop_cancelled: bool,
    },
    /// Find the earliest open slot of at least the requested duration
    NextSlot {
        /// JSON file with the provider's weekly schedule (stock schedule if omitted)
        #[arg(long)]
        schedule: Option<String>,
        /// JSON file with the provider's calendar events (none if omitted)
        #[arg(long)]
        events: Option<String>,
        /// Preferred start date (YYYY-MM-DD); today if omitted
        #[arg(long)]
        from: Option<NaiveDate>,
        /// Minimum slot duration in minutes
        #[arg(long)]
        duration: i64,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Availability {
            schedule,
            events,
            from,
            to,
        } => {
            let schedule = read_schedule(schedule.as_deref())?;
            let events = read_events(events.as_deref())?;
            let days = generate_availability(&schedule, from, to, &events);
            print_json(&days)
        }
        Commands::Conflicts {
            events,
            start,
            end,
            exclude,
            drop_cancelled,
        } => {
            let events = read_events(Some(&events))?;
            let check = ConflictCheck {
                exclude_event_id: exclude,
                include_cancelled: !drop_cancelled,
            };
            let conflicts = find_conflicts(&events, start, end, &check)
                .context("conflict check failed")?;
            print_json(&conflicts)
        }
        Commands::NextSlot {
            schedule,
            events,
            from,
            duration,
        } => {
            let schedule = read_schedule(schedule.as_deref())?;
            let events = read_events(events.as_deref())?;
            let from = from.unwrap_or_else(|| Utc::now().date_naive());
            let slot = next_available_slot(&schedule, &events, from, duration)
                .context("next-slot search failed")?;
            print_json(&slot)
        }
    }
}

/// Load a weekly schedule from JSON, or fall back to the stock schedule.
fn read_schedule(path: Option<&str>) -> Result<WeeklySchedule> {
    match path {
        Some(path) => {
            let raw = std::fs::read_to_string(path)
                .with_context(|| format!("Failed to read schedule file: {path}"))?;
            serde_json::from_str(&raw)
                .with_context(|| format!("Failed to parse schedule file: {path}"))
        }
        None => Ok(WeeklySchedule::default()),
    }
}

/// Load calendar events from JSON; no file means an empty calendar.
fn read_events(path: Option<&str>) -> Result<Vec<CalendarEvent>> {
    match path {
        Some(path) => {
            let raw = std::fs::read_to_string(path)
                .with_context(|| format!("Failed to read events file: {path}"))?;
            serde_json::from_str(&raw)
                .with_context(|| format!("Failed to parse events file: {path}"))
        }
        None => Ok(Vec::new()),
    }
}

fn print_json<T: serde::Serialize>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}
