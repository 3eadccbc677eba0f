//! Tests for conflict detection.
//!
//! Overlap semantics are half-open: adjacent events never conflict, any
//! positive intersection does.

use chrono::{DateTime, TimeZone, Utc};
use locallink_schedule::{find_conflicts, CalendarEvent, ConflictCheck, EventStatus, ScheduleError};

/// Helper: a confirmed booking on a given day with hour:minute bounds.
fn event(id: &str, day: u32, start_h: u32, start_m: u32, end_h: u32, end_m: u32) -> CalendarEvent {
    CalendarEvent {
        id: id.to_string(),
        provider_id: "provider-1".to_string(),
        title: format!("event {id}"),
        description: None,
        start: Utc.with_ymd_and_hms(2024, 6, day, start_h, start_m, 0).unwrap(),
        end: Utc.with_ymd_and_hms(2024, 6, day, end_h, end_m, 0).unwrap(),
        kind: Default::default(),
        status: EventStatus::Confirmed,
    }
}

fn at(day: u32, hour: u32, minute: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 6, day, hour, minute, 0).unwrap()
}

#[test]
fn candidate_inside_event_is_a_conflict() {
    // The §8-style scenario: one event 09:00-10:00, candidate 09:30-09:45.
    let events = vec![event("e1", 3, 9, 0, 10, 0)];

    let conflicts =
        find_conflicts(&events, at(3, 9, 30), at(3, 9, 45), &ConflictCheck::default()).unwrap();

    assert_eq!(conflicts.len(), 1);
    assert_eq!(conflicts[0].id, "e1");
}

#[test]
fn adjacent_candidate_is_not_a_conflict() {
    // Event 09:00-10:00, candidate 10:00-11:00: half-open boundary.
    let events = vec![event("e1", 3, 9, 0, 10, 0)];

    let conflicts =
        find_conflicts(&events, at(3, 10, 0), at(3, 11, 0), &ConflictCheck::default()).unwrap();

    assert!(conflicts.is_empty(), "back-to-back bookings must not conflict");
}

#[test]
fn containment_both_directions_is_a_conflict() {
    // Candidate 09:00-11:00 fully contains event 09:30-10:00.
    let small = vec![event("inner", 3, 9, 30, 10, 0)];
    let conflicts =
        find_conflicts(&small, at(3, 9, 0), at(3, 11, 0), &ConflictCheck::default()).unwrap();
    assert_eq!(conflicts.len(), 1);

    // Event 09:00-11:00 fully contains candidate 09:30-10:00.
    let big = vec![event("outer", 3, 9, 0, 11, 0)];
    let conflicts =
        find_conflicts(&big, at(3, 9, 30), at(3, 10, 0), &ConflictCheck::default()).unwrap();
    assert_eq!(conflicts.len(), 1);
}

#[test]
fn exclude_event_id_skips_self() {
    let events = vec![event("editing", 3, 9, 0, 10, 0), event("other", 3, 9, 30, 10, 30)];

    let conflicts = find_conflicts(
        &events,
        at(3, 9, 0),
        at(3, 10, 0),
        &ConflictCheck::excluding("editing"),
    )
    .unwrap();

    assert_eq!(conflicts.len(), 1, "only the non-excluded event should remain");
    assert_eq!(conflicts[0].id, "other");
}

#[test]
fn cancelled_events_block_by_default() {
    let mut cancelled = event("c1", 3, 9, 0, 10, 0);
    cancelled.status = EventStatus::Cancelled;
    let events = vec![cancelled];

    let conflicts =
        find_conflicts(&events, at(3, 9, 30), at(3, 10, 30), &ConflictCheck::default()).unwrap();

    assert_eq!(conflicts.len(), 1, "default check keeps cancelled events");
}

#[test]
fn without_cancelled_frees_the_slot() {
    let mut cancelled = event("c1", 3, 9, 0, 10, 0);
    cancelled.status = EventStatus::Cancelled;
    let events = vec![cancelled, event("live", 3, 11, 0, 12, 0)];

    let conflicts = find_conflicts(
        &events,
        at(3, 9, 30),
        at(3, 10, 30),
        &ConflictCheck::default().without_cancelled(),
    )
    .unwrap();

    assert!(conflicts.is_empty());
}

#[test]
fn conflicts_preserve_fetch_order() {
    let events = vec![
        event("later", 3, 10, 0, 11, 0),
        event("earlier", 3, 9, 0, 10, 30),
    ];

    let conflicts =
        find_conflicts(&events, at(3, 9, 0), at(3, 11, 0), &ConflictCheck::default()).unwrap();

    let ids: Vec<&str> = conflicts.iter().map(|e| e.id.as_str()).collect();
    assert_eq!(ids, vec!["later", "earlier"], "no re-sorting of store order");
}

#[test]
fn inverted_interval_is_rejected() {
    let err = find_conflicts(&[], at(3, 10, 0), at(3, 9, 0), &ConflictCheck::default())
        .unwrap_err();
    assert!(matches!(err, ScheduleError::InvalidInterval { .. }));
}

#[test]
fn zero_length_interval_is_rejected() {
    let err = find_conflicts(&[], at(3, 10, 0), at(3, 10, 0), &ConflictCheck::default())
        .unwrap_err();
    assert!(matches!(err, ScheduleError::InvalidInterval { .. }));
}

#[test]
fn empty_calendar_has_no_conflicts() {
    let conflicts =
        find_conflicts(&[], at(3, 9, 0), at(3, 10, 0), &ConflictCheck::default()).unwrap();
    assert!(conflicts.is_empty());
}
