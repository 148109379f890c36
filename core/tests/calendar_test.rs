// SPDX-FileCopyrightText: 2025 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

//! Session-level tests for the calendar facade: the one-shot load, the
//! add/prune lifecycle and the month view reconciliation.

mod common;

use mocal_core::{Calendar, Event, RecurringEvent, leading_blanks, month_cells};

use crate::common::{
    event_record_json, sample_corrupt_source, sample_events_json,
    sample_events_with_bad_dates_json, test_config, write_events_file,
};

#[tokio::test]
async fn open_loads_the_recurring_source() {
    let (_dir, path) = write_events_file(&sample_events_json());
    let calendar = Calendar::open(&test_config(path)).await;

    assert!(!calendar.is_loading());
    assert_eq!(calendar.store().recurring().len(), 3);

    let titles: Vec<_> = calendar
        .store()
        .recurring()
        .iter()
        .map(|e| e.title.as_str())
        .collect();
    assert_eq!(titles, ["Spring cleanup", "Family dinner", "Street market"]);
}

#[tokio::test]
async fn open_with_missing_source_still_renders() {
    let dir = tempfile::TempDir::new().unwrap();
    let calendar = Calendar::open(&test_config(dir.path().join("missing.json"))).await;

    assert!(!calendar.is_loading());
    assert!(calendar.store().recurring().is_empty());

    let view = calendar.month_view();
    assert!(!view.loading);
    assert!(!view.cells.is_empty());
}

#[tokio::test]
async fn open_with_corrupt_source_still_renders() {
    let (_dir, path) = write_events_file(&sample_corrupt_source());
    let calendar = Calendar::open(&test_config(path)).await;

    assert!(!calendar.is_loading());
    assert!(calendar.store().recurring().is_empty());
    assert!(!calendar.month_view().cells.is_empty());
}

#[tokio::test]
async fn malformed_record_dates_are_skipped() {
    let (_dir, path) = write_events_file(&sample_events_with_bad_dates_json());
    let calendar = Calendar::open(&test_config(path)).await;

    let titles: Vec<_> = calendar
        .store()
        .recurring()
        .iter()
        .map(|e| e.title.as_str())
        .collect();
    assert_eq!(titles, ["Kept"]);
}

#[tokio::test]
async fn load_resolves_only_once() {
    let (_dir, path) = write_events_file(&sample_events_json());
    let mut calendar = Calendar::open(&test_config(path)).await;

    calendar.finish_load(vec![RecurringEvent {
        title: "late".to_string(),
        month: 0,
        day: 1,
    }]);

    assert_eq!(calendar.store().recurring().len(), 3);
}

#[tokio::test]
async fn added_event_appears_in_todays_cell() {
    let dir = tempfile::TempDir::new().unwrap();
    let mut calendar = Calendar::open(&test_config(dir.path().join("missing.json"))).await;

    let today = calendar.today();
    assert!(calendar.add_event("Dentist", &today.to_string()));

    let view = calendar.month_view();
    let cell = view.cells.iter().find(|c| c.is_today).unwrap();
    let titles: Vec<_> = cell.events.iter().map(|e| e.title()).collect();
    assert_eq!(titles, ["Dentist"]);
}

#[tokio::test]
async fn recurring_events_render_before_ad_hoc_events() {
    // A recurring record on today's month and day, stored under an
    // unrelated year; 2000 is a leap year, so Feb 29 stays valid.
    let mut calendar = Calendar::new();
    let today = calendar.today();
    let record = format!("2000-{:02}-{:02}", today.month() + 1, today.day());

    let (_dir, path) = write_events_file(&event_record_json(&record, "Anniversary"));
    let events = mocal_core::EventStore::fetch_recurring(&path).await;
    calendar.finish_load(events);
    calendar.add_event("Dentist", &today.to_string());

    let view = calendar.month_view();
    let cell = view.cells.iter().find(|c| c.is_today).unwrap();
    let titles: Vec<_> = cell.events.iter().map(|e| e.title()).collect();
    assert_eq!(titles, ["Anniversary", "Dentist"]);
}

#[tokio::test]
async fn navigation_prunes_expired_events() {
    let dir = tempfile::TempDir::new().unwrap();
    let mut calendar = Calendar::open(&test_config(dir.path().join("missing.json"))).await;

    let yesterday = calendar.today().add_days(-1);
    assert!(calendar.add_event("Expired", &yesterday.to_string()));
    assert_eq!(calendar.store().ad_hoc().len(), 1);

    calendar.next_month();
    assert!(calendar.store().ad_hoc().is_empty());

    // Browsing back does not resurrect the event.
    calendar.prev_month();
    assert!(calendar.store().ad_hoc().is_empty());
}

#[tokio::test]
async fn same_day_events_survive_pruning() {
    let dir = tempfile::TempDir::new().unwrap();
    let mut calendar = Calendar::open(&test_config(dir.path().join("missing.json"))).await;

    let today = calendar.today();
    calendar.add_event("Kept", &today.to_string());
    calendar.add_event("Future", &today.add_days(30).to_string());

    calendar.next_month();
    calendar.prev_month();

    let titles: Vec<_> = calendar
        .store()
        .ad_hoc()
        .iter()
        .map(|e| e.title.as_str())
        .collect();
    assert_eq!(titles, ["Kept", "Future"]);
}

#[tokio::test]
async fn invalid_submissions_leave_the_store_unchanged() {
    let dir = tempfile::TempDir::new().unwrap();
    let mut calendar = Calendar::open(&test_config(dir.path().join("missing.json"))).await;

    assert!(!calendar.add_event("", "2025-01-01"));
    assert!(!calendar.add_event("Title", "not-a-date"));
    assert!(calendar.store().ad_hoc().is_empty());
}

#[tokio::test]
async fn month_view_shape_matches_the_grid_everywhere() {
    let dir = tempfile::TempDir::new().unwrap();
    let mut calendar = Calendar::open(&test_config(dir.path().join("missing.json"))).await;

    for _ in 0..14 {
        let view = calendar.month_view();
        let expected = month_cells(view.year, view.month);
        assert_eq!(view.cells.len(), expected.len());
        assert!(leading_blanks(view.year, view.month) <= 6);
        calendar.next_month();
    }
}
