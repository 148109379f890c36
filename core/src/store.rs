// SPDX-FileCopyrightText: 2025 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use std::path::Path;

use crate::date::CalendarDate;
use crate::event::{AdHocEvent, Event, EventRecord, RecurringEvent};
use crate::grid::CalendarCell;

/// Holds the two event collections and their reconciliation rules:
/// the read-only recurring set resolved by a one-shot load, and the
/// session-local ad-hoc set appended by the user and pruned by date.
#[derive(Debug, Default)]
pub struct EventStore {
    recurring: Vec<RecurringEvent>,
    ad_hoc: Vec<AdHocEvent>,
    loaded: bool,
}

impl EventStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// One-shot fetch of the recurring event source. Any failure (a
    /// missing file, an I/O error, a parse error) degrades to an empty
    /// set: the grid must still render.
    pub async fn fetch_recurring(path: &Path) -> Vec<RecurringEvent> {
        let content = match tokio::fs::read_to_string(path).await {
            Ok(content) => content,
            Err(e) => {
                tracing::warn!(path = %path.display(), "failed to read event source: {e}");
                return Vec::new();
            }
        };

        let records: Vec<EventRecord> = match serde_json::from_str(&content) {
            Ok(records) => records,
            Err(e) => {
                tracing::warn!(path = %path.display(), "failed to parse event source: {e}");
                return Vec::new();
            }
        };

        records.iter().filter_map(EventRecord::recurring).collect()
    }

    /// Resolves the one-shot load. The recurring set is never mutated
    /// afterwards; a second resolution is ignored.
    pub fn finish_load(&mut self, events: Vec<RecurringEvent>) {
        if self.loaded {
            tracing::warn!("recurring events already loaded, ignoring second resolution");
            return;
        }
        self.recurring = events;
        self.loaded = true;
    }

    /// Whether the one-shot load has resolved. Drives the presentation
    /// shell's loading indicator.
    pub fn is_loaded(&self) -> bool {
        self.loaded
    }

    pub fn recurring(&self) -> &[RecurringEvent] {
        &self.recurring
    }

    pub fn ad_hoc(&self) -> &[AdHocEvent] {
        &self.ad_hoc
    }

    /// Appends a user event, preserving insertion order. Submissions
    /// with an empty title or a date that does not name a real calendar
    /// date are discarded without surfacing an error; the return value
    /// reports whether the event was kept.
    pub fn add_ad_hoc(&mut self, title: &str, date: &str) -> bool {
        if title.is_empty() {
            tracing::debug!("discarding ad-hoc event with empty title");
            return false;
        }

        let date: CalendarDate = match date.parse() {
            Ok(date) => date,
            Err(e) => {
                tracing::debug!(date, "discarding ad-hoc event: {e}");
                return false;
            }
        };

        self.ad_hoc.push(AdHocEvent {
            title: title.to_string(),
            date,
        });
        true
    }

    /// Drops every ad-hoc event dated strictly before `today`. In
    /// place and idempotent; same-day events are kept.
    pub fn prune_ad_hoc(&mut self, today: CalendarDate) {
        let before = self.ad_hoc.len();
        self.ad_hoc.retain(|event| event.date >= today);
        let removed = before - self.ad_hoc.len();
        if removed > 0 {
            tracing::debug!(removed, %today, "pruned expired ad-hoc events");
        }
    }

    /// The ordered union of events matching a cell: recurring events
    /// (month/day equality, year ignored) before ad-hoc events (exact
    /// date), each preserving its original order. Duplicate titles are
    /// not collapsed; blank cells match nothing.
    pub fn events_for(&self, cell: &CalendarCell) -> Vec<&dyn Event> {
        let Some(date) = cell.date() else {
            return Vec::new();
        };

        let recurring = self
            .recurring
            .iter()
            .filter(|event| event.occurs_on(date))
            .map(|event| event as &dyn Event);
        let ad_hoc = self
            .ad_hoc
            .iter()
            .filter(|event| event.occurs_on(date))
            .map(|event| event as &dyn Event);
        recurring.chain(ad_hoc).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(s: &str) -> CalendarDate {
        s.parse().unwrap()
    }

    fn cell(s: &str) -> CalendarCell {
        CalendarCell::Day(date(s))
    }

    fn store_with_recurring(dates: &[(&str, &str)]) -> EventStore {
        let mut store = EventStore::new();
        let events = dates
            .iter()
            .filter_map(|(date, title)| {
                EventRecord {
                    date: date.to_string(),
                    title: title.to_string(),
                }
                .recurring()
            })
            .collect();
        store.finish_load(events);
        store
    }

    #[test]
    fn add_rejects_empty_title() {
        let mut store = EventStore::new();
        assert!(!store.add_ad_hoc("", "2025-01-01"));
        assert!(store.ad_hoc().is_empty());
    }

    #[test]
    fn add_rejects_malformed_date() {
        let mut store = EventStore::new();
        assert!(!store.add_ad_hoc("Title", "not-a-date"));
        assert!(!store.add_ad_hoc("Title", "2025-02-30"));
        assert!(store.ad_hoc().is_empty());
    }

    #[test]
    fn add_preserves_insertion_order() {
        let mut store = EventStore::new();
        assert!(store.add_ad_hoc("first", "2025-06-10"));
        assert!(store.add_ad_hoc("second", "2025-06-10"));
        let titles: Vec<_> = store.ad_hoc().iter().map(|e| e.title.as_str()).collect();
        assert_eq!(titles, ["first", "second"]);
    }

    #[test]
    fn prune_keeps_same_day_events() {
        let mut store = EventStore::new();
        store.add_ad_hoc("expired", "2025-06-09");
        store.add_ad_hoc("today", "2025-06-10");
        store.add_ad_hoc("upcoming", "2025-06-11");

        store.prune_ad_hoc(date("2025-06-10"));

        let titles: Vec<_> = store.ad_hoc().iter().map(|e| e.title.as_str()).collect();
        assert_eq!(titles, ["today", "upcoming"]);
    }

    #[test]
    fn prune_is_idempotent() {
        let mut store = EventStore::new();
        store.add_ad_hoc("expired", "2025-06-09");
        store.add_ad_hoc("today", "2025-06-10");

        store.prune_ad_hoc(date("2025-06-10"));
        store.prune_ad_hoc(date("2025-06-10"));

        assert_eq!(store.ad_hoc().len(), 1);
    }

    #[test]
    fn recurring_matches_ignore_the_year() {
        let store = store_with_recurring(&[("2020-03-15", "X")]);

        assert_eq!(store.events_for(&cell("2020-03-15")).len(), 1);
        assert_eq!(store.events_for(&cell("2024-03-15")).len(), 1);
        assert_eq!(store.events_for(&cell("2099-03-15")).len(), 1);
        assert!(store.events_for(&cell("2024-03-16")).is_empty());
    }

    #[test]
    fn ad_hoc_matches_require_exact_date() {
        let mut store = EventStore::new();
        store.add_ad_hoc("Y", "2025-03-15");

        assert_eq!(store.events_for(&cell("2025-03-15")).len(), 1);
        assert!(store.events_for(&cell("2026-03-15")).is_empty());
    }

    #[test]
    fn recurring_events_come_before_ad_hoc() {
        let mut store = store_with_recurring(&[("2020-06-10", "recurring")]);
        store.add_ad_hoc("ad-hoc", "2025-06-10");

        let titles: Vec<_> = store
            .events_for(&cell("2025-06-10"))
            .iter()
            .map(|e| e.title().to_string())
            .collect();
        assert_eq!(titles, ["recurring", "ad-hoc"]);
    }

    #[test]
    fn duplicate_events_are_not_collapsed() {
        let mut store = store_with_recurring(&[("2020-06-10", "twin"), ("2021-06-10", "twin")]);
        store.add_ad_hoc("twin", "2025-06-10");

        assert_eq!(store.events_for(&cell("2025-06-10")).len(), 3);
    }

    #[test]
    fn blank_cells_match_nothing() {
        let mut store = store_with_recurring(&[("2020-06-10", "X")]);
        store.add_ad_hoc("Y", "2025-06-10");
        assert!(store.events_for(&CalendarCell::Blank).is_empty());
    }

    #[test]
    fn second_load_resolution_is_ignored() {
        let mut store = store_with_recurring(&[("2020-06-10", "kept")]);
        store.finish_load(vec![RecurringEvent {
            title: "dropped".to_string(),
            month: 0,
            day: 1,
        }]);

        assert_eq!(store.recurring().len(), 1);
        assert_eq!(store.recurring()[0].title, "kept");
    }
}
