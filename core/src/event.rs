// SPDX-FileCopyrightText: 2025 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use crate::date::CalendarDate;

/// Trait representing an event that can appear in a calendar cell.
pub trait Event {
    /// The display title of the event.
    fn title(&self) -> &str;

    /// Whether the event occurs on the given date.
    fn occurs_on(&self, date: CalendarDate) -> bool;
}

/// An event recognized every year on the same month and day.
///
/// Derived from a stored `{date, title}` record by discarding the year;
/// read-only after the one-shot load.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecurringEvent {
    pub title: String,

    /// The zero-based month the event recurs in.
    pub month: u32,

    /// The day of month the event recurs on.
    pub day: u32,
}

impl Event for RecurringEvent {
    fn title(&self) -> &str {
        &self.title
    }

    fn occurs_on(&self, date: CalendarDate) -> bool {
        self.month == date.month() && self.day == date.day()
    }
}

/// A user-added event, valid only for one exact date.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AdHocEvent {
    pub title: String,
    pub date: CalendarDate,
}

impl Event for AdHocEvent {
    fn title(&self) -> &str {
        &self.title
    }

    fn occurs_on(&self, date: CalendarDate) -> bool {
        self.date == date
    }
}

/// Wire record of the recurring event source.
#[derive(Debug, Clone, serde::Deserialize)]
pub struct EventRecord {
    /// The stored date as `YYYY-MM-DD`; only month and day are kept.
    pub date: String,

    pub title: String,
}

impl EventRecord {
    /// Converts the record into a recurring event, discarding the year.
    /// Records with malformed dates yield `None` and are excluded.
    pub fn recurring(&self) -> Option<RecurringEvent> {
        let date: CalendarDate = self.date.parse().ok()?;
        Some(RecurringEvent {
            title: self.title.clone(),
            month: date.month(),
            day: date.day(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(s: &str) -> CalendarDate {
        s.parse().unwrap()
    }

    #[test]
    fn recurring_event_matches_every_year() {
        let record = EventRecord {
            date: "2020-03-15".to_string(),
            title: "X".to_string(),
        };
        let event = record.recurring().unwrap();

        assert!(event.occurs_on(date("2020-03-15")));
        assert!(event.occurs_on(date("2024-03-15")));
        assert!(event.occurs_on(date("2099-03-15")));
        assert!(!event.occurs_on(date("2020-03-16")));
        assert!(!event.occurs_on(date("2024-03-16")));
        assert!(!event.occurs_on(date("2020-04-15")));
    }

    #[test]
    fn ad_hoc_event_matches_exact_date_only() {
        let event = AdHocEvent {
            title: "Y".to_string(),
            date: date("2025-03-15"),
        };

        assert!(event.occurs_on(date("2025-03-15")));
        assert!(!event.occurs_on(date("2026-03-15")));
        assert!(!event.occurs_on(date("2025-03-16")));
    }

    #[test]
    fn malformed_record_yields_no_event() {
        let record = EventRecord {
            date: "soon".to_string(),
            title: "X".to_string(),
        };
        assert!(record.recurring().is_none());
    }
}
