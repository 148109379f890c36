// SPDX-FileCopyrightText: 2025 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use crate::config::Config;
use crate::date::CalendarDate;
use crate::event::{Event, RecurringEvent};
use crate::grid::{CalendarCell, month_cells};
use crate::nav::NavigationState;
use crate::store::EventStore;

/// A calendar session: the event store, the displayed month and the
/// captured real-world date.
///
/// All mutations run as discrete, non-overlapping reactions to user
/// actions or the one-time load completion; the session is owned by a
/// single logical thread and never locked.
#[derive(Debug)]
pub struct Calendar {
    today: CalendarDate,
    view: NavigationState,
    store: EventStore,
}

impl Default for Calendar {
    fn default() -> Self {
        Self::new()
    }
}

impl Calendar {
    /// Creates a session displaying the current real-world month, with
    /// an empty store whose one-shot load has not resolved yet.
    pub fn new() -> Self {
        let today = CalendarDate::today();
        Self {
            today,
            view: NavigationState::at(today),
            store: EventStore::new(),
        }
    }

    /// Creates a session and awaits the one-shot recurring load inline.
    /// Load failures degrade to an empty recurring set.
    pub async fn open(config: &Config) -> Self {
        let mut calendar = Self::new();
        let events = EventStore::fetch_recurring(config.events_path()).await;
        calendar.finish_load(events);
        calendar
    }

    /// Resolves the recurring load and runs the initial pruning pass.
    pub fn finish_load(&mut self, events: Vec<RecurringEvent>) {
        self.store.finish_load(events);
        self.store.prune_ad_hoc(self.today);
    }

    /// Whether the one-shot load is still unresolved.
    pub fn is_loading(&self) -> bool {
        !self.store.is_loaded()
    }

    /// The real-world date captured at the last refresh.
    pub fn today(&self) -> CalendarDate {
        self.today
    }

    /// Re-reads the real-world clock.
    pub fn refresh_today(&mut self) {
        self.today = CalendarDate::today();
    }

    /// The displayed (year, month) pair.
    pub fn view(&self) -> NavigationState {
        self.view
    }

    /// Displays the previous month. Pruning re-runs against the
    /// real-world date, not the browsed month: moving into the past
    /// does not resurrect expired ad-hoc events.
    pub fn prev_month(&mut self) {
        self.view = self.view.prev();
        self.refresh_today();
        self.store.prune_ad_hoc(self.today);
    }

    /// Displays the next month; see [`Self::prev_month`] for pruning.
    pub fn next_month(&mut self) {
        self.view = self.view.next();
        self.refresh_today();
        self.store.prune_ad_hoc(self.today);
    }

    /// Appends a user event. Invalid submissions (empty title or a
    /// malformed date) are dropped silently; the return value reports
    /// whether the event was kept.
    pub fn add_event(&mut self, title: &str, date: &str) -> bool {
        self.store.add_ad_hoc(title, date)
    }

    pub fn store(&self) -> &EventStore {
        &self.store
    }

    /// Derives the view-model for the displayed month: the ordered cell
    /// sequence, each cell resolved against both event collections.
    /// Recomputed on demand, never cached.
    pub fn month_view(&self) -> MonthView<'_> {
        self.month_view_of(self.view)
    }

    /// Derives the view-model for an arbitrary month without moving the
    /// displayed one.
    pub fn month_view_of(&self, view: NavigationState) -> MonthView<'_> {
        let cells = month_cells(view.year(), view.month())
            .into_iter()
            .map(|cell| CellView {
                events: self.store.events_for(&cell),
                is_today: cell.date() == Some(self.today),
                cell,
            })
            .collect();

        MonthView {
            year: view.year(),
            month: view.month(),
            loading: self.is_loading(),
            cells,
        }
    }
}

/// View-model of one rendered month.
pub struct MonthView<'a> {
    pub year: i32,

    /// The zero-based displayed month.
    pub month: u32,

    /// Whether the recurring load is still unresolved.
    pub loading: bool,

    pub cells: Vec<CellView<'a>>,
}

/// One grid cell paired with its resolved events.
pub struct CellView<'a> {
    pub cell: CalendarCell,
    pub events: Vec<&'a dyn Event>,
    pub is_today: bool,
}
