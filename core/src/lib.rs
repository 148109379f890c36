// SPDX-FileCopyrightText: 2025 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

mod calendar;
mod config;
mod date;
mod event;
mod grid;
mod nav;
mod store;

pub use crate::calendar::{Calendar, CellView, MonthView};
pub use crate::config::{APP_NAME, Config};
pub use crate::date::{CalendarDate, days_in_month, is_leap_year};
pub use crate::event::{AdHocEvent, Event, EventRecord, RecurringEvent};
pub use crate::grid::{CalendarCell, leading_blanks, month_cells};
pub use crate::nav::NavigationState;
pub use crate::store::EventStore;
