// SPDX-FileCopyrightText: 2025 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use crate::date::{CalendarDate, days_in_month};

/// One position in a rendered month grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CalendarCell {
    /// Padding before the first day of the month.
    Blank,

    /// A day of the displayed month.
    Day(CalendarDate),
}

impl CalendarCell {
    /// The date bound to this cell, `None` for padding.
    pub fn date(&self) -> Option<CalendarDate> {
        match self {
            CalendarCell::Blank => None,
            CalendarCell::Day(date) => Some(*date),
        }
    }
}

/// The number of blank cells before the 1st of the month, which equals
/// the day of week of the 1st (`0` = Sunday).
pub fn leading_blanks(year: i32, month: u32) -> u32 {
    CalendarDate::from_ymd(year, month, 1)
        .expect("the 1st exists in every month")
        .day_of_week()
}

/// The ordered cell sequence for a 7-column month grid: leading blank
/// cells followed by one cell per day of the month. Valid for any year
/// and any month already normalized to `0..12`.
pub fn month_cells(year: i32, month: u32) -> Vec<CalendarCell> {
    debug_assert!(month < 12);

    let blanks = leading_blanks(year, month);
    let days = days_in_month(year, month);

    let mut cells = Vec::with_capacity((blanks + days) as usize);
    cells.extend((0..blanks).map(|_| CalendarCell::Blank));
    cells.extend((1..=days).map(|day| {
        let date = CalendarDate::from_ymd(year, month, day).expect("day is within the month");
        CalendarCell::Day(date)
    }));
    cells
}
