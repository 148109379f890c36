// SPDX-FileCopyrightText: 2025 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use std::fmt::Display;
use std::str::FromStr;

use chrono::{Datelike, Local, NaiveDate};

/// A calendar date: year, zero-based month and day of month.
///
/// Ordered by (year, month, day), which is the calendar order. The
/// month-grid arithmetic (day of week, day offsets) is proleptic
/// Gregorian, computed through a days-since-epoch conversion rather
/// than through a date library.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct CalendarDate {
    year: i32,
    month: u32,
    day: u32,
}

impl CalendarDate {
    /// Creates a date from a year, a zero-based month and a day of
    /// month. Returns `None` unless the triple names a real date.
    pub fn from_ymd(year: i32, month: u32, day: u32) -> Option<Self> {
        if month > 11 || day == 0 || day > days_in_month(year, month) {
            return None;
        }
        Some(Self { year, month, day })
    }

    /// The current real-world date in the local timezone.
    pub fn today() -> Self {
        Local::now().date_naive().into()
    }

    pub const fn year(self) -> i32 {
        self.year
    }

    /// The zero-based month, `0` = January.
    pub const fn month(self) -> u32 {
        self.month
    }

    pub const fn day(self) -> u32 {
        self.day
    }

    /// The day of week, `0` = Sunday .. `6` = Saturday.
    pub fn day_of_week(self) -> u32 {
        // 1970-01-01 was a Thursday.
        (self.to_days() + 4).rem_euclid(7) as u32
    }

    /// The first day of this date's month.
    pub fn start_of_month(self) -> Self {
        Self { day: 1, ..self }
    }

    /// The date `days` days after (or before, if negative) this one.
    pub fn add_days(self, days: i64) -> Self {
        Self::from_days(self.to_days() + days)
    }

    /// Days since 1970-01-01 in the proleptic Gregorian calendar.
    fn to_days(self) -> i64 {
        let m = i64::from(self.month) + 1;
        let d = i64::from(self.day);
        let y = i64::from(self.year) - i64::from(m <= 2);
        let era = y.div_euclid(400);
        let yoe = y - era * 400;
        let doy = (153 * (m + if m > 2 { -3 } else { 9 }) + 2) / 5 + d - 1;
        let doe = yoe * 365 + yoe / 4 - yoe / 100 + doy;
        era * 146097 + doe - 719468
    }

    fn from_days(days: i64) -> Self {
        let z = days + 719468;
        let era = z.div_euclid(146097);
        let doe = z - era * 146097;
        let yoe = (doe - doe / 1460 + doe / 36524 - doe / 146096) / 365;
        let doy = doe - (365 * yoe + yoe / 4 - yoe / 100);
        let mp = (5 * doy + 2) / 153;
        let d = doy - (153 * mp + 2) / 5 + 1;
        let m = if mp < 10 { mp + 3 } else { mp - 9 };
        let y = yoe + era * 400 + i64::from(m <= 2);
        Self {
            year: y as i32,
            month: (m - 1) as u32,
            day: d as u32,
        }
    }
}

impl From<NaiveDate> for CalendarDate {
    fn from(date: NaiveDate) -> Self {
        Self {
            year: date.year(),
            month: date.month0(),
            day: date.day(),
        }
    }
}

impl FromStr for CalendarDate {
    type Err = &'static str;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        NaiveDate::parse_from_str(s, "%Y-%m-%d")
            .map(Into::into)
            .map_err(|_| "Invalid date format. Expected format: YYYY-MM-DD")
    }
}

impl Display for CalendarDate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:04}-{:02}-{:02}", self.year, self.month + 1, self.day)
    }
}

/// Divisible by 4, not by 100, unless by 400.
pub const fn is_leap_year(year: i32) -> bool {
    year % 4 == 0 && (year % 100 != 0 || year % 400 == 0)
}

/// The number of days in the given zero-based month.
pub const fn days_in_month(year: i32, month: u32) -> u32 {
    match month {
        1 if is_leap_year(year) => 29,
        1 => 28,
        3 | 5 | 8 | 10 => 30,
        _ => 31,
    }
}
