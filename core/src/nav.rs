// SPDX-FileCopyrightText: 2025 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use crate::date::CalendarDate;

/// The (year, month) pair currently displayed.
///
/// A pure state machine: `prev` and `next` are the only transitions,
/// navigation is unbounded in both directions and there is no history.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavigationState {
    year: i32,
    month: u32,
}

impl NavigationState {
    /// Creates a state for the given year and zero-based month.
    pub fn new(year: i32, month: u32) -> Self {
        debug_assert!(month < 12);
        Self { year, month }
    }

    /// The state displaying the month containing `date`.
    pub fn at(date: CalendarDate) -> Self {
        Self::new(date.year(), date.month())
    }

    pub const fn year(self) -> i32 {
        self.year
    }

    /// The zero-based month, `0` = January.
    pub const fn month(self) -> u32 {
        self.month
    }

    /// The previous month, rolling the year back from January.
    pub fn prev(self) -> Self {
        match self.month {
            0 => Self { year: self.year - 1, month: 11 },
            _ => Self { month: self.month - 1, ..self },
        }
    }

    /// The next month, rolling the year forward from December.
    pub fn next(self) -> Self {
        match self.month {
            11 => Self { year: self.year + 1, month: 0 },
            _ => Self { month: self.month + 1, ..self },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn prev_rolls_year_back_from_january() {
        assert_eq!(NavigationState::new(2025, 0).prev(), NavigationState::new(2024, 11));
        assert_eq!(NavigationState::new(2025, 6).prev(), NavigationState::new(2025, 5));
    }

    #[test]
    fn next_rolls_year_forward_from_december() {
        assert_eq!(NavigationState::new(2025, 11).next(), NavigationState::new(2026, 0));
        assert_eq!(NavigationState::new(2025, 6).next(), NavigationState::new(2025, 7));
    }

    #[test]
    fn prev_and_next_round_trip() {
        let start = NavigationState::new(2025, 0);
        assert_eq!(start.prev().next(), start);
        assert_eq!(start.next().prev(), start);

        let mut state = start;
        for _ in 0..24 {
            state = state.next();
        }
        assert_eq!(state, NavigationState::new(2027, 0));
        for _ in 0..24 {
            state = state.prev();
        }
        assert_eq!(state, start);
    }

    #[test]
    fn at_uses_the_dates_month() {
        let date: CalendarDate = "2025-06-10".parse().unwrap();
        let state = NavigationState::at(date);
        assert_eq!(state.year(), 2025);
        assert_eq!(state.month(), 5);
    }
}
