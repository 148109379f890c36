// SPDX-FileCopyrightText: 2025 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use std::error::Error;
use std::fmt::Write as _;

use clap::{ArgMatches, Command, arg, value_parser};
use clap_num::number_range;
use colored::Colorize;

use mocal_core::{Calendar, CellView, Config, Event, MonthView, NavigationState};

use crate::util::{WEEKDAYS, month_title};

/// Print a month grid to stdout: the read-only render path of the same
/// view-model the TUI draws.
#[derive(Debug, Clone, Copy)]
pub struct CmdMonth {
    /// The year to print, defaulting to the current one.
    pub year: Option<i32>,

    /// The one-based month to print, defaulting to the current one.
    pub month: Option<u32>,
}

impl CmdMonth {
    pub const NAME: &str = "month";

    pub fn command() -> Command {
        fn from_1_to_12(s: &str) -> Result<u32, String> {
            number_range(s, 1, 12)
        }

        Command::new(Self::NAME)
            .about("Print a month grid to stdout")
            .arg(
                arg!(--year <YEAR> "Year to print")
                    .value_parser(value_parser!(i32))
                    .required(false),
            )
            .arg(
                arg!(--month <MONTH> "Month to print (1-12)")
                    .value_parser(from_1_to_12)
                    .required(false),
            )
    }

    pub fn from(matches: &ArgMatches) -> Self {
        Self {
            year: matches.get_one("year").copied(),
            month: matches.get_one("month").copied(),
        }
    }

    pub async fn run(self, config: &Config) -> Result<(), Box<dyn Error>> {
        let calendar = Calendar::open(config).await;

        let displayed = calendar.view();
        let view = NavigationState::new(
            self.year.unwrap_or(displayed.year()),
            self.month.map_or(displayed.month(), |m| m - 1),
        );

        print!("{}", format_month(&calendar.month_view_of(view)));
        Ok(())
    }
}

const CELL_WIDTH: usize = 4;

fn format_month(view: &MonthView) -> String {
    let mut out = String::new();

    let width = CELL_WIDTH * WEEKDAYS.len();
    let title = month_title(view.year, view.month);
    let padding = width.saturating_sub(title.len()) / 2;
    let _ = writeln!(out, "{}{}", " ".repeat(padding), title.bold());

    for day in WEEKDAYS {
        let _ = write!(out, "{:>width$}", day, width = CELL_WIDTH);
    }
    out.push('\n');

    for week in view.cells.chunks(WEEKDAYS.len()) {
        for cell in week {
            let _ = write!(out, "{}", format_cell(cell));
        }
        out.push('\n');
    }

    let listing = format_events(view);
    if !listing.is_empty() {
        out.push('\n');
        out.push_str(&listing);
    }

    out
}

fn format_cell(cell: &CellView) -> String {
    let Some(date) = cell.cell.date() else {
        return " ".repeat(CELL_WIDTH);
    };

    let day = format!("{:>2}", date.day());
    let day = match (cell.is_today, cell.events.is_empty()) {
        (true, _) => day.reversed().bold().to_string(),
        (false, false) => day.blue().bold().to_string(),
        (false, true) => day,
    };
    // Colorized text carries invisible escape codes, so pad by hand.
    format!("  {day}")
}

fn format_events(view: &MonthView) -> String {
    let mut out = String::new();
    for cell in &view.cells {
        let Some(date) = cell.cell.date() else { continue };
        for event in &cell.events {
            let _ = writeln!(out, "  {}  {}", date.to_string().cyan(), event.title());
        }
    }
    out
}
