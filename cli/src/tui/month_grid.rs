// SPDX-FileCopyrightText: 2025 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use ratatui::prelude::*;
use ratatui::widgets::Paragraph;

use mocal_core::{CellView, Event, MonthView};

use crate::util::truncate_to_width;

/// Renders the cell sequence of a month view as a 7-column grid. The
/// weekday header is drawn by the page, not here.
pub struct MonthGrid<'a> {
    pub view: &'a MonthView<'a>,
}

impl Widget for &MonthGrid<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.is_empty() {
            return;
        }

        let weeks: Vec<&[CellView]> = self.view.cells.chunks(7).collect();
        let rows = Layout::vertical(
            weeks
                .iter()
                .map(|_| Constraint::Ratio(1, weeks.len() as u32)),
        )
        .split(area);

        for (week, row) in weeks.iter().zip(rows.iter()) {
            let columns = Layout::horizontal([Constraint::Ratio(1, 7); 7]).split(*row);
            for (cell, column) in week.iter().zip(columns.iter()) {
                render_cell(cell, *column, buf);
            }
        }
    }
}

fn render_cell(cell: &CellView, area: Rect, buf: &mut Buffer) {
    let Some(date) = cell.cell.date() else {
        return;
    };
    if area.is_empty() {
        return;
    }

    let day = format!("{:>2}", date.day());
    let day = match cell.is_today {
        true => Line::from(day.bold().black().on_blue()),
        false => Line::from(day.bold()),
    };

    let width = area.width.saturating_sub(1) as usize;
    let mut lines = vec![day];
    lines.extend(
        cell.events
            .iter()
            .map(|event| Line::from(truncate_to_width(event.title(), width).blue())),
    );

    Paragraph::new(lines).render(area, buf);
}
