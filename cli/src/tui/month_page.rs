// SPDX-FileCopyrightText: 2025 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use std::{cell::RefCell, rc::Rc};

use ratatui::crossterm::event::{KeyCode, KeyEvent};
use ratatui::prelude::*;
use ratatui::symbols::border;
use ratatui::widgets::{Block, Clear, Paragraph};

use crate::tui::calendar_store::CalendarStoreLike;
use crate::tui::component::{Component, Message};
use crate::tui::component_form::{Form, FormItem};
use crate::tui::dispatcher::{Action, Dispatcher};
use crate::tui::event_form::new_event_form;
use crate::tui::form_store::FormStoreLike;
use crate::tui::month_grid::MonthGrid;
use crate::util::{WEEKDAYS, month_title};

/// The month view page: header, weekday row, grid, loading indicator
/// and the add-event form overlay.
pub struct MonthPage<S> {
    form: Form<S, Box<dyn FormItem<S>>>,
}

impl<S: CalendarStoreLike + FormStoreLike + 'static> MonthPage<S> {
    pub fn new() -> Self {
        Self {
            form: new_event_form(),
        }
    }

    fn block(&self) -> Block<'_> {
        Block::bordered().border_set(border::ROUNDED)
    }

    /// [status line, weekday header, grid]
    fn layout(&self) -> Layout {
        Layout::vertical([
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Min(0),
        ])
    }

    fn form_area(area: Rect) -> Rect {
        let width = area.width.min(46);
        // 2 items of 3 rows, form margin 1, block border 1
        let height = area.height.min(10);
        let x = area.x + (area.width - width) / 2;
        let y = area.y + (area.height - height) / 2;
        Rect::new(x, y, width, height)
    }

    fn form_visible(store: &Rc<RefCell<S>>) -> bool {
        store.borrow().form().visible
    }

    fn render_form(&self, store: &Rc<RefCell<S>>, area: Rect, buf: &mut Buffer) {
        let area = Self::form_area(area);

        let title = Line::from(" Add Event ".bold());
        let instructions = Line::from(vec![
            " Submit ".into(),
            "<Enter>".blue().bold(),
            " Cancel ".into(),
            "<Esc> ".blue().bold(),
        ]);
        let block = self
            .block()
            .title(title.centered())
            .title_bottom(instructions.centered())
            .white();

        Clear.render(area, buf);
        let inner = block.inner(area);
        block.render(area, buf);
        self.form.render(store, inner, buf);
    }
}

impl<S: CalendarStoreLike + FormStoreLike + 'static> Component<S> for MonthPage<S> {
    fn render(&self, store: &Rc<RefCell<S>>, area: Rect, buf: &mut Buffer) {
        {
            let session = store.borrow();
            let calendar = session.calendar();
            let view = calendar.calendar.month_view();

            let title = Line::from(format!(" {} ", month_title(view.year, view.month)).bold());
            let block = self
                .block()
                .title(title.centered())
                .title_bottom(instructions().centered())
                .white();

            let inner = block.inner(area);
            block.render(area, buf);

            let [status, header, grid] = self.layout().areas(inner);

            if view.loading {
                Paragraph::new("Loading events...".italic().gray())
                    .centered()
                    .render(status, buf);
            }

            let columns = Layout::horizontal([Constraint::Ratio(1, 7); 7]).split(header);
            for (day, column) in WEEKDAYS.iter().zip(columns.iter()) {
                Paragraph::new(*day).bold().render(*column, buf);
            }

            MonthGrid { view: &view }.render(grid, buf);
        } // release the store borrows before the form reads them again

        if Self::form_visible(store) {
            self.render_form(store, area, buf);
        }
    }

    fn cursor_position(&self, store: &Rc<RefCell<S>>, area: Rect) -> Option<(u16, u16)> {
        if !Self::form_visible(store) {
            return None;
        }
        let inner = self.block().inner(Self::form_area(area));
        self.form.cursor_position(store, inner)
    }

    fn on_key(
        &mut self,
        dispatcher: &mut Dispatcher,
        store: &Rc<RefCell<S>>,
        area: Rect,
        key: KeyEvent,
    ) -> Option<Message> {
        if Self::form_visible(store) {
            let inner = self.block().inner(Self::form_area(area));
            return match self.form.on_key(dispatcher, store, inner, key) {
                // The form exits on submit; back to the grid, not out
                Some(Message::Exit) => {
                    dispatcher.dispatch(&Action::CloseForm);
                    Some(Message::Handled)
                }
                Some(msg) => Some(msg),
                None => match key.code {
                    KeyCode::Esc => {
                        dispatcher.dispatch(&Action::CloseForm);
                        Some(Message::Handled)
                    }
                    _ => None,
                },
            };
        }

        match key.code {
            KeyCode::Left | KeyCode::Char('p') => {
                dispatcher.dispatch(&Action::PrevMonth);
                Some(Message::Handled)
            }
            KeyCode::Right | KeyCode::Char('n') => {
                dispatcher.dispatch(&Action::NextMonth);
                Some(Message::Handled)
            }
            KeyCode::Char('a') => {
                dispatcher.dispatch(&Action::OpenForm);
                self.form = new_event_form();
                self.form.activate(dispatcher, store);
                Some(Message::CursorUpdated)
            }
            KeyCode::Char('q') | KeyCode::Esc => Some(Message::Exit),
            _ => None,
        }
    }
}

fn instructions() -> Line<'static> {
    Line::from(vec![
        " Prev ".into(),
        "<Left>".blue().bold(),
        " Next ".into(),
        "<Right>".blue().bold(),
        " Add ".into(),
        "<a>".blue().bold(),
        " Quit ".into(),
        "<q> ".blue().bold(),
    ])
}
