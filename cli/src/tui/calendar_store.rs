// SPDX-FileCopyrightText: 2025 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use std::{cell::RefCell, ops::Deref, rc::Rc};

use mocal_core::Calendar;

use crate::tui::dispatcher::{Action, Dispatcher};

pub trait CalendarStoreLike {
    type Output<'a>: Deref<Target = CalendarStore>
    where
        Self: 'a;

    fn calendar(&self) -> Self::Output<'_>;
}

/// Store wrapping the core calendar session for the TUI.
#[derive(Debug)]
pub struct CalendarStore {
    pub calendar: Calendar,
}

impl CalendarStore {
    pub fn new(calendar: Calendar) -> Self {
        Self { calendar }
    }

    pub fn register_to(that: Rc<RefCell<Self>>, dispatcher: &mut Dispatcher) {
        let callback = Rc::new(RefCell::new(move |action: &Action| match action {
            Action::PrevMonth => that.borrow_mut().calendar.prev_month(),
            Action::NextMonth => that.borrow_mut().calendar.next_month(),
            Action::FinishLoad(events) => that.borrow_mut().calendar.finish_load(events.clone()),
            _ => {}
        }));
        dispatcher.register(callback);
    }
}

impl CalendarStoreLike for CalendarStore {
    type Output<'a> = &'a CalendarStore;

    fn calendar(&self) -> &CalendarStore {
        self
    }
}
