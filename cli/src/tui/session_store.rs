// SPDX-FileCopyrightText: 2025 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use std::cell::{Ref, RefCell};
use std::rc::Rc;

use mocal_core::Calendar;

use crate::tui::calendar_store::{CalendarStore, CalendarStoreLike};
use crate::tui::dispatcher::Dispatcher;
use crate::tui::form_store::{FormStore, FormStoreLike};

/// The combined store graph of the month view: the calendar session
/// plus the add-event form.
pub struct SessionStore {
    pub calendar: Rc<RefCell<CalendarStore>>,
    pub form: Rc<RefCell<FormStore>>,
}

impl SessionStore {
    pub fn new(calendar: Calendar) -> Self {
        Self {
            calendar: Rc::new(RefCell::new(CalendarStore::new(calendar))),
            form: Rc::new(RefCell::new(FormStore::default())),
        }
    }

    pub fn register_to(that: Rc<RefCell<Self>>, dispatcher: &mut Dispatcher) {
        CalendarStore::register_to(that.borrow().calendar.clone(), dispatcher);
        FormStore::register_to(that.borrow().form.clone(), dispatcher);
    }
}

impl CalendarStoreLike for SessionStore {
    type Output<'a> = Ref<'a, CalendarStore>;

    fn calendar(&self) -> Ref<'_, CalendarStore> {
        self.calendar.borrow()
    }
}

impl FormStoreLike for SessionStore {
    type Output<'a> = Ref<'a, FormStore>;

    fn form(&self) -> Ref<'_, FormStore> {
        self.form.borrow()
    }
}
