// SPDX-FileCopyrightText: 2025 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use std::{cell::RefCell, ops::Deref, rc::Rc};

use crate::tui::dispatcher::{Action, Dispatcher};

pub trait FormStoreLike {
    type Output<'a>: Deref<Target = FormStore>
    where
        Self: 'a;

    fn form(&self) -> Self::Output<'_>;
}

/// Store backing the add-event form.
#[derive(Debug, Default)]
pub struct FormStore {
    pub data: FormData,

    /// Whether the form overlay is open.
    pub visible: bool,

    /// Whether the user submitted the form.
    pub submit: bool,
}

/// The two required fields of the add-event contract.
#[derive(Debug, Default)]
pub struct FormData {
    pub title: String,
    pub date: String,
}

impl FormStore {
    pub fn register_to(that: Rc<RefCell<Self>>, dispatcher: &mut Dispatcher) {
        let callback = Rc::new(RefCell::new(move |action: &Action| match action {
            Action::OpenForm => {
                let mut that = that.borrow_mut();
                that.data = FormData::default();
                that.visible = true;
                that.submit = false;
            }
            Action::CloseForm => {
                that.borrow_mut().visible = false;
            }
            Action::UpdateFormTitle(v) => {
                that.borrow_mut().data.title = v.clone();
            }
            Action::UpdateFormDate(v) => {
                that.borrow_mut().data.date = v.clone();
            }
            Action::SubmitChanges => {
                let mut that = that.borrow_mut();
                if that.visible {
                    that.submit = true;
                }
            }
            _ => {}
        }));
        dispatcher.register(callback);
    }

    /// Takes the submitted (title, date) pair, closing the form and
    /// resetting the submit flag.
    pub fn take_submission(&mut self) -> Option<(String, String)> {
        if !self.submit {
            return None;
        }
        self.submit = false;
        self.visible = false;
        Some((
            std::mem::take(&mut self.data.title),
            std::mem::take(&mut self.data.date),
        ))
    }
}

impl FormStoreLike for FormStore {
    type Output<'a> = &'a FormStore;

    fn form(&self) -> &FormStore {
        self
    }
}
