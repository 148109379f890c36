// SPDX-FileCopyrightText: 2025 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use std::{cell::RefCell, rc::Rc};

use crate::tui::component_form::{Access, Form, FormItem, Input};
use crate::tui::dispatcher::{Action, Dispatcher};
use crate::tui::form_store::FormStoreLike;

/// The add-event form: a title and an ISO date, nothing else. The core
/// silently discards invalid submissions, so the form itself does not
/// validate.
pub fn new_event_form<S: FormStoreLike + 'static>() -> Form<S, Box<dyn FormItem<S>>> {
    Form::new(vec![Box::new(new_title()), Box::new(new_date())])
}

macro_rules! new_input {
    ($fn: ident, $title:expr, $acc: ident, $field: ident, $action: ident) => {
        fn $fn<S: FormStoreLike>() -> Input<S, $acc> {
            Input::new($title.to_string())
        }

        struct $acc;

        impl<S: FormStoreLike> Access<S, String> for $acc {
            fn get(store: &Rc<RefCell<S>>) -> String {
                store.borrow().form().data.$field.clone()
            }

            fn set(dispatcher: &mut Dispatcher, value: String) -> bool {
                dispatcher.dispatch(&Action::$action(value));
                true
            }
        }
    };
}

new_input!(new_title, "Title", TitleAccess, title, UpdateFormTitle);
new_input!(new_date, "Date (YYYY-MM-DD)", DateAccess, date, UpdateFormDate);
