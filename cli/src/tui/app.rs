// SPDX-FileCopyrightText: 2025 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use std::{cell::RefCell, error::Error, rc::Rc, time::Duration};

use ratatui::crossterm::event::{self, Event, KeyEvent, KeyEventKind};
use ratatui::prelude::*;
use tokio::sync::oneshot;

use mocal_core::{Calendar, Config, EventStore};

use crate::tui::component::{Component, Message};
use crate::tui::dispatcher::{Action, Dispatcher};
use crate::tui::month_page::MonthPage;
use crate::tui::session_store::SessionStore;

/// How long to wait for a key before re-checking the load channel.
const POLL_INTERVAL: Duration = Duration::from_millis(200);

/// Run the interactive month view until the user quits.
pub async fn run_month_view(config: &Config) -> Result<(), Box<dyn Error>> {
    let store = Rc::new(RefCell::new(SessionStore::new(Calendar::new())));

    // Fire-and-forget: the load resolves exactly once, or never. The
    // grid renders either way; only the loading line depends on it.
    let (tx, mut rx) = oneshot::channel();
    let path = config.events_path().to_path_buf();
    tokio::spawn(async move {
        let _ = tx.send(EventStore::fetch_recurring(&path).await);
    });

    let mut terminal = ratatui::init();
    let result = {
        let mut dispatcher = Dispatcher::new();
        SessionStore::register_to(store.clone(), &mut dispatcher);
        let mut page = MonthPage::new();

        loop {
            if let Ok(events) = rx.try_recv() {
                dispatcher.dispatch(&Action::FinishLoad(events));
            }

            let area = match draw(&page, &store, &mut terminal) {
                Ok(area) => area,
                Err(e) => break Err(e),
            };

            match poll_key() {
                Err(e) => break Err(e),
                Ok(None) => {} // timeout, render the next frame
                Ok(Some(key)) => {
                    if let Some(Message::Exit) = page.on_key(&mut dispatcher, &store, area, key) {
                        break Ok(());
                    }

                    // A submit travels through the store, not the UI:
                    // drain it here and hand it to the session. Invalid
                    // submissions are discarded by the core.
                    let submission = store.borrow().form.borrow_mut().take_submission();
                    if let Some((title, date)) = submission {
                        let session = store.borrow();
                        let mut calendar = session.calendar.borrow_mut();
                        calendar.calendar.add_event(&title, &date);
                    }
                }
            }
        }
    }; // release dispatcher and page here to drop their store references
    ratatui::restore();
    result
}

fn draw(
    page: &MonthPage<SessionStore>,
    store: &Rc<RefCell<SessionStore>>,
    terminal: &mut ratatui::DefaultTerminal,
) -> Result<Rect, Box<dyn Error>> {
    let frame = terminal.draw(|frame| {
        let area = frame.area();
        page.render(store, area, frame.buffer_mut());
        if let Some(position) = page.cursor_position(store, area) {
            frame.set_cursor_position(position);
        }
    })?;
    Ok(frame.area)
}

fn poll_key() -> Result<Option<KeyEvent>, Box<dyn Error>> {
    if !event::poll(POLL_INTERVAL)? {
        return Ok(None);
    }

    match event::read()? {
        Event::Key(key) if key.kind == KeyEventKind::Press => Ok(Some(key)),
        _ => Ok(None),
    }
}
