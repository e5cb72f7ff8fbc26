// SPDX-License-Identifier: MPL-2.0
//! Message handling for the application.
//!
//! Every handler works on an `UpdateContext` borrowed from the `App`, so the
//! handlers can be exercised without an Iced runtime.

use super::Message;
use crate::presentation::Session;
use crate::ui::controls;
use chrono::{DateTime, Utc};
use iced::{window, Task};

/// Mutable state the handlers operate on.
pub struct UpdateContext<'a> {
    pub session: &'a mut Session,
    pub now: &'a mut DateTime<Utc>,
}

pub fn handle_message(ctx: &mut UpdateContext<'_>, message: Message) -> Task<Message> {
    match message {
        Message::Controls(controls_message) => {
            handle_controls_message(ctx, controls_message);
            Task::none()
        }
        Message::Next => {
            ctx.session.next();
            refresh_clock(ctx);
            Task::none()
        }
        Message::Previous => {
            ctx.session.previous();
            refresh_clock(ctx);
            Task::none()
        }
        Message::AutoAdvance(epoch) => {
            ctx.session.auto_advance(epoch);
            Task::none()
        }
        Message::ClockTick(_) => {
            *ctx.now = Utc::now();
            Task::none()
        }
        Message::CycleWord(_) => {
            ctx.session.cycle_word();
            Task::none()
        }
        Message::WindowCloseRequested(id) => handle_close_requested(ctx, id),
    }
}

fn handle_controls_message(ctx: &mut UpdateContext<'_>, message: controls::Message) {
    match message {
        controls::Message::Previous => {
            ctx.session.previous();
        }
        controls::Message::Next => {
            ctx.session.next();
        }
        controls::Message::GoToPage(page) => {
            ctx.session.go_to_page(page);
        }
    }
    refresh_clock(ctx);
}

/// The counters must not show a stale time for the second until the first
/// clock tick after the page becomes visible.
fn refresh_clock(ctx: &mut UpdateContext<'_>) {
    if ctx.session.needs_clock() {
        *ctx.now = Utc::now();
    }
}

fn handle_close_requested(ctx: &mut UpdateContext<'_>, id: window::Id) -> Task<Message> {
    tracing::debug!("window close requested, closing session");
    ctx.session.close();
    window::close(id)
}
