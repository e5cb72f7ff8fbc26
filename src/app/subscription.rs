// SPDX-License-Identifier: MPL-2.0
//! Event and timer subscriptions for the application.
//!
//! Timers are derived from the session on every update: a timer only exists
//! while the page that needs it is displayed, so leaving the page drops it.

use super::Message;
use crate::presentation::Epoch;
use iced::keyboard::{self, key::Named, Key};
use iced::{event, time, Subscription};
use std::time::Duration;

/// Routes keyboard navigation and window close requests.
pub fn create_event_subscription() -> Subscription<Message> {
    event::listen_with(|event, status, window_id| {
        // Handle window close request for cleanup
        if let event::Event::Window(iced::window::Event::CloseRequested) = &event {
            return Some(Message::WindowCloseRequested(window_id));
        }

        match event {
            event::Event::Keyboard(keyboard::Event::KeyPressed { key, .. }) => {
                key_message(&key, status)
            }
            _ => None,
        }
    })
}

/// Maps a pressed key to a navigation message.
///
/// Left goes back, Right and Space go forward. Keys already captured by a
/// widget are ignored.
fn key_message(key: &Key, status: event::Status) -> Option<Message> {
    if status == event::Status::Captured {
        return None;
    }

    match key {
        Key::Named(Named::ArrowRight | Named::Space) => Some(Message::Next),
        Key::Named(Named::ArrowLeft) => Some(Message::Previous),
        _ => None,
    }
}

/// Creates the gallery auto-advance timer for the live lease.
///
/// The epoch is part of the subscription identity: when the lease is renewed
/// the runtime drops the old timer and starts a fresh one, so at most one
/// timer is ever running and a restart always waits a full interval.
pub fn create_auto_advance_subscription(
    epoch: Option<Epoch>,
    interval: Duration,
) -> Subscription<Message> {
    match epoch {
        Some(epoch) => time::every(interval)
            .with(epoch)
            .map(|(epoch, _instant)| Message::AutoAdvance(epoch)),
        None => Subscription::none(),
    }
}

/// Creates the once-a-second clock used by the duration counters.
pub fn create_clock_subscription(active: bool, interval: Duration) -> Subscription<Message> {
    if active {
        time::every(interval).map(Message::ClockTick)
    } else {
        Subscription::none()
    }
}

/// Creates the cover word rotation timer.
pub fn create_word_cycle_subscription(active: bool, interval: Duration) -> Subscription<Message> {
    if active {
        time::every(interval).map(Message::CycleWord)
    } else {
        Subscription::none()
    }
}
