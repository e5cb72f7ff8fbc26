// SPDX-License-Identifier: MPL-2.0
//! Top-level messages and runtime flags for the application.

use crate::presentation::Epoch;
use crate::ui::controls;
use std::path::PathBuf;
use std::time::Instant;

/// Top-level messages consumed by `App::update`.
#[derive(Debug, Clone)]
pub enum Message {
    /// Previous / Next buttons and page indicator clicks.
    Controls(controls::Message),
    /// Keyboard navigation (arrow keys and space).
    Next,
    Previous,
    /// Tick from the gallery auto-advance timer armed under `Epoch`.
    AutoAdvance(Epoch),
    /// Once-a-second refresh of the duration counters.
    ClockTick(Instant),
    /// Rotation of the cover word.
    CycleWord(Instant),
    /// Window close was requested (user clicked X or pressed Alt+F4).
    WindowCloseRequested(iced::window::Id),
}

/// Runtime flags passed in from the CLI to tweak startup behavior.
#[derive(Debug, Default)]
pub struct Flags {
    /// Optional locale override in BCP-47 form (e.g. `fr`, `en-US`).
    pub lang: Option<String>,
    /// Optional story file replacing the configured or built-in story.
    pub story_path: Option<PathBuf>,
    /// Optional directory the gallery images are read from.
    pub images_dir: Option<PathBuf>,
}
