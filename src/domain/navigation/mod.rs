// SPDX-License-Identifier: MPL-2.0
//! Navigation through the presentation.
//!
//! - [`PresentationCursor`]: current page and selected gallery image
//! - [`WordCycle`]: rotating word shown on the cover page

mod cursor;
mod word_cycle;

pub use cursor::{Navigation, PresentationCursor};
pub use word_cycle::WordCycle;
