// SPDX-License-Identifier: MPL-2.0
//! `story_deck` presents a short, page-based love story built with the Iced
//! GUI framework.
//!
//! The story is a fixed sequence of pages (cover, journey timeline, running
//! "time together" counters and a photo gallery). Previous / Next move
//! between pages, except on the gallery page where they move between photos,
//! and the gallery advances on its own while it is displayed.
//!
//! The navigation logic lives in [`domain::navigation`] and
//! [`presentation`] and has no dependency on the UI, so it can be driven
//! directly:
//!
//! ```
//! use story_deck::presentation::Session;
//! use story_deck::story::Story;
//!
//! let mut session = Session::new(&Story::default()).unwrap();
//! for _ in 0..3 {
//!     session.next();
//! }
//! assert!(session.cursor().on_gallery_page());
//! assert_eq!(session.live_timers(), 1);
//! ```

pub mod app;
pub mod config;
pub mod domain;
pub mod error;
pub mod i18n;
pub mod presentation;
pub mod story;
pub mod ui;
