// SPDX-License-Identifier: MPL-2.0
//! User interface: page views, the navigation controls and styling.
//!
//! Views follow the Elm-style "state down, messages up" pattern: each takes a
//! `ViewContext` borrowed from the application state and returns an element.
//!
//! - [`pages`] - One view per page kind (cover, journey, counters, gallery)
//! - [`controls`] - Previous / Next buttons and the page indicator
//! - [`styles`] - Centralized button and container styles
//! - [`design_tokens`] - Design system constants (colors, spacing, sizing)
//! - [`theming`] - Light/Dark/System theme mode and page colors

pub mod controls;
pub mod design_tokens;
pub mod pages;
pub mod styles;
pub mod theming;
