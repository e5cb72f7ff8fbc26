// SPDX-License-Identifier: MPL-2.0
//! Domain layer - Core presentation logic with ZERO external dependencies.
//!
//! This module contains pure domain types, value objects, and navigation rules.
//! It has no dependencies on external crates (except `std`) to ensure
//! testability and architectural purity.
//!
//! # Modules
//!
//! - [`navigation`]: Page and gallery navigation ([`PresentationCursor`](navigation::PresentationCursor),
//!   [`WordCycle`](navigation::WordCycle))
//! - [`ui`]: UI value objects ([`AdvanceInterval`](ui::newtypes::AdvanceInterval),
//!   [`WordCycleInterval`](ui::newtypes::WordCycleInterval))

pub mod navigation;
pub mod ui;
