// SPDX-License-Identifier: MPL-2.0
//! Centralized default values for all configuration constants.
//!
//! This module serves as the single source of truth for default values
//! used across the application. Constants are organized by category.
//!
//! # Categories
//!
//! - **Auto-advance**: Gallery slideshow interval and bounds
//! - **Word cycle**: Cover page rotating word interval and bounds
//! - **Clock**: Refresh rate of the duration counters

// ==========================================================================
// Auto-advance Defaults
// ==========================================================================

/// Default delay before the gallery moves to the next image (in milliseconds).
pub const DEFAULT_AUTO_ADVANCE_MS: u32 = 3500;

/// Minimum auto-advance delay (in milliseconds).
pub const MIN_AUTO_ADVANCE_MS: u32 = 1000;

/// Maximum auto-advance delay (in milliseconds).
pub const MAX_AUTO_ADVANCE_MS: u32 = 60_000;

// ==========================================================================
// Word Cycle Defaults
// ==========================================================================

/// Default delay between two cover words (in milliseconds).
pub const DEFAULT_WORD_CYCLE_MS: u32 = 3000;

/// Minimum word cycle delay (in milliseconds).
pub const MIN_WORD_CYCLE_MS: u32 = 500;

/// Maximum word cycle delay (in milliseconds).
pub const MAX_WORD_CYCLE_MS: u32 = 30_000;

// ==========================================================================
// Clock Defaults
// ==========================================================================

/// Refresh period of the duration counters (in milliseconds).
pub const CLOCK_REFRESH_MS: u64 = 1000;
