// SPDX-License-Identifier: MPL-2.0
//! UI newtypes.
//!
//! This module provides type-safe wrappers for UI timing values,
//! ensuring they are always within valid ranges.

use crate::config::{
    DEFAULT_AUTO_ADVANCE_MS, DEFAULT_WORD_CYCLE_MS, MAX_AUTO_ADVANCE_MS, MAX_WORD_CYCLE_MS,
    MIN_AUTO_ADVANCE_MS, MIN_WORD_CYCLE_MS,
};
use std::time::Duration;

// =============================================================================
// AdvanceInterval
// =============================================================================

/// Gallery auto-advance delay in milliseconds, guaranteed to be within
/// the valid range (1–60 seconds).
///
/// # Example
///
/// ```
/// use story_deck::domain::ui::AdvanceInterval;
///
/// let interval = AdvanceInterval::new(3500);
/// assert_eq!(interval.value(), 3500);
///
/// // Values outside range are clamped
/// assert_eq!(AdvanceInterval::new(10).value(), 1000);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct AdvanceInterval(u32);

impl AdvanceInterval {
    /// Creates a new interval, clamping to the valid range.
    #[must_use]
    pub fn new(millis: u32) -> Self {
        Self(millis.clamp(MIN_AUTO_ADVANCE_MS, MAX_AUTO_ADVANCE_MS))
    }

    /// Returns the value in milliseconds.
    #[must_use]
    pub fn value(self) -> u32 {
        self.0
    }

    /// Returns the interval as a Duration.
    #[must_use]
    pub fn as_duration(self) -> Duration {
        Duration::from_millis(u64::from(self.0))
    }
}

impl Default for AdvanceInterval {
    fn default() -> Self {
        Self(DEFAULT_AUTO_ADVANCE_MS)
    }
}

// =============================================================================
// WordCycleInterval
// =============================================================================

/// Delay between two cover words in milliseconds (0.5–30 seconds).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct WordCycleInterval(u32);

impl WordCycleInterval {
    #[must_use]
    pub fn new(millis: u32) -> Self {
        Self(millis.clamp(MIN_WORD_CYCLE_MS, MAX_WORD_CYCLE_MS))
    }

    #[must_use]
    pub fn value(self) -> u32 {
        self.0
    }

    #[must_use]
    pub fn as_duration(self) -> Duration {
        Duration::from_millis(u64::from(self.0))
    }
}

impl Default for WordCycleInterval {
    fn default() -> Self {
        Self(DEFAULT_WORD_CYCLE_MS)
    }
}
