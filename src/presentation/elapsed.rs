// SPDX-License-Identifier: MPL-2.0
//! Time elapsed since a start date, for the "Our Time Together" counters.

use chrono::{DateTime, NaiveDate, NaiveTime, Utc};

const SECONDS_PER_MINUTE: i64 = 60;
const SECONDS_PER_HOUR: i64 = 60 * SECONDS_PER_MINUTE;
const SECONDS_PER_DAY: i64 = 24 * SECONDS_PER_HOUR;

/// Whole days, hours, minutes and seconds elapsed since a start date.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Elapsed {
    pub days: u64,
    pub hours: u8,
    pub minutes: u8,
    pub seconds: u8,
}

impl Elapsed {
    /// Time from midnight UTC on `start` until `now`.
    ///
    /// A start date in the future gives zero rather than a negative duration.
    ///
    /// ```
    /// use chrono::{NaiveDate, TimeZone, Utc};
    /// use story_deck::presentation::Elapsed;
    ///
    /// let start = NaiveDate::from_ymd_opt(2024, 7, 1).unwrap();
    /// let now = Utc.with_ymd_and_hms(2024, 7, 3, 5, 30, 0).unwrap();
    /// let elapsed = Elapsed::since(start, now);
    /// assert_eq!((elapsed.days, elapsed.hours, elapsed.minutes), (2, 5, 30));
    /// ```
    #[must_use]
    pub fn since(start: NaiveDate, now: DateTime<Utc>) -> Self {
        let start = start.and_time(NaiveTime::MIN).and_utc();
        let total = (now - start).num_seconds().max(0);
        Self::from_seconds(total)
    }

    fn from_seconds(total: i64) -> Self {
        // Each component is reduced modulo its unit, so the casts cannot truncate.
        Self {
            days: (total / SECONDS_PER_DAY) as u64,
            hours: ((total % SECONDS_PER_DAY) / SECONDS_PER_HOUR) as u8,
            minutes: ((total % SECONDS_PER_HOUR) / SECONDS_PER_MINUTE) as u8,
            seconds: (total % SECONDS_PER_MINUTE) as u8,
        }
    }

    /// Returns true when no time has elapsed (including future start dates).
    #[must_use]
    pub fn is_zero(&self) -> bool {
        *self == Self::default()
    }
}
