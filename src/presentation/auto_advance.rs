// SPDX-License-Identifier: MPL-2.0
//! Lease on the gallery auto-advance timer.
//!
//! At most one recurring timer may drive the gallery. The lease is identified
//! by an epoch: arming or restarting hands out a fresh epoch, and ticks that
//! carry any other epoch come from a timer that has already been released.
//! The Iced subscription uses the epoch as part of its identity, so a new
//! epoch makes the runtime drop the previous timer before starting the next.

/// Identity of one armed timer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Epoch(u64);

impl Epoch {
    #[must_use]
    pub fn value(self) -> u64 {
        self.0
    }
}

/// Tracks whether the auto-advance timer is live and which epoch it carries.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AutoAdvance {
    next_epoch: u64,
    live: Option<Epoch>,
}

impl AutoAdvance {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// The epoch of the live timer, if any.
    #[must_use]
    pub fn live_epoch(&self) -> Option<Epoch> {
        self.live
    }

    /// Number of live timers: always 0 or 1.
    #[must_use]
    pub fn live_timers(&self) -> usize {
        usize::from(self.live.is_some())
    }

    #[must_use]
    pub fn is_armed(&self) -> bool {
        self.live.is_some()
    }

    /// Arms the timer when `active` and none is live; releases it otherwise.
    /// Syncing an already armed lease to `true` keeps its epoch.
    pub fn sync(&mut self, active: bool) {
        match (active, self.live) {
            (true, None) => self.arm(),
            (false, Some(_)) => self.disarm(),
            _ => {}
        }
    }

    /// Replaces the live timer by a fresh one. Does nothing when disarmed.
    pub fn restart(&mut self) {
        if self.live.is_some() {
            self.arm();
        }
    }

    /// Releases the timer unconditionally.
    pub fn disarm(&mut self) {
        if let Some(epoch) = self.live.take() {
            tracing::debug!(epoch = epoch.value(), "auto-advance timer released");
        }
    }

    /// Returns true if a tick carrying `epoch` comes from the live timer.
    #[must_use]
    pub fn accept(&self, epoch: Epoch) -> bool {
        self.live == Some(epoch)
    }

    fn arm(&mut self) {
        self.next_epoch += 1;
        let epoch = Epoch(self.next_epoch);
        self.live = Some(epoch);
        tracing::debug!(epoch = epoch.value(), "auto-advance timer armed");
    }
}
