// SPDX-License-Identifier: MPL-2.0
//! Presentation runtime: the session driven by the UI, the auto-advance
//! timer lease and the elapsed-time arithmetic of the duration counters.

mod auto_advance;
mod elapsed;
mod session;

pub use auto_advance::{AutoAdvance, Epoch};
pub use elapsed::Elapsed;
pub use session::Session;
