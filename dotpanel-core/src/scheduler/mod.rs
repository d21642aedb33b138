//! Panel update scheduling
//!
//! The update loop itself lives in the runtime crate; this module holds
//! the pieces that do not need an executor: the phase state machine, the
//! dirty/settings flags, and the default timing.

pub mod flags;
pub mod phase;

pub use flags::UpdateFlags;
pub use phase::{Phase, PhaseEvent};

/// Settle time after power-up before the first bring-up attempt
pub const STARTUP_DELAY_MS: u64 = 300;

/// Bring-up attempts before giving up
pub const BRINGUP_ATTEMPTS: u8 = 10;

/// Pause between failed bring-up attempts
pub const BRINGUP_BACKOFF_MS: u64 = 1000;

/// Dirty-flag poll period while running
pub const POLL_INTERVAL_MS: u64 = 100;
