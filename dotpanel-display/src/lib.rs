//! Panel runtime
//!
//! Ties the drawing surface to a panel:
//!
//! - [`Display`] owns the surface behind a single lock and the update flags
//! - [`Session`] is a locked drawing session; taking one resets the
//!   cursor, alignment and colours
//! - [`Updater`] brings the panel up and pushes the framebuffer whenever a
//!   session has drawn something
//!
//! ```text
//!  callers ──lock()──► Session ──draw──► Surface ──drop──► dirty
//!                                                            │
//!  Updater ◄──────────────poll───────────────────────────────┘
//!     │ lock, clear dirty, push frame (+ contrast/mode)
//!     ▼
//!  Transport
//! ```

#![cfg_attr(not(test), no_std)]
#![deny(unsafe_code)]

#[macro_use]
mod fmt;

pub mod display;
pub mod updater;

pub use display::{Display, Session};
pub use updater::{Updater, UpdaterConfig};
