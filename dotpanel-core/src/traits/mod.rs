//! Collaborator traits
//!
//! The core never talks to a bus. Bus interfaces implement
//! [`CommandInterface`] (4-wire command/data) or [`FrameInterface`]
//! (addressed 2-wire), and panel controllers built on them implement
//! [`Transport`], which is all the updater needs.

pub mod interface;
pub mod transport;

pub use interface::{CommandInterface, FrameInterface};
pub use transport::{DisplayMode, PanelSettings, Transport};
