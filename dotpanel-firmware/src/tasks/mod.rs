//! Embassy async tasks
//!
//! The update task owns the panel; every other task only draws through
//! the shared display.

pub mod demo;
pub mod update;

pub use demo::demo_task;
pub use update::update_task;
