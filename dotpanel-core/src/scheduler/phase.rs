//! Update phase state machine
//!
//! ```text
//! Bringup(n) --ok--> Running
//! Bringup(n) --err-> Bringup(n-1) ... Bringup(1) --err-> Failed
//! ```
//!
//! `Running` and `Failed` never change again.

/// Events driving the phase machine
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum PhaseEvent {
    /// The panel accepted the bring-up sequence
    BringupSucceeded,
    /// A bring-up attempt failed
    BringupFailed,
}

/// Lifecycle of the update loop
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Phase {
    /// Initializing the panel; `attempts_left` includes the current one
    Bringup {
        /// Remaining attempts
        attempts_left: u8,
    },
    /// Pushing the framebuffer whenever it changes
    Running,
    /// Bring-up exhausted; the framebuffer is gone
    Failed,
}

impl Phase {
    /// Initial phase allowing `attempts` tries, at least one
    pub const fn start(attempts: u8) -> Self {
        Phase::Bringup {
            attempts_left: if attempts == 0 { 1 } else { attempts },
        }
    }

    /// Whether steady-state updates are running
    pub fn is_running(&self) -> bool {
        matches!(self, Phase::Running)
    }

    /// Whether bring-up has been given up
    pub fn is_failed(&self) -> bool {
        matches!(self, Phase::Failed)
    }

    /// Process an event and return the next phase
    pub fn transition(self, event: PhaseEvent) -> Self {
        use Phase::*;
        use PhaseEvent::*;

        match (self, event) {
            (Bringup { .. }, BringupSucceeded) => Running,
            (Bringup { attempts_left }, BringupFailed) if attempts_left > 1 => Bringup {
                attempts_left: attempts_left - 1,
            },
            (Bringup { .. }, BringupFailed) => Failed,

            // Terminal phases
            (Running, _) => Running,
            (Failed, _) => Failed,
        }
    }
}
