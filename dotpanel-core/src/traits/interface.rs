//! Bus interface traits

use core::fmt::Debug;

use embedded_hal::delay::DelayNs;

/// 4-wire bus with a separate command/data select line
pub trait CommandInterface {
    /// Bus error
    type Error: Debug;

    /// Send a single command byte
    fn command(&mut self, code: u8) -> Result<(), Self::Error>;

    /// Send a command byte followed by its argument bytes
    fn command_with_args(&mut self, code: u8, args: &[u8]) -> Result<(), Self::Error>;

    /// Send display data
    fn data(&mut self, bytes: &[u8]) -> Result<(), Self::Error>;

    /// Pulse the panel reset line, if there is one
    fn reset<D: DelayNs>(&mut self, delay: &mut D) {
        let _ = delay;
    }
}

/// Addressed 2-wire bus where every transfer carries a control prefix
pub trait FrameInterface {
    /// Bus error
    type Error: Debug;

    /// Send `commands`, then `data`, to the device at `address`
    ///
    /// Either part may be empty.
    fn send_frame(&mut self, address: u8, commands: &[u8], data: &[u8])
        -> Result<(), Self::Error>;
}
