//! GPIO peripheral.
//!
//! Example usage:
//!
//! ```ignore
//! let mut regs = Device;
//! gpio::enable(&mut regs, Port::C);
//!
//! gpio::configure(&mut regs, PC8, gpio::Mode::Output);
//! gpio::toggle(&mut regs, PC8);
//! ```

mod mode;
mod pac;
mod pinout;

pub use mode::Mode;
pub use pac::{Pin, Port};
pub use pinout::*;

use crate::{clock, Registers};

/// Enable a GPIO port.
///
/// Must happen before the port's pins are configured.
#[inline]
pub fn enable<R: Registers>(regs: &mut R, port: Port) {
    clock::enable(regs, port);
}

/// GPIO pin tuple struct.
///
/// Can be used to [configure][configure()], [read][read()] from or
/// [write][write()] to a pin.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Gpio(pub Port, pub Pin);

/// Configure the given GPIO pin mode.
///
/// Only the mode field of this pin changes.
#[inline]
pub fn configure<R: Registers>(regs: &mut R, pin: Gpio, mode: Mode) {
    pac::configure(regs, pin.0, pin.1, mode);
}

/// Set the GPIO pin value.
///
/// Assumes pin was [configured][configure] as [output][Mode::Output] before calling this.
#[inline]
pub fn write<R: Registers>(regs: &mut R, pin: Gpio, value: bool) {
    pac::write(regs, pin.0, pin.1, value)
}

/// Flip the GPIO pin value.
#[inline]
pub fn toggle<R: Registers>(regs: &mut R, pin: Gpio) {
    pac::toggle(regs, pin.0, pin.1)
}

/// The value last written to the GPIO pin.
#[inline]
pub fn is_set_high<R: Registers>(regs: &R, pin: Gpio) -> bool {
    pac::is_set_high(regs, pin.0, pin.1)
}

/// Read the GPIO pin value.
#[inline]
pub fn read<R: Registers>(regs: &R, pin: Gpio) -> bool {
    pac::read(regs, pin.0, pin.1)
}
