//! Peripheral clock gating.
//!
//! A GPIO port ignores register accesses until its clock is enabled, so
//! [`enable`] has to run before the port is configured.

use crate::gpio::Port;
use crate::{Register, Registers};

/// System clock speed in Hertz.
///
/// The internal 8MHz oscillator selected at reset; the clock tree is never
/// reconfigured.
pub const SPEED: u32 = 8_000_000;

/// Enable bit of the port in the AHB peripheral clock enable register.
#[inline]
pub(crate) fn port_mask(port: Port) -> u32 {
    match port {
        Port::A => 1 << 17,
        Port::B => 1 << 18,
        Port::C => 1 << 19,
        Port::D => 1 << 20,
        Port::F => 1 << 22,
    }
}

/// Enable the clock of a GPIO port.
///
/// Other enable bits are left as they are.
#[inline]
pub fn enable<R: Registers>(regs: &mut R, port: Port) {
    let mask = port_mask(port);
    regs.modify(Register::AhbEnable, |value| value | mask);
}

/// Whether the clock of a GPIO port is running.
#[inline]
pub fn is_enabled<R: Registers>(regs: &R, port: Port) -> bool {
    regs.read(Register::AhbEnable) & port_mask(port) != 0
}
