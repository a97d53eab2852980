//! Minimal board support crate for the STM32F0DISCOVERY (STM32F051R8).
//!
//! Peripheral access goes through the [`Registers`] seam: [`Device`] touches the
//! real memory-mapped registers, while host tests substitute a simulator. It is
//! minimal in the sense that only the registers needed to drive GPIO pins are
//! modelled, and no clock tree setup is done: the core runs from the 8MHz
//! internal oscillator it boots from.

#![cfg_attr(not(test), no_std)]

pub mod blink;
pub mod board;
pub mod clock;
pub mod delay;
pub mod gpio;
pub mod registers;

mod led;
#[cfg(test)]
mod sim;

pub use led::Led;
pub use registers::{Device, Register, Registers};
