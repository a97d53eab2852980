//! Memory-mapped register access.

use crate::gpio::Port;
use stm32f0xx_hal::pac::RCC;

/// Registers touched by this crate.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Register {
    /// RCC AHB peripheral clock enable register (`AHBENR`).
    AhbEnable,
    /// GPIO port mode register (`MODER`).
    Mode(Port),
    /// GPIO port output data register (`ODR`).
    OutputData(Port),
    /// GPIO port input data register (`IDR`), read-only.
    InputData(Port),
}

/// Word-sized access to the [registers][Register] of the microcontroller.
pub trait Registers {
    fn read(&self, reg: Register) -> u32;

    fn write(&mut self, reg: Register, value: u32);

    /// Read-modify-write of a single register.
    #[inline]
    fn modify<F>(&mut self, reg: Register, f: F)
    where
        F: FnOnce(u32) -> u32,
    {
        let value = self.read(reg);
        self.write(reg, f(value));
    }
}

impl<R: Registers + ?Sized> Registers for &mut R {
    #[inline]
    fn read(&self, reg: Register) -> u32 {
        (**self).read(reg)
    }

    #[inline]
    fn write(&mut self, reg: Register, value: u32) {
        (**self).write(reg, value)
    }
}

/// The peripherals of the running device.
///
/// Any number of these may exist; like stealing the device peripherals, it is up
/// to the caller not to drive the same register from two places.
#[derive(Clone, Copy, Debug, Default)]
pub struct Device;

impl Registers for Device {
    #[inline]
    fn read(&self, reg: Register) -> u32 {
        unsafe {
            match reg {
                Register::AhbEnable => (*RCC::ptr()).ahbenr.read().bits(),
                Register::Mode(port) => (*port.ptr()).moder.read().bits(),
                Register::OutputData(port) => (*port.ptr()).odr.read().bits(),
                Register::InputData(port) => (*port.ptr()).idr.read().bits(),
            }
        }
    }

    #[inline]
    fn write(&mut self, reg: Register, value: u32) {
        unsafe {
            match reg {
                Register::AhbEnable => (*RCC::ptr()).ahbenr.write(|w| w.bits(value)),
                Register::Mode(port) => (*port.ptr()).moder.write(|w| w.bits(value)),
                Register::OutputData(port) => (*port.ptr()).odr.write(|w| w.bits(value)),
                Register::InputData(_) => (),
            }
        }
    }
}
