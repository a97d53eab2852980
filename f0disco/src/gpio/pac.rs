type GpioPtr = stm32f0xx_hal::pac::gpioa::RegisterBlock;
type GPIOA = stm32f0xx_hal::pac::GPIOA;
type GPIOB = stm32f0xx_hal::pac::GPIOB;
type GPIOC = stm32f0xx_hal::pac::GPIOC;
type GPIOD = stm32f0xx_hal::pac::GPIOD;
type GPIOF = stm32f0xx_hal::pac::GPIOF;

use super::Mode;
use crate::{Register, Registers};

/// Available GPIO ports.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Port {
    A,
    B,
    C,
    D,
    F,
}

/// Available GPIO pins.
#[repr(u8)]
#[rustfmt::skip]
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Pin {
    P0  = 0,
    P1  = 1,
    P2  = 2,
    P3  = 3,
    P4  = 4,
    P5  = 5,
    P6  = 6,
    P7  = 7,
    P8  = 8,
    P9  = 9,
    P10 = 10,
    P11 = 11,
    P12 = 12,
    P13 = 13,
    P14 = 14,
    P15 = 15,
}

impl Port {
    /// Register block of the port.
    ///
    /// All ports share the layout of port A for the registers used here.
    #[inline]
    pub(crate) fn ptr(self) -> *const GpioPtr {
        match self {
            Port::A => GPIOA::ptr() as *const GpioPtr,
            Port::B => GPIOB::ptr() as *const GpioPtr,
            Port::C => GPIOC::ptr() as *const GpioPtr,
            Port::D => GPIOD::ptr() as *const GpioPtr,
            Port::F => GPIOF::ptr() as *const GpioPtr,
        }
    }
}

impl Pin {
    #[inline]
    pub(crate) fn mask(self) -> u32 {
        1 << self as u8
    }
}

/// Configure this gpio pin with the given mode.
#[inline]
pub(crate) fn configure<R: Registers>(regs: &mut R, port: Port, pin: Pin, mode: Mode) {
    let shift = pin as u32 * 2;
    let mask = !(0b11 << shift);
    regs.modify(Register::Mode(port), |value| {
        (value & mask) | (mode.bits() << shift)
    });
}

/// Sets the pin value.
///
/// Assumes the pin was configured as output mode.
#[inline]
pub(crate) fn write<R: Registers>(regs: &mut R, port: Port, pin: Pin, value: bool) {
    regs.modify(Register::OutputData(port), |bits| {
        if value {
            bits | pin.mask()
        } else {
            bits & !pin.mask()
        }
    });
}

#[inline]
pub(crate) fn toggle<R: Registers>(regs: &mut R, port: Port, pin: Pin) {
    regs.modify(Register::OutputData(port), |bits| bits ^ pin.mask());
}

#[inline]
pub(crate) fn is_set_high<R: Registers>(regs: &R, port: Port, pin: Pin) -> bool {
    regs.read(Register::OutputData(port)) & pin.mask() > 0
}

/// Read the pin value.
#[inline]
pub(crate) fn read<R: Registers>(regs: &R, port: Port, pin: Pin) -> bool {
    regs.read(Register::InputData(port)) & pin.mask() > 0
}
