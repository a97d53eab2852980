use core::convert::Infallible;

use embedded_hal::digital::v2::{OutputPin, StatefulOutputPin, ToggleableOutputPin};

use crate::gpio;
use crate::{Device, Registers};

/// Led controller.
///
/// Assumes led is on when pin is high, as on the discovery board.
#[derive(Debug)]
pub struct Led<R: Registers = Device> {
    regs: R,
    pin: gpio::Gpio,
}

impl<R: Registers> Led<R> {
    /// Configures `pin` as output, leaving its current level untouched.
    ///
    /// The port clock must already be [enabled][gpio::enable].
    #[inline]
    pub fn new(mut regs: R, pin: gpio::Gpio) -> Self {
        gpio::configure(&mut regs, pin, gpio::Mode::Output);
        Self { regs, pin }
    }

    #[inline]
    pub fn pin(&self) -> gpio::Gpio {
        self.pin
    }

    #[inline]
    pub fn is_on(&self) -> bool {
        gpio::is_set_high(&self.regs, self.pin)
    }

    #[inline]
    pub fn on(&mut self) {
        gpio::write(&mut self.regs, self.pin, true);
    }

    #[inline]
    pub fn off(&mut self) {
        gpio::write(&mut self.regs, self.pin, false);
    }

    #[inline]
    pub fn toggle(&mut self) {
        gpio::toggle(&mut self.regs, self.pin);
    }

    #[inline]
    pub fn write(&mut self, on: bool) {
        if on {
            self.on();
        } else {
            self.off();
        }
    }

    /// Gives back the register accessor.
    #[inline]
    pub fn release(self) -> R {
        self.regs
    }
}

impl<R: Registers> OutputPin for Led<R> {
    type Error = Infallible;

    fn set_low(&mut self) -> Result<(), Self::Error> {
        self.off();
        Ok(())
    }

    fn set_high(&mut self) -> Result<(), Self::Error> {
        self.on();
        Ok(())
    }
}

impl<R: Registers> StatefulOutputPin for Led<R> {
    fn is_set_high(&self) -> Result<bool, Self::Error> {
        Ok(gpio::is_set_high(&self.regs, self.pin))
    }

    fn is_set_low(&self) -> Result<bool, Self::Error> {
        Ok(!gpio::is_set_high(&self.regs, self.pin))
    }
}

impl<R: Registers> ToggleableOutputPin for Led<R> {
    type Error = Infallible;

    fn toggle(&mut self) -> Result<(), Self::Error> {
        Led::toggle(self);
        Ok(())
    }
}
