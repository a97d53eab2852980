//! STM32F0DISCOVERY wiring.

use crate::gpio::{self, Gpio};
use crate::{Led, Registers};

/// Blue user LED, LD4.
pub const LED_BLUE: Gpio = gpio::PC8;

/// Green user LED, LD3.
pub const LED_GREEN: Gpio = gpio::PC9;

/// Blue user push button, B1. Reads high while pressed.
pub const USER_BUTTON: Gpio = gpio::PA0;

/// Bring up an LED pin.
///
/// Enables the port clock, then configures the pin as output. The mode register
/// ignores writes until the clock runs, so the order matters.
#[inline]
pub fn init<R: Registers>(mut regs: R, led: Gpio) -> Led<R> {
    gpio::enable(&mut regs, led.0);
    Led::new(regs, led)
}
