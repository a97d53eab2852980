//! Periodic LED toggling.
//!
//! Example usage:
//!
//! ```ignore
//! let led = board::init(Device, BlinkConfig::DEFAULT.led);
//! Blink::new(led, SpinDelay::new(), BlinkConfig::DEFAULT.half_period_ms).run()
//! ```

use core::convert::Infallible;

use embedded_hal::blocking::delay::DelayMs;
use embedded_hal::digital::v2::ToggleableOutputPin;

use crate::gpio;

/// Compile-time blink settings.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct BlinkConfig {
    /// Pin driving the LED.
    pub led: gpio::Gpio,
    /// Time between two toggles, in milliseconds.
    pub half_period_ms: u32,
}

impl BlinkConfig {
    /// Blue LED of the discovery board, toggled every 500ms.
    pub const DEFAULT: BlinkConfig = BlinkConfig {
        led: gpio::PC8,
        half_period_ms: 500,
    };
}

/// A running blink loop: wait, flip the pin, repeat.
pub struct Blink<L, D> {
    led: L,
    delay: D,
    half_period_ms: u32,
    toggles: u32,
}

impl<L, D> Blink<L, D>
where
    L: ToggleableOutputPin,
    D: DelayMs<u32>,
{
    #[inline]
    pub fn new(led: L, delay: D, half_period_ms: u32) -> Self {
        Self {
            led,
            delay,
            half_period_ms,
            toggles: 0,
        }
    }

    /// One loop iteration: wait half a period, then toggle the LED.
    #[inline]
    pub fn step(&mut self) -> Result<(), L::Error> {
        self.delay.delay_ms(self.half_period_ms);
        self.led.toggle()?;
        self.toggles = self.toggles.wrapping_add(1);
        Ok(())
    }

    /// Completed toggles, wrapping on overflow.
    #[inline]
    pub fn toggles(&self) -> u32 {
        self.toggles
    }

    #[inline]
    pub fn release(self) -> (L, D) {
        (self.led, self.delay)
    }
}

impl<L, D> Blink<L, D>
where
    L: ToggleableOutputPin<Error = Infallible>,
    D: DelayMs<u32>,
{
    /// Blink forever.
    pub fn run(mut self) -> ! {
        loop {
            match self.step() {
                Ok(()) => (),
                Err(never) => match never {},
            }
        }
    }
}
