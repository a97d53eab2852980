//! Block program for an approximate period of time.
//!
//! Busy-waits on the core without a timer. The spin count is not calibrated
//! against [`SPEED`][crate::clock::SPEED] and depends on the optimisation level,
//! so durations are approximate only.

use cortex_m::asm;
use embedded_hal::blocking::delay::DelayMs;
use vcell::VolatileCell;

/// Inner spin iterations taken as one millisecond.
pub const SPINS_PER_MILLI: u32 = 500;

/// Blocks program for *roughly* `count` milliseconds.
#[inline]
pub fn millis(count: u32) {
    spin(count, SPINS_PER_MILLI, asm::nop);
}

/// Spins `spins_per_milli` times for each of `millis`, calling `nop` once per spin.
fn spin<F: FnMut()>(millis: u32, spins_per_milli: u32, mut nop: F) {
    let mut remaining = millis;
    while remaining > 0 {
        remaining -= 1;
        let spins = VolatileCell::new(spins_per_milli);
        while spins.get() > 0 {
            spins.set(spins.get() - 1);
            nop();
        }
    }
}

/// Busy-wait delay provider.
///
/// `F` runs once per inner spin; on hardware it is the `nop` instruction.
pub struct SpinDelay<F = fn()> {
    spins_per_milli: u32,
    nop: F,
}

impl SpinDelay {
    #[inline]
    pub fn new() -> Self {
        Self::with_spins(SPINS_PER_MILLI, asm::nop)
    }
}

impl Default for SpinDelay {
    fn default() -> Self {
        Self::new()
    }
}

impl<F: FnMut()> SpinDelay<F> {
    /// Delay with a custom spin count and per-spin hook.
    #[inline]
    pub fn with_spins(spins_per_milli: u32, nop: F) -> Self {
        Self { spins_per_milli, nop }
    }
}

impl<F: FnMut()> DelayMs<u32> for SpinDelay<F> {
    #[inline]
    fn delay_ms(&mut self, ms: u32) {
        spin(ms, self.spins_per_milli, &mut self.nop);
    }
}

impl<F: FnMut()> DelayMs<u16> for SpinDelay<F> {
    #[inline]
    fn delay_ms(&mut self, ms: u16) {
        self.delay_ms(u32::from(ms))
    }
}

impl<F: FnMut()> DelayMs<u8> for SpinDelay<F> {
    #[inline]
    fn delay_ms(&mut self, ms: u8) {
        self.delay_ms(u32::from(ms))
    }
}
