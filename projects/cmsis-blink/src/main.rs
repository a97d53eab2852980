#![no_main]
#![no_std]

extern crate panic_halt;

use cortex_m_rt::entry;
use cortex_m_semihosting::hprintln;

use f0disco::blink::{Blink, BlinkConfig};
use f0disco::{board, delay::SpinDelay, Device};

/// Blue LED, toggled every 500ms.
const CONFIG: BlinkConfig = BlinkConfig {
    led: board::LED_BLUE,
    half_period_ms: 500,
};

#[entry]
fn main() -> ! {
    if cfg!(debug_assertions) {
        hprintln!("Hello! This is the CMSIS blink example.");
    }

    // Clock gate, then pin mode.
    let led = board::init(Device, CONFIG.led);

    Blink::new(led, SpinDelay::new(), CONFIG.half_period_ms).run()
}
