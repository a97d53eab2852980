//! Named pins of the STM32F051R8 (LQFP64).

use super::{Gpio, Pin, Port};

macro_rules! pins {
    ($port:ident: $($name:ident => $pin:ident),+ $(,)?) => {
        $(
            pub const $name: Gpio = Gpio(Port::$port, Pin::$pin);
        )+
    };
}

pins!(A:
    PA0 => P0, PA1 => P1, PA2 => P2, PA3 => P3,
    PA4 => P4, PA5 => P5, PA6 => P6, PA7 => P7,
    PA8 => P8, PA9 => P9, PA10 => P10, PA11 => P11,
    PA12 => P12, PA13 => P13, PA14 => P14, PA15 => P15,
);

pins!(B:
    PB0 => P0, PB1 => P1, PB2 => P2, PB3 => P3,
    PB4 => P4, PB5 => P5, PB6 => P6, PB7 => P7,
    PB8 => P8, PB9 => P9, PB10 => P10, PB11 => P11,
    PB12 => P12, PB13 => P13, PB14 => P14, PB15 => P15,
);

pins!(C:
    PC0 => P0, PC1 => P1, PC2 => P2, PC3 => P3,
    PC4 => P4, PC5 => P5, PC6 => P6, PC7 => P7,
    PC8 => P8, PC9 => P9, PC10 => P10, PC11 => P11,
    PC12 => P12, PC13 => P13, PC14 => P14, PC15 => P15,
);

pins!(D: PD2 => P2);

// Oscillator pins, free when the external crystal is not fitted.
pins!(F: PF0 => P0, PF1 => P1);
