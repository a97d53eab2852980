/// GPIO pin mode.
///
/// The discriminant is the two bit encoding in the port mode register.
#[repr(u32)]
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Mode {
    Input = 0b00,
    Output = 0b01,
    AlternateFunction = 0b10,
    Analog = 0b11,
}

impl Mode {
    #[inline]
    pub(crate) fn bits(self) -> u32 {
        self as u32
    }
}
