//! Alarm LED bank on GPIO port D.
//!
//! Sixteen LEDs share one 16-bit output-data register; the alarm pattern
//! is written as a whole word.
//!
//! ## Dual-target design
//!
//! On target this would be a volatile write to `GPIOD->ODR`.
//! On host/test: tracks the register in-memory only.

#[derive(Debug)]
pub struct GpioPort {
    name: char,
    odr: u16,
}

impl GpioPort {
    pub fn new(name: char) -> Self {
        Self { name, odr: 0 }
    }

    /// Overwrite the output-data register.
    pub fn write_odr(&mut self, value: u16) {
        self.odr = value;
    }

    pub fn odr(&self) -> u16 {
        self.odr
    }

    /// Level of a single pin (0-15).  Out-of-range pins read low.
    pub fn pin_is_high(&self, pin: u8) -> bool {
        pin < 16 && self.odr & (1 << pin) != 0
    }

    pub fn name(&self) -> char {
        self.name
    }

    pub fn clear(&mut self) {
        self.write_odr(0);
    }
}
