//! I2C Bus Abstractions
//!
//! Wraps any blocking `embedded-hal` I2C implementation (the embassy-stm32
//! driver on target, a mock on host) as the tuner's [`BusTransport`].

use embedded_hal::i2c::I2c;

use crate::config::TUNER_I2C_ADDR;
use crate::tuner::controller::BusTransport;

/// I2C device address wrapper
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct I2cAddress(u8);

impl I2cAddress {
    /// FM tuner, sequential access port
    pub const TUNER: Self = Self(TUNER_I2C_ADDR);

    /// Create from 7-bit address
    #[must_use]
    pub const fn new(addr: u8) -> Self {
        Self(addr & 0x7F)
    }

    /// Get the 7-bit address
    #[must_use]
    pub const fn addr(self) -> u8 {
        self.0
    }
}

#[cfg(feature = "embedded")]
impl defmt::Format for I2cAddress {
    fn format(&self, f: defmt::Formatter) {
        defmt::write!(f, "0x{:02X}", self.0);
    }
}

/// I2C bus wrapper
pub struct I2cBus<I> {
    i2c: I,
}

impl<I: I2c> I2cBus<I> {
    /// Create a new I2C bus wrapper
    #[must_use]
    pub fn new(i2c: I) -> Self {
        Self { i2c }
    }

    /// Give back the underlying driver
    pub fn release(self) -> I {
        self.i2c
    }

    /// Write bytes to a device
    ///
    /// # Errors
    ///
    /// Propagates the driver error.
    pub fn write_to(&mut self, addr: I2cAddress, data: &[u8]) -> Result<(), I::Error> {
        self.i2c.write(addr.addr(), data)
    }

    /// Read bytes from a device
    ///
    /// # Errors
    ///
    /// Propagates the driver error.
    pub fn read_from(&mut self, addr: I2cAddress, buffer: &mut [u8]) -> Result<(), I::Error> {
        self.i2c.read(addr.addr(), buffer)
    }
}

impl<I: I2c> BusTransport for I2cBus<I> {
    type Error = I::Error;

    fn write(&mut self, address: u8, bytes: &[u8]) -> Result<(), Self::Error> {
        self.write_to(I2cAddress::new(address), bytes)
    }

    fn read(&mut self, address: u8, buffer: &mut [u8]) -> Result<(), Self::Error> {
        self.read_from(I2cAddress::new(address), buffer)
    }
}
