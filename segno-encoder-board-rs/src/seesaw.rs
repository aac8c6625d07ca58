//! Low-level Seesaw protocol primitives.
//!
//! Reads follow the Seesaw write→delay→read sequence: the two-byte
//! register address is written in its own transaction, the firmware is
//! given time to stage the response, then the data is read. A combined
//! `write_read` with repeated start does not leave the firmware enough
//! time and returns stale bytes.
//!
//! Crate-private — consumers use [`RotaryBoard`](crate::RotaryBoard).

use embassy_time::{Duration, Timer};
use embedded_hal_async::i2c::I2c;

use crate::error::RotaryError;
use crate::registers::SEESAW_DELAY_US;

/// Owns the I2C peripheral and the device address.
pub(crate) struct SeesawDriver<I2C> {
    i2c: I2C,
    address: u8,
}

impl<I2C> SeesawDriver<I2C>
where
    I2C: I2c,
{
    pub fn new(i2c: I2C, address: u8) -> Self {
        Self { i2c, address }
    }

    /// Register-address write, mandatory delay, then response read.
    async fn register_read(
        &mut self,
        module: u8,
        function: u8,
        buffer: &mut [u8],
    ) -> Result<(), RotaryError<I2C::Error>> {
        self.i2c.write(self.address, &[module, function]).await?;
        Timer::after(Duration::from_micros(SEESAW_DELAY_US)).await;
        self.i2c.read(self.address, buffer).await?;
        Ok(())
    }

    /// Read a 32-bit signed value (Seesaw byte order is big-endian).
    pub async fn read_i32(
        &mut self,
        module: u8,
        function: u8,
    ) -> Result<i32, RotaryError<I2C::Error>> {
        let mut buf = [0u8; 4];
        self.register_read(module, function, &mut buf).await?;
        Ok(i32::from_be_bytes(buf))
    }

    /// Read a 32-bit unsigned value.
    pub async fn read_u32(
        &mut self,
        module: u8,
        function: u8,
    ) -> Result<u32, RotaryError<I2C::Error>> {
        let mut buf = [0u8; 4];
        self.register_read(module, function, &mut buf).await?;
        Ok(u32::from_be_bytes(buf))
    }

    /// Write a 32-bit signed value in one transaction with the address.
    pub async fn write_i32(
        &mut self,
        module: u8,
        function: u8,
        value: i32,
    ) -> Result<(), RotaryError<I2C::Error>> {
        let mut buf = [0u8; 6];
        buf[0] = module;
        buf[1] = function;
        buf[2..6].copy_from_slice(&value.to_be_bytes());
        self.i2c.write(self.address, &buf).await?;
        Ok(())
    }

    /// Write a 32-bit unsigned value (bulk pin masks).
    pub async fn write_u32(
        &mut self,
        module: u8,
        function: u8,
        value: u32,
    ) -> Result<(), RotaryError<I2C::Error>> {
        let mut buf = [0u8; 6];
        buf[0] = module;
        buf[1] = function;
        buf[2..6].copy_from_slice(&value.to_be_bytes());
        self.i2c.write(self.address, &buf).await?;
        Ok(())
    }

    /// Write a single byte to a register.
    pub async fn write_u8(
        &mut self,
        module: u8,
        function: u8,
        value: u8,
    ) -> Result<(), RotaryError<I2C::Error>> {
        self.i2c.write(self.address, &[module, function, value]).await?;
        Ok(())
    }
}
