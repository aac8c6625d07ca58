//! High-level interface for the rotary encoder breakout.
//!
//! [`RotaryBoard`] wraps the low-level Seesaw driver with the board's
//! register addressing: the encoder module for rotation, the GPIO module
//! for the push-button and the shared INT line.

use embedded_hal_async::i2c::I2c;

use crate::error::RotaryError;
use crate::registers::{
    BUTTON_MASK, ENCODER_DELTA, ENCODER_INTENSET, ENCODER_POSITION, GPIO_BULK, GPIO_BULK_SET,
    GPIO_DIRCLR_BULK, GPIO_INTENSET, GPIO_INTFLAG, GPIO_PULLENSET, MODULE_ENCODER, MODULE_GPIO,
};
use crate::seesaw::SeesawDriver;

/// Async interface for a single-encoder Seesaw breakout with push-button.
///
/// # Example
///
/// ```ignore
/// use rotary_driver::{RotaryBoard, DEFAULT_ADDRESS};
///
/// // `i2c` is any `embedded-hal-async` I2C implementation
/// let mut board = RotaryBoard::new(i2c, DEFAULT_ADDRESS);
/// board.init().await?;
///
/// let delta = board.read_delta().await?;
/// let pressed = board.button_pressed().await?;
/// ```
pub struct RotaryBoard<I2C> {
    seesaw: SeesawDriver<I2C>,
}

impl<I2C> RotaryBoard<I2C>
where
    I2C: I2c,
{
    /// Create a new board interface.
    ///
    /// # Arguments
    /// * `i2c` — I2C peripheral (takes ownership for exclusive access)
    /// * `address` — 7-bit device address (factory default 0x36)
    pub fn new(i2c: I2C, address: u8) -> Self {
        Self {
            seesaw: SeesawDriver::new(i2c, address),
        }
    }

    /// Configure the board: button pin as input with pull-up, interrupts
    /// enabled for both the button and the encoder.
    ///
    /// Must be called once before the INT line is armed. The INT pin is
    /// active-low and stays asserted until the pending source is
    /// consumed ([`read_delta()`](Self::read_delta) for rotation,
    /// [`clear_interrupts()`](Self::clear_interrupts) for the button).
    pub async fn init(&mut self) -> Result<(), RotaryError<I2C::Error>> {
        // Button: input, pull-up, level high when released.
        self.seesaw
            .write_u32(MODULE_GPIO, GPIO_DIRCLR_BULK, BUTTON_MASK)
            .await?;
        self.seesaw
            .write_u32(MODULE_GPIO, GPIO_PULLENSET, BUTTON_MASK)
            .await?;
        self.seesaw
            .write_u32(MODULE_GPIO, GPIO_BULK_SET, BUTTON_MASK)
            .await?;

        // Interrupt sources: button edges and encoder movement.
        self.seesaw
            .write_u32(MODULE_GPIO, GPIO_INTENSET, BUTTON_MASK)
            .await?;
        self.seesaw
            .write_u8(MODULE_ENCODER, ENCODER_INTENSET, 0x01)
            .await?;

        Ok(())
    }

    // -----------------------------------------------------------------------
    // Encoder
    // -----------------------------------------------------------------------

    /// Read the absolute hardware position.
    ///
    /// The Seesaw firmware accumulates ticks in an unbounded 32-bit signed
    /// counter; range handling belongs to
    /// [`BoundedPosition`](crate::BoundedPosition).
    pub async fn read_position(&mut self) -> Result<i32, RotaryError<I2C::Error>> {
        self.seesaw.read_i32(MODULE_ENCODER, ENCODER_POSITION).await
    }

    /// Overwrite the absolute hardware position.
    pub async fn set_position(&mut self, position: i32) -> Result<(), RotaryError<I2C::Error>> {
        self.seesaw
            .write_i32(MODULE_ENCODER, ENCODER_POSITION, position)
            .await
    }

    /// Read the tick count since the previous delta read.
    ///
    /// Reading clears the hardware count and the encoder's interrupt
    /// flag, so a quiet encoder reads 0.
    pub async fn read_delta(&mut self) -> Result<i32, RotaryError<I2C::Error>> {
        self.seesaw.read_i32(MODULE_ENCODER, ENCODER_DELTA).await
    }

    // -----------------------------------------------------------------------
    // Button and interrupts
    // -----------------------------------------------------------------------

    /// Read the push-button state. `true` means pressed (pin pulled low).
    pub async fn button_pressed(&mut self) -> Result<bool, RotaryError<I2C::Error>> {
        let pins = self.seesaw.read_u32(MODULE_GPIO, GPIO_BULK).await?;
        Ok(pins & BUTTON_MASK == 0)
    }

    /// Consume pending GPIO interrupt flags, releasing the INT line.
    ///
    /// Call after servicing an interrupt; the encoder flag is already
    /// cleared by [`read_delta()`](Self::read_delta).
    pub async fn clear_interrupts(&mut self) -> Result<(), RotaryError<I2C::Error>> {
        let _ = self.seesaw.read_u32(MODULE_GPIO, GPIO_INTFLAG).await?;
        Ok(())
    }
}
