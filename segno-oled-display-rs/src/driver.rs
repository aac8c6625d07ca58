//! SSD1306 lifecycle wrapper in async buffered-graphics mode.

use display_interface_i2c::I2CInterface;
use embedded_hal_async::i2c::I2c;
use ssd1306::{mode::BufferedGraphicsModeAsync, prelude::*, I2CDisplayInterface, Ssd1306Async};

use crate::error::OledError;

/// The concrete panel type wrapped by [`OledDriver`].
type Panel<I2C> =
    Ssd1306Async<I2CInterface<I2C>, DisplaySize128x64, BufferedGraphicsModeAsync<DisplaySize128x64>>;

/// Async driver for an SSD1306 128×64 OLED over I2C.
///
/// Construction is traffic-free; [`init()`](Self::init) performs the
/// panel's command sequence and unlocks drawing. Frames are composed in
/// the in-memory buffer through [`draw_target()`](Self::draw_target) and
/// pushed to the panel with [`flush()`](Self::flush).
pub struct OledDriver<I2C> {
    panel: Panel<I2C>,
    /// Set after a successful `init()`; gates all hardware operations.
    initialized: bool,
}

impl<I2C> OledDriver<I2C>
where
    I2C: I2c,
{
    /// Wrap an I2C peripheral as an uninitialised panel.
    ///
    /// # Arguments
    /// * `i2c` — bus peripheral, owned exclusively by this driver.
    /// * `address` — 7-bit panel address, `0x3C` on most modules.
    pub fn new(i2c: I2C, address: u8) -> Self {
        let interface = I2CDisplayInterface::new_custom_address(i2c, address);
        let panel = Ssd1306Async::new(interface, DisplaySize128x64, DisplayRotation::Rotate0)
            .into_buffered_graphics_mode();

        Self {
            panel,
            initialized: false,
        }
    }

    /// Run the SSD1306 power-up command sequence.
    ///
    /// # Errors
    ///
    /// [`OledError::Interface`] if the panel does not respond.
    pub async fn init(&mut self) -> Result<(), OledError> {
        self.panel.init().await?;
        self.initialized = true;
        Ok(())
    }

    /// Blank the in-memory frame buffer. The panel itself is untouched
    /// until the next [`flush()`](Self::flush).
    pub fn clear_buffer(&mut self) {
        self.panel.clear_buffer();
    }

    /// The frame buffer as an `embedded-graphics` draw target, or `None`
    /// before initialisation.
    pub fn draw_target(&mut self) -> Option<&mut Panel<I2C>> {
        self.initialized.then_some(&mut self.panel)
    }

    /// Push the frame buffer to the panel (roughly 20 ms of I2C at
    /// 400 kHz for the full 1024 bytes).
    ///
    /// # Errors
    ///
    /// [`OledError::NotInitialized`] before [`init()`](Self::init), or
    /// [`OledError::Interface`] on a bus failure.
    pub async fn flush(&mut self) -> Result<(), OledError> {
        if !self.initialized {
            return Err(OledError::NotInitialized);
        }
        self.panel.flush().await?;
        Ok(())
    }

    /// Whether [`init()`](Self::init) has succeeded. Traffic-free.
    pub fn is_initialized(&self) -> bool {
        self.initialized
    }
}
