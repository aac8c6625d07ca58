//! Display error type.

use display_interface::DisplayError;

/// Failure modes of the OLED driver.
///
/// Bus-level problems surface as [`DisplayError`] because the `ssd1306`
/// crate erases the underlying I2C error type.
#[derive(Debug)]
pub enum OledError {
    /// The panel rejected a command or the bus transaction failed.
    Interface(DisplayError),
    /// A flush was attempted before [`init()`](crate::OledDriver::init)
    /// succeeded.
    NotInitialized,
}

impl From<DisplayError> for OledError {
    fn from(e: DisplayError) -> Self {
        Self::Interface(e)
    }
}

#[cfg(feature = "defmt")]
impl defmt::Format for OledError {
    fn format(&self, f: defmt::Formatter) {
        match self {
            Self::Interface(_) => defmt::write!(f, "display interface error"),
            Self::NotInitialized => defmt::write!(f, "display not initialised"),
        }
    }
}
