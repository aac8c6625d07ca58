//! Error types for the rotary board driver.

use core::fmt;

/// Errors that can occur when communicating with the rotary breakout.
///
/// The board has a single encoder and a single button, so there is no
/// index validation to fail — every error is a bus error.
#[derive(Debug)]
pub enum RotaryError<E> {
    /// Underlying I2C bus error.
    I2c(E),
}

// Allow ergonomic `?` propagation from raw I2C errors.
impl<E> From<E> for RotaryError<E> {
    fn from(error: E) -> Self {
        RotaryError::I2c(error)
    }
}

impl<E: fmt::Debug> fmt::Display for RotaryError<E> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            RotaryError::I2c(e) => write!(f, "I2C error: {:?}", e),
        }
    }
}

#[cfg(feature = "defmt")]
impl<E: defmt::Format> defmt::Format for RotaryError<E> {
    fn format(&self, f: defmt::Formatter) {
        match self {
            RotaryError::I2c(e) => defmt::write!(f, "I2C error: {}", e),
        }
    }
}
