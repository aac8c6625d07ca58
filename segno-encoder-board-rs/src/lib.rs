//! Async driver for a Seesaw-based I2C rotary encoder breakout.
//!
//! Targets the Adafruit I2C rotary encoder board: one quadrature encoder,
//! one push-button on Seesaw GPIO pin 24, and an active-low INT pin that
//! fires on rotation or button edges.
//!
//! # Architecture
//!
//! Three layers:
//!
//! - **`seesaw`** (crate-private) — Seesaw protocol primitives: two-byte
//!   register addressing, the mandatory write→delay→read sequence, and
//!   big-endian typed accessors.
//! - **[`RotaryBoard`]** (public) — validated board interface: position,
//!   delta, button level, interrupt management.
//! - **[`BoundedPosition`]** (public, pure) — software accumulator that
//!   turns raw deltas into an absolute position clamped to a caller-set
//!   range. The Seesaw counter itself is unbounded; consumers that edit a
//!   ranged value feed deltas through this adapter and never see an
//!   out-of-range position.
//!
//! # Quick start
//!
//! ```ignore
//! use rotary_driver::{BoundedPosition, RotaryBoard, DEFAULT_ADDRESS};
//!
//! let mut board = RotaryBoard::new(i2c, DEFAULT_ADDRESS);
//! board.init().await?;
//!
//! let mut position = BoundedPosition::new(0, 127, 0);
//! // On each INT: fold the hardware delta into the bounded position.
//! let delta = board.read_delta().await?;
//! let value = position.apply(delta);
//! ```
//!
//! # Features
//!
//! - **`defmt`** — [`defmt::Format`] implementations on error types for
//!   embedded logging.

#![no_std]

pub use board::RotaryBoard;
pub use bounded::BoundedPosition;
pub use error::RotaryError;
pub use registers::DEFAULT_ADDRESS;

mod board;
mod bounded;
mod error;
mod registers;
mod seesaw;
