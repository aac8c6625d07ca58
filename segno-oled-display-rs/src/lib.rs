//! Async OLED frame renderer for the Segno menu display.
//!
//! Three pieces: [`OledDriver`] wraps [`ssd1306`] in async
//! buffered-graphics mode, [`layout`] draws a [`RenderModel`] as one full
//! 128×64 frame, and [`display_update_task`] is the periodic loop that
//! polls the shared [`Menu`] and flushes changed frames to the hardware.
//!
//! # Quick Start
//!
//! ```ignore
//! use segno_oled_display_rs::{display_update_task, DisplayConfig, OledDriver};
//!
//! // From Embassy main, via a monomorphising wrapper task
//! // (see display_update_task for why one is needed):
//! let display = OledDriver::new(i2c1, 0x3C);
//! spawner.spawn(oled_task(display, menu, DisplayConfig::default())).unwrap();
//! ```
//!
//! # Crate Features
//!
//! - **`defmt`** *(default)* — structured logging via [`defmt`].
//! - **`task`** — the Embassy-based [`display_update_task`].
//!
//! [`Menu`]: segno::Menu
//! [`RenderModel`]: segno::RenderModel

#![no_std]

#[cfg(feature = "task")]
pub mod display_task;
pub mod driver;
pub mod error;
pub mod layout;

// ── Re-exports for convenience ───────────────────────────────────────────

#[cfg(feature = "task")]
pub use display_task::display_update_task;
pub use driver::OledDriver;
pub use error::OledError;
pub use layout::{draw_frame, DisplayConfig};
