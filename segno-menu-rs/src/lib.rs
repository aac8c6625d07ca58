//! Core logic for the Segno one-knob MIDI controller.
//!
//! Segno is a single-purpose device: a rotary encoder with an integral
//! push-button walks a four-page menu (command type, channel, CC number,
//! value), a second button transmits the composed Program Change or
//! Control Change message, and a small OLED shows the current state.
//!
//! This crate holds everything with real decision logic and nothing that
//! touches hardware:
//!
//! - [`menu`] — the committed parameter store and the page navigation
//!   state machine, owned by one [`Menu`] controller.
//! - [`message`] — composition of the outbound [`wmidi`] message from the
//!   committed store.
//! - [`render`] — the pure [`RenderModel`] builder consumed by the display
//!   driver.
//!
//! The encoder adapter, the OLED driver, and the MIDI transport live in
//! sibling crates and interact with this one only through value types:
//! the adapter feeds bounded absolute positions in and receives an
//! [`EncoderBinding`] back on every page change; the display receives
//! [`RenderModel`] snapshots; the transport receives composed messages.
//!
//! # Crate Features
//!
//! - **`defmt`** — structured logging for embedded targets. Off by
//!   default so host tests need no logging backend.

#![no_std]

pub mod menu;
pub mod message;
pub mod render;

// ── Re-exports for convenience ───────────────────────────────────────────

pub use menu::{EncoderBinding, Menu, MidiCommand, MidiParams, Page};
pub use render::RenderModel;
