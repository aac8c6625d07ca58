//! Parameter store and page navigation for the one-knob menu.
//!
//! The menu is a cycle of four editing pages, each binding the encoder to
//! one committed MIDI parameter:
//!
//! ```text
//!           ┌──────────────┐
//!     ┌────▶│ CommandType  │  range [0,1]   — PC or CC
//!     │     └──────┬───────┘
//!     │            ▼
//!     │     ┌──────────────┐
//!     │     │   Channel    │  range [1,16]
//!     │     └──────┬───────┘
//!     │            ▼ (ControlChange only; skipped for ProgramChange)
//!     │     ┌──────────────┐
//!     │     │   CcNumber   │  range [0,127]
//!     │     └──────┬───────┘
//!     │            ▼
//!     │     ┌──────────────┐
//!     └─────│ CommandValue │  range [0,127]
//!           └──────────────┘
//! ```
//!
//! [`Page`] is the single source of truth for per-page data: the bound
//! field, the legal range, the display label, and the page-indicator
//! offset. [`Menu`] owns the current page and the [`MidiParams`] store and
//! is the only mutator of either.
//!
//! Bounded accumulation of encoder ticks happens in the encoder adapter,
//! not here: on every page change [`Menu::navigate()`] hands back an
//! [`EncoderBinding`] with the new range and seed value, and the adapter
//! thereafter reports absolute in-range positions. Values arriving here
//! are still re-clamped before storage, since an out-of-range write would
//! publish an illegal MIDI byte.

mod command;
mod page;
mod params;
mod state;

pub use command::MidiCommand;
pub use page::{EncoderBinding, Page};
pub use params::MidiParams;
pub use state::{Menu, BANNER_READY, BANNER_SENT};
