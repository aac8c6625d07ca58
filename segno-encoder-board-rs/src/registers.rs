//! Seesaw register addresses for the rotary encoder breakout.
//!
//! Seesaw registers are addressed with two bytes: a module ID followed by
//! a function offset within the module. The single-encoder board uses the
//! GPIO module for the push-button and the encoder module for rotation.

// ---------------------------------------------------------------------------
// Module IDs
// ---------------------------------------------------------------------------

/// Seesaw GPIO module identifier.
pub const MODULE_GPIO: u8 = 0x01;

/// Seesaw encoder module identifier.
pub const MODULE_ENCODER: u8 = 0x11;

// ---------------------------------------------------------------------------
// GPIO module registers (button handling)
// ---------------------------------------------------------------------------

/// Bulk direction-clear register: a set bit makes that pin an input.
pub const GPIO_DIRCLR_BULK: u8 = 0x03;

/// Bulk pin-level read register (32-bit mask).
pub const GPIO_BULK: u8 = 0x04;

/// Bulk pin-set register; with pull enable on, a set bit selects pull-up
/// rather than pull-down.
pub const GPIO_BULK_SET: u8 = 0x05;

/// Per-pin interrupt enable register.
pub const GPIO_INTENSET: u8 = 0x08;

/// Interrupt flag register (32-bit, read-only). Reading clears all GPIO
/// interrupt flags and releases the INT pin.
pub const GPIO_INTFLAG: u8 = 0x0A;

/// Bulk pull-up/pull-down enable register.
pub const GPIO_PULLENSET: u8 = 0x0B;

// ---------------------------------------------------------------------------
// Encoder module registers
// ---------------------------------------------------------------------------

/// Encoder interrupt enable register.
pub const ENCODER_INTENSET: u8 = 0x10;

/// Absolute encoder position (32-bit signed, read/write).
pub const ENCODER_POSITION: u8 = 0x30;

/// Ticks since the last read (32-bit signed). Reading clears the count
/// and the encoder interrupt flag.
pub const ENCODER_DELTA: u8 = 0x40;

// ---------------------------------------------------------------------------
// Board constants
// ---------------------------------------------------------------------------

/// Seesaw GPIO pin wired to the encoder's push-button.
pub const BUTTON_PIN: u8 = 24;

/// Bit mask for [`BUTTON_PIN`] in the bulk GPIO registers.
pub const BUTTON_MASK: u32 = 1 << BUTTON_PIN;

/// Required delay in microseconds between the register write and the data
/// read, per the Seesaw firmware specification.
pub const SEESAW_DELAY_US: u64 = 125;

/// Factory I2C address of the rotary encoder breakout.
pub const DEFAULT_ADDRESS: u8 = 0x36;
