//! Composition of the outbound MIDI message.
//!
//! The committed [`MidiParams`] store guarantees its domains, so
//! composition never needs a validation step; the invariant is asserted in
//! debug builds instead of being silently truncated away.

use wmidi::{Channel, ControlFunction, MidiMessage, U7};

use crate::menu::{MidiCommand, MidiParams};

/// Upper bound on the wire size of any message this device sends.
///
/// Program Change is 2 bytes, Control Change 3.
pub const MAX_MESSAGE_LEN: usize = 3;

/// Compose the wire message for the committed parameter store.
///
/// Program Change carries the value as the program number; Control Change
/// carries the controller number and the value. Channel and data bytes are
/// in range by the store invariant.
pub fn compose(params: &MidiParams) -> MidiMessage<'static> {
    debug_assert!((1..=16).contains(&params.channel()));
    debug_assert!(params.cc_number() <= 127);
    debug_assert!(params.value() <= 127);

    let channel = Channel::from_index(params.channel() - 1).unwrap_or(Channel::Ch1);

    match params.command() {
        MidiCommand::ProgramChange => {
            MidiMessage::ProgramChange(channel, U7::from_u8_lossy(params.value()))
        }
        MidiCommand::ControlChange => MidiMessage::ControlChange(
            channel,
            ControlFunction(U7::from_u8_lossy(params.cc_number())),
            U7::from_u8_lossy(params.value()),
        ),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn params(command: i32, channel: i32, cc_number: i32, value: i32) -> MidiParams {
        let mut p = MidiParams::default();
        p.set_command(command);
        p.set_channel(channel);
        p.set_cc_number(cc_number);
        p.set_value(value);
        p
    }

    fn wire(msg: &MidiMessage) -> ([u8; MAX_MESSAGE_LEN], usize) {
        let mut buf = [0u8; MAX_MESSAGE_LEN];
        let len = msg.copy_to_slice(&mut buf).unwrap();
        (buf, len)
    }

    #[test]
    fn program_change_wire_format() {
        let msg = compose(&params(0, 1, 11, 42));
        let (buf, len) = wire(&msg);
        assert_eq!(len, 2);
        assert_eq!(&buf[..len], &[0xC0, 42]);
    }

    #[test]
    fn control_change_wire_format() {
        let msg = compose(&params(1, 1, 64, 100));
        let (buf, len) = wire(&msg);
        assert_eq!(len, 3);
        assert_eq!(&buf[..len], &[0xB0, 64, 100]);
    }

    #[test]
    fn channel_maps_to_status_byte_low_nibble() {
        let msg = compose(&params(0, 16, 0, 0));
        let (buf, _) = wire(&msg);
        assert_eq!(buf[0], 0xCF);

        let msg = compose(&params(1, 10, 0, 0));
        let (buf, _) = wire(&msg);
        assert_eq!(buf[0], 0xB9);
    }

    #[test]
    fn composed_bytes_stay_in_legal_midi_ranges() {
        // Boundary sweep over the whole committed domain.
        for command in 0..=1 {
            for channel in [1, 8, 16] {
                for data in [0, 64, 127] {
                    let msg = compose(&params(command, channel, data, data));
                    let (buf, len) = wire(&msg);

                    // Status byte: correct kind, channel nibble 0-15.
                    let status = buf[0];
                    assert_eq!(status >> 4, if command == 0 { 0xC } else { 0xB });
                    assert!((status & 0x0F) < 16);

                    // Data bytes are 7-bit.
                    for &byte in &buf[1..len] {
                        assert!(byte <= 127);
                    }
                }
            }
        }
    }

    #[test]
    fn cc_number_ignored_in_program_change_mode() {
        let msg = compose(&params(0, 5, 99, 12));
        let (buf, len) = wire(&msg);
        assert_eq!(&buf[..len], &[0xC4, 12]);
    }
}
