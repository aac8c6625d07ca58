use super::command::MidiCommand;

/// The four committed MIDI parameters.
///
/// Fields are private; every setter clamps to the field's legal domain so
/// a stored value can never produce an illegal MIDI byte. Setters take the
/// encoder's `i32` domain and are expected to receive in-range values from
/// the bounded adapter — an out-of-range argument is a driver defect and
/// is silently corrected (logged when the `defmt` feature is enabled).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct MidiParams {
    command: MidiCommand,
    /// MIDI channel, 1–16.
    channel: u8,
    /// Controller number, 0–127. Meaningful only for Control Change.
    cc_number: u8,
    /// Program number (PC) or controller data value (CC), 0–127.
    value: u8,
}

impl Default for MidiParams {
    /// Power-on state: Program Change on channel 1, CC number 11
    /// (expression), value 0.
    fn default() -> Self {
        Self {
            command: MidiCommand::ProgramChange,
            channel: 1,
            cc_number: 11,
            value: 0,
        }
    }
}

impl MidiParams {
    pub fn command(&self) -> MidiCommand {
        self.command
    }

    pub fn channel(&self) -> u8 {
        self.channel
    }

    pub fn cc_number(&self) -> u8 {
        self.cc_number
    }

    pub fn value(&self) -> u8 {
        self.value
    }

    pub fn set_command(&mut self, index: i32) {
        self.command = MidiCommand::from_index(clamp_to(index, 0, 1) as i32);
    }

    pub fn set_channel(&mut self, v: i32) {
        self.channel = clamp_to(v, 1, 16);
    }

    pub fn set_cc_number(&mut self, v: i32) {
        self.cc_number = clamp_to(v, 0, 127);
    }

    pub fn set_value(&mut self, v: i32) {
        self.value = clamp_to(v, 0, 127);
    }
}

/// Clamp an encoder-domain value into `[min, max]` and narrow it.
///
/// The adapter already clamps; hitting the correction path here means a
/// driver bug upstream.
fn clamp_to(v: i32, min: i32, max: i32) -> u8 {
    if v < min || v > max {
        #[cfg(feature = "defmt")]
        defmt::warn!("parameter value {} outside [{}, {}], clamping", v, min, max);
    }
    v.clamp(min, max) as u8
}
